mod commands;
mod error;
mod layers;

pub use commands::{commands_handler, reload_handler, state_handler, ReloadResponse};
pub use error::ApiError;
pub use layers::{
    annotations_for, boundary_handler, layer_handler, winds_handler, BoundaryResponse,
    BoundaryStyle, LayerResponse,
};
