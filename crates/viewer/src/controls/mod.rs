//! Layer and forecast-slider state. Everything here is plain data with
//! pure transitions; timers and feed loads are run by the caller from the
//! returned effects.

mod layers;
mod slider;
mod state;

pub use layers::{BaseMap, LayerId, LayerState, UnknownLayer};
pub use slider::{
    caption, hour_for, raster_url, ForecastSlider, Playback, DEFAULT_INDEX, HOURS_PER_STEP,
    IMAGE_BOUNDS, MAX_INDEX,
};
pub use state::{Command, Effect, LegendsView, RasterView, SliderView, StateView, ViewerState};
