pub mod annotations;
pub mod controller;
pub mod controls;
pub mod loader;
pub mod routes;
mod startup;
pub mod store;
pub mod templates;
mod utils;

pub use controller::MapController;
pub use loader::FeedLoader;
pub use routes::*;
pub use startup::*;
pub use store::{Feed, FeedData, LayerStore, Snapshot, Ticket};
pub use utils::*;
