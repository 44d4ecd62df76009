mod domains;
mod error;
pub mod format;
mod source;
pub mod tables;

pub use domains::*;
pub use error::FeedError;
pub use format::NOT_AVAILABLE;
pub use source::*;
pub use tables::*;
