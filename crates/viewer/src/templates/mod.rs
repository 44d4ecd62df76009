pub mod fragments;
pub mod layouts;
pub mod pages;

pub use layouts::{base, PageConfig};
pub use pages::{map_page, MapPageData};
