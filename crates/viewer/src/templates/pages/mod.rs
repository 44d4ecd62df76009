mod map;

pub use map::{map_page, MapPageData};
