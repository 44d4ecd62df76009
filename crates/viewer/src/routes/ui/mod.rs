mod fragments;
mod map;

pub use fragments::{metar_legend_handler, sigmet_legend_handler, taf_table_handler};
pub use map::map_handler;
