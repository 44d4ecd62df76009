mod forecast_table;
mod legends;
mod popups;
mod slider;

pub use forecast_table::{forecast_table, DEFAULT_VISIBILITY_M};
pub use legends::{hazard_entries, metar_legend, sigmet_legend, HazardEntry};
pub use popups::{
    airport_popup, cloud_summary, metar_popup, no_sigmet_notice, sigmet_label, sigmet_popup,
    taf_popup, weather_popup,
};
pub use slider::slider_control;
