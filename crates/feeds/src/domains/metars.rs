use log::debug;
use serde::Deserialize;

use super::{coordinate, csv_reader, non_empty, number};
use crate::{
    format::{sky_cover, SkyCondition},
    FeedError, FlightCategory,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetarRow {
    station_id: Option<String>,
    raw_text: Option<String>,
    observation_time: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    temp_c: Option<String>,
    dewpoint_c: Option<String>,
    wind_dir_degrees: Option<String>,
    wind_speed_kt: Option<String>,
    visibility_statute_mi: Option<String>,
    wx_string: Option<String>,
    flight_category: Option<String>,
    sky_cover_1: Option<String>,
    cloud_base_ft_agl_1: Option<String>,
    sky_cover_2: Option<String>,
    cloud_base_ft_agl_2: Option<String>,
    sky_cover_3: Option<String>,
    cloud_base_ft_agl_3: Option<String>,
    sky_cover_4: Option<String>,
    cloud_base_ft_agl_4: Option<String>,
}

/// One reported cloud layer slot. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyLayer {
    pub cover: Option<String>,
    pub base_ft_agl: Option<String>,
}

impl SkyLayer {
    fn new(cover: Option<String>, base_ft_agl: Option<String>) -> Self {
        Self {
            cover: non_empty(cover),
            base_ft_agl: non_empty(base_ft_agl),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cover.is_none() && self.base_ft_agl.is_none()
    }
}

/// A METAR observation ready for annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetarRecord {
    pub station_id: Option<String>,
    pub raw_text: String,
    pub flight_category: FlightCategory,
    pub observation_time: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub wind_dir_degrees: Option<String>,
    pub wind_speed_kt: Option<String>,
    pub visibility_statute_mi: Option<f64>,
    pub sky: [SkyLayer; 4],
    pub temp_c: Option<String>,
    pub dewpoint_c: Option<String>,
    pub wx_string: Option<String>,
}

impl MetarRecord {
    /// Sky condition derived from the first three cloud slots.
    pub fn sky_condition(&self) -> SkyCondition {
        sky_cover(
            &self.raw_text,
            self.sky[..3]
                .iter()
                .map(|layer| layer.cover.as_deref().unwrap_or_default()),
        )
    }

    /// Condition used to pick the weather icon: the weather string when
    /// reported, otherwise the sky condition label.
    pub fn display_condition(&self) -> String {
        self.wx_string
            .clone()
            .unwrap_or_else(|| self.sky_condition().label().to_string())
    }
}

impl MetarRow {
    fn into_record(self) -> Option<MetarRecord> {
        let latitude = coordinate(self.latitude.as_deref())?;
        let longitude = coordinate(self.longitude.as_deref())?;
        let raw_text = non_empty(self.raw_text)?;
        Some(MetarRecord {
            station_id: non_empty(self.station_id),
            raw_text,
            flight_category: FlightCategory::from_feed(self.flight_category.as_deref()),
            observation_time: non_empty(self.observation_time),
            latitude,
            longitude,
            wind_dir_degrees: non_empty(self.wind_dir_degrees),
            wind_speed_kt: non_empty(self.wind_speed_kt),
            visibility_statute_mi: number(self.visibility_statute_mi.as_deref()),
            sky: [
                SkyLayer::new(self.sky_cover_1, self.cloud_base_ft_agl_1),
                SkyLayer::new(self.sky_cover_2, self.cloud_base_ft_agl_2),
                SkyLayer::new(self.sky_cover_3, self.cloud_base_ft_agl_3),
                SkyLayer::new(self.sky_cover_4, self.cloud_base_ft_agl_4),
            ],
            temp_c: non_empty(self.temp_c),
            dewpoint_c: non_empty(self.dewpoint_c),
            wx_string: non_empty(self.wx_string),
        })
    }
}

/// Parses the METAR CSV. A row needs a latitude, a longitude and the raw
/// report text; anything less is skipped.
pub fn parse_metars(text: &str) -> Result<Vec<MetarRecord>, FeedError> {
    let mut reader = csv_reader(text);
    reader.headers()?;

    let mut metars = vec![];
    for row in reader.deserialize::<MetarRow>() {
        match row {
            Ok(row) => {
                if let Some(metar) = row.into_record() {
                    metars.push(metar);
                }
            }
            Err(e) => debug!("skipping unreadable metar row: {}", e),
        }
    }
    Ok(metars)
}
