use serde::Deserialize;
use std::collections::HashMap;

use super::{coordinate, non_empty, number};
use crate::{format::visibility_meters, FeedError, NOT_AVAILABLE};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TafResponse {
    data: TafData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TafData {
    #[serde(rename = "TAF")]
    tafs: Vec<TafNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TafNode {
    raw_text: Option<String>,
    station_id: Option<String>,
    issue_time: Option<String>,
    valid_time_from: Option<String>,
    valid_time_to: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    #[serde(rename = "forecast")]
    forecasts: Vec<ForecastNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ForecastNode {
    fcst_time_from: Option<String>,
    fcst_time_to: Option<String>,
    change_indicator: Option<String>,
    wind_dir_degrees: Option<String>,
    wind_speed_kt: Option<String>,
    wind_gust_kt: Option<String>,
    wx_string: Option<String>,
    visibility_statute_mi: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StationResponse {
    data: StationData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StationData {
    #[serde(rename = "Station")]
    stations: Vec<StationNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StationNode {
    station_id: Option<String>,
    site: Option<String>,
}

/// One change group of a TAF, kept in feed order.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPeriod {
    pub time_from: String,
    pub time_to: String,
    pub change: String,
    pub wind_dir: String,
    /// `270°/15` or `270°/15 (gust 25)`
    pub wind: String,
    pub wind_speed_kt: Option<f64>,
    pub wind_gust_kt: Option<f64>,
    pub weather: String,
    pub visibility_m: Option<i64>,
}

impl ForecastPeriod {
    /// `"{meters} m"`, or "N/A" when the group has no usable visibility.
    pub fn visibility(&self) -> String {
        self.visibility_m
            .map(|m| format!("{} m", m))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// A terminal aerodrome forecast for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct TafRecord {
    pub station_id: String,
    pub station_name: String,
    pub raw_text: String,
    pub issue_time: String,
    pub valid_time_from: String,
    pub valid_time_to: String,
    pub latitude: f64,
    pub longitude: f64,
    pub periods: Vec<ForecastPeriod>,
}

fn or_na(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl From<ForecastNode> for ForecastPeriod {
    fn from(node: ForecastNode) -> Self {
        let wind_dir = non_empty(node.wind_dir_degrees).unwrap_or_else(|| "VRB".to_string());
        let wind_speed = non_empty(node.wind_speed_kt).unwrap_or_else(|| "0".to_string());
        let gust = non_empty(node.wind_gust_kt);
        let wind = match &gust {
            Some(gust) => format!("{}°/{} (gust {})", wind_dir, wind_speed, gust),
            None => format!("{}°/{}", wind_dir, wind_speed),
        };

        ForecastPeriod {
            time_from: or_na(node.fcst_time_from),
            time_to: or_na(node.fcst_time_to),
            change: or_na(node.change_indicator),
            wind_speed_kt: number(Some(wind_speed.as_str())),
            wind_gust_kt: number(gust.as_deref()),
            wind_dir,
            wind,
            weather: or_na(node.wx_string),
            visibility_m: number(node.visibility_statute_mi.as_deref()).map(visibility_meters),
        }
    }
}

impl TafNode {
    fn into_record(self, names: &HashMap<String, String>) -> Option<TafRecord> {
        // A missing coordinate reads as zero, and zero is treated as missing.
        let latitude = coordinate(self.latitude.as_deref()).filter(|v| *v != 0.0)?;
        let longitude = coordinate(self.longitude.as_deref()).filter(|v| *v != 0.0)?;
        let station_id = non_empty(self.station_id).unwrap_or_else(|| "Unknown".to_string());
        let station_name = names
            .get(&station_id)
            .cloned()
            .unwrap_or_else(|| station_id.clone());

        Some(TafRecord {
            station_name,
            station_id,
            raw_text: non_empty(self.raw_text).unwrap_or_else(|| "No raw text".to_string()),
            issue_time: or_na(self.issue_time),
            valid_time_from: or_na(self.valid_time_from),
            valid_time_to: or_na(self.valid_time_to),
            latitude,
            longitude,
            periods: self.forecasts.into_iter().map(ForecastPeriod::from).collect(),
        })
    }
}

/// Parses the station-name XML into a station id to site name map.
/// Entries missing either value are ignored.
pub fn parse_station_names(xml: &str) -> Result<HashMap<String, String>, FeedError> {
    let response: StationResponse = serde_xml_rs::from_str(xml)?;
    Ok(response
        .data
        .stations
        .into_iter()
        .filter_map(|s| Some((non_empty(s.station_id)?, non_empty(s.site)?)))
        .collect())
}

/// Parses the TAF XML. Station names come from `names`, falling back to the
/// station id. Nodes without a usable position are skipped.
pub fn parse_tafs(xml: &str, names: &HashMap<String, String>) -> Result<Vec<TafRecord>, FeedError> {
    let response: TafResponse = serde_xml_rs::from_str(xml)?;
    Ok(response
        .data
        .tafs
        .into_iter()
        .filter_map(|node| node.into_record(names))
        .collect())
}
