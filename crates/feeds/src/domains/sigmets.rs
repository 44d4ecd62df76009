use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::non_empty;
use crate::{FeedError, SigmetHazard, SigmetTrend, NOT_AVAILABLE};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SigmetNode {
    geom: Option<String>,
    coords: Option<Vec<CoordNode>>,
    hazard: Option<String>,
    qualifier: Option<String>,
    fir_id: Option<String>,
    fir_name: Option<String>,
    valid_time_from: Option<Value>,
    valid_time_to: Option<Value>,
    dir: Option<Value>,
    spd: Option<Value>,
    chng: Option<String>,
    raw_sigmet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CoordNode {
    lat: f64,
    lon: f64,
}

/// A polygon vertex in map order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

/// One area SIGMET.
#[derive(Debug, Clone, PartialEq)]
pub struct SigmetRecord {
    pub hazard: SigmetHazard,
    /// Hazard code as sent by the feed, "Unknown" when missing.
    pub hazard_code: String,
    pub qualifier: String,
    pub fir_id: String,
    pub fir_name: String,
    pub vertices: Vec<LatLng>,
    pub valid_from: Option<i64>,
    pub valid_to: Option<i64>,
    pub direction: Option<String>,
    pub speed: Option<String>,
    pub trend: SigmetTrend,
    pub raw_text: Option<String>,
    /// FIR is one of the configured domestic regions.
    pub domestic: bool,
}

impl SigmetRecord {
    /// Arithmetic mean of the vertices. This is not the area centroid, and a
    /// closing vertex that repeats the first one is counted twice.
    pub fn centroid(&self) -> LatLng {
        let n = self.vertices.len() as f64;
        let (lat, lon) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lon), v| (lat + v.lat, lon + v.lon));
        LatLng {
            lat: lat / n,
            lon: lon / n,
        }
    }

    /// `"{dir} @ {spd} KT"`, just the direction, or "Stationary".
    pub fn movement(&self) -> String {
        match (&self.direction, &self.speed) {
            (Some(dir), Some(spd)) => format!("{} @ {} KT", dir, spd),
            (Some(dir), None) => dir.clone(),
            _ => "Stationary".to_string(),
        }
    }

    /// `"{hazard} ({qualifier})"`, used as popup heading and marker title.
    pub fn title(&self) -> String {
        format!("{} ({})", self.hazard_code, self.qualifier)
    }
}

fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => non_empty(Some(s)),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn epoch(value: Option<Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SigmetNode {
    fn into_record(self, domestic_firs: &[String]) -> Option<SigmetRecord> {
        if self.geom.as_deref() != Some("AREA") {
            return None;
        }
        let vertices: Vec<LatLng> = self
            .coords?
            .into_iter()
            .map(|c| LatLng {
                lat: c.lat,
                lon: c.lon,
            })
            .collect();
        if vertices.is_empty() {
            return None;
        }

        let hazard_code = non_empty(self.hazard).unwrap_or_else(|| "Unknown".to_string());
        let fir_id = non_empty(self.fir_id)
            .map(|id| id.to_uppercase())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let domestic = domestic_firs.iter().any(|fir| fir.eq_ignore_ascii_case(&fir_id));

        Some(SigmetRecord {
            hazard: SigmetHazard::from_code(&hazard_code),
            hazard_code,
            qualifier: non_empty(self.qualifier).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            fir_name: non_empty(self.fir_name).unwrap_or_else(|| fir_id.clone()),
            fir_id,
            vertices,
            valid_from: epoch(self.valid_time_from),
            valid_to: epoch(self.valid_time_to),
            direction: text(self.dir),
            speed: text(self.spd),
            trend: SigmetTrend::from_code(self.chng.as_deref()),
            raw_text: non_empty(self.raw_sigmet),
            domestic,
        })
    }
}

/// Parses the SIGMET JSON array. Records that are not `AREA` SIGMETs with at
/// least one vertex are skipped, as is any record that does not decode.
pub fn parse_sigmets(json: &str, domestic_firs: &[String]) -> Result<Vec<SigmetRecord>, FeedError> {
    let nodes: Vec<Value> = serde_json::from_str(json)?;

    let mut sigmets = vec![];
    for node in nodes {
        match serde_json::from_value::<SigmetNode>(node) {
            Ok(node) => {
                if let Some(sigmet) = node.into_record(domestic_firs) {
                    sigmets.push(sigmet);
                }
            }
            Err(e) => debug!("skipping unreadable sigmet: {}", e),
        }
    }
    Ok(sigmets)
}

/// True when at least one record lies in a domestic FIR.
pub fn any_domestic(sigmets: &[SigmetRecord]) -> bool {
    sigmets.iter().any(|s| s.domestic)
}
