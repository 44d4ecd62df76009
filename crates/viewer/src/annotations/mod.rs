//! Map annotations: the markers, labels and polygons the map page draws.
//!
//! Every variant serializes to the option names the map library expects,
//! so the browser can pass them straight through.

mod airports;
mod metars;
mod sigmets;
mod tafs;

pub use airports::airport_annotations;
pub use metars::{metar_markers, weather_markers};
pub use sigmets::{sigmet_annotations, NO_SIGMET_POSITION};
pub use tafs::taf_markers;

use serde::Serialize;
use wxmap_feeds::LatLng;

/// `[lat, lon]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

impl From<LatLng> for Position {
    fn from(value: LatLng) -> Self {
        Position(value.lat, value.lon)
    }
}

/// Stroke and fill options shared by circle markers and polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl Popup {
    pub fn new(html: String) -> Self {
        Self {
            html,
            max_width: None,
        }
    }
}

/// Image icon for an icon marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageIcon {
    pub icon_url: String,
    pub icon_size: [u32; 2],
}

/// HTML icon for a label marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIcon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_anchor: Option<[u32; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    CircleMarker {
        position: Position,
        style: PathStyle,
        popup: Option<Popup>,
    },
    IconMarker {
        position: Position,
        icon: ImageIcon,
        popup: Option<Popup>,
    },
    DivMarker {
        position: Position,
        icon: DivIcon,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        interactive: bool,
    },
    Polygon {
        vertices: Vec<Position>,
        style: PathStyle,
        popup: Option<Popup>,
    },
}

impl Annotation {
    pub fn popup(&self) -> Option<&Popup> {
        match self {
            Annotation::CircleMarker { popup, .. }
            | Annotation::IconMarker { popup, .. }
            | Annotation::Polygon { popup, .. } => popup.as_ref(),
            Annotation::DivMarker { .. } => None,
        }
    }

    /// Anchor point of a marker; `None` for polygons.
    pub fn position(&self) -> Option<Position> {
        match self {
            Annotation::CircleMarker { position, .. }
            | Annotation::IconMarker { position, .. }
            | Annotation::DivMarker { position, .. } => Some(*position),
            Annotation::Polygon { .. } => None,
        }
    }
}
