use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Overlay layers the user can switch on and off.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerId {
    Airports,
    Winds,
    Weather,
    Metar,
    Taf,
    Sigmet,
    Satellite,
    Radar,
    Boundary,
}

impl LayerId {
    pub const ALL: [LayerId; 9] = [
        LayerId::Airports,
        LayerId::Winds,
        LayerId::Weather,
        LayerId::Metar,
        LayerId::Taf,
        LayerId::Sigmet,
        LayerId::Satellite,
        LayerId::Radar,
        LayerId::Boundary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LayerId::Airports => "airports",
            LayerId::Winds => "winds",
            LayerId::Weather => "weather",
            LayerId::Metar => "metar",
            LayerId::Taf => "taf",
            LayerId::Sigmet => "sigmet",
            LayerId::Satellite => "satellite",
            LayerId::Radar => "radar",
            LayerId::Boundary => "boundary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayerId::Airports => "Airports",
            LayerId::Winds => "Winds",
            LayerId::Weather => "Weather",
            LayerId::Metar => "METAR",
            LayerId::Taf => "TAF",
            LayerId::Sigmet => "SIGMET",
            LayerId::Satellite => "Satellite",
            LayerId::Radar => "Radar",
            LayerId::Boundary => "Boundary",
        }
    }

    /// Satellite and radar are animated by the page's time control.
    pub fn is_time_dimension(&self) -> bool {
        matches!(self, LayerId::Satellite | LayerId::Radar)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown layer: {0}")]
pub struct UnknownLayer(pub String);

impl FromStr for LayerId {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayerId::ALL
            .into_iter()
            .find(|layer| layer.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

/// Tile styles; exactly one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseMap {
    #[default]
    Dark,
    Light,
}

impl BaseMap {
    pub const ALL: [BaseMap; 2] = [BaseMap::Dark, BaseMap::Light];

    pub fn label(&self) -> &'static str {
        match self {
            BaseMap::Dark => "Dark",
            BaseMap::Light => "Light",
        }
    }

    pub fn tile_url(&self) -> &'static str {
        match self {
            BaseMap::Dark => "https://{s}.basemaps.cartocdn.com/dark_nolabels/{z}/{x}/{y}{r}.png",
            BaseMap::Light => {
                "https://{s}.basemaps.cartocdn.com/rastertiles/voyager_nolabels/{z}/{x}/{y}{r}.png"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    pub base_map: BaseMap,
    active: BTreeSet<LayerId>,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            base_map: BaseMap::Dark,
            active: BTreeSet::from([LayerId::Weather, LayerId::Winds, LayerId::Boundary]),
        }
    }
}

impl LayerState {
    pub fn is_active(&self, layer: LayerId) -> bool {
        self.active.contains(&layer)
    }

    /// Returns true when the layer actually changed state.
    pub fn set(&mut self, layer: LayerId, active: bool) -> bool {
        if active {
            self.active.insert(layer)
        } else {
            self.active.remove(&layer)
        }
    }

    pub fn active(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.active.iter().copied()
    }

    pub fn time_dimension_visible(&self) -> bool {
        self.active.iter().any(LayerId::is_time_dimension)
    }
}
