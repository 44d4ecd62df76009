use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::ApiError;
use crate::{
    annotations::{
        airport_annotations, metar_markers, sigmet_annotations, taf_markers, weather_markers,
        Annotation,
    },
    controls::LayerId,
    store::{Feed, Snapshot},
    AppState,
};

/// Outline color of the administrative boundary.
pub const BOUNDARY_COLOR: &str = "#636161ff";

#[derive(Debug, Serialize)]
pub struct LayerResponse {
    pub layer: LayerId,
    /// Sequence of the load the annotations were built from; 0 when the
    /// backing feed has not loaded yet or the layer has no feed.
    pub sequence: u64,
    pub active: bool,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStyle {
    pub color: &'static str,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl Default for BoundaryStyle {
    fn default() -> Self {
        Self {
            color: BOUNDARY_COLOR,
            weight: 1.0,
            fill_opacity: 0.0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoundaryResponse {
    pub style: BoundaryStyle,
    pub geojson: Option<Value>,
}

/// The feed a layer's annotations are built from.
fn backing_feed(layer: LayerId) -> Option<Feed> {
    match layer {
        LayerId::Airports => Some(Feed::Airports),
        LayerId::Weather | LayerId::Metar => Some(Feed::Metars),
        LayerId::Taf => Some(Feed::Tafs),
        LayerId::Sigmet => Some(Feed::Sigmets),
        LayerId::Boundary => Some(Feed::Boundary),
        LayerId::Winds => Some(Feed::Winds),
        LayerId::Satellite | LayerId::Radar => None,
    }
}

/// Builds the annotations for one layer from the committed records.
/// Boundary and winds are drawn from their own documents, and satellite
/// and radar are tile layers, so those have none.
pub fn annotations_for(layer: LayerId, snapshot: &Snapshot, active: bool) -> Vec<Annotation> {
    match layer {
        LayerId::Airports => airport_annotations(&snapshot.airports.records),
        LayerId::Weather => weather_markers(&snapshot.metars.records),
        LayerId::Metar => metar_markers(&snapshot.metars.records),
        LayerId::Taf => taf_markers(&snapshot.tafs.records),
        LayerId::Sigmet => sigmet_annotations(&snapshot.sigmets.records, active),
        LayerId::Boundary | LayerId::Winds | LayerId::Satellite | LayerId::Radar => vec![],
    }
}

/// Handler for a layer's annotations (GET /layers/{layer})
pub async fn layer_handler(
    State(state): State<Arc<AppState>>,
    Path(layer): Path<String>,
) -> Result<Json<LayerResponse>, ApiError> {
    let layer: LayerId = layer.parse()?;
    let active = state.controller.is_active(layer).await;
    let snapshot = state.controller.store().snapshot().await;

    Ok(Json(LayerResponse {
        layer,
        sequence: backing_feed(layer)
            .map(|feed| snapshot.sequence(feed))
            .unwrap_or_default(),
        active,
        annotations: annotations_for(layer, &snapshot, active),
    }))
}

/// Handler for the boundary outline (GET /boundary)
pub async fn boundary_handler(State(state): State<Arc<AppState>>) -> Json<BoundaryResponse> {
    let snapshot = state.controller.store().snapshot().await;
    Json(BoundaryResponse {
        style: BoundaryStyle::default(),
        geojson: snapshot.boundary.records.as_ref().clone(),
    })
}

/// Handler for the wind-field document (GET /winds)
pub async fn winds_handler(State(state): State<Arc<AppState>>) -> Json<Option<Value>> {
    let snapshot = state.controller.store().snapshot().await;
    Json(snapshot.winds.records.as_ref().clone())
}
