use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::{
    templates::fragments::{forecast_table, metar_legend, sigmet_legend},
    AppState,
};

/// Handler for the flight-category legend (GET /fragments/legend/metar)
pub async fn metar_legend_handler() -> Html<String> {
    Html(metar_legend().into_string())
}

/// Handler for the SIGMET hazard legend (GET /fragments/legend/sigmet)
pub async fn sigmet_legend_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.controller.store().snapshot().await;
    let sigmets = snapshot
        .sigmets
        .is_loaded()
        .then(|| snapshot.sigmets.records.as_slice());
    Html(sigmet_legend(sigmets).into_string())
}

/// Handler for one station's compact forecast table (GET /fragments/taf/{station_id})
pub async fn taf_table_handler(
    State(state): State<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let snapshot = state.controller.store().snapshot().await;
    let taf = snapshot
        .tafs
        .records
        .iter()
        .find(|taf| taf.station_id.eq_ignore_ascii_case(&station_id))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("No TAF found for station: {}", station_id),
            )
        })?;
    Ok(Html(forecast_table(taf).into_string()))
}
