use axum::{extract::State, Json};
use log::info;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    controls::{Command, StateView},
    store::Feed,
    AppState,
};

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub reloaded: Vec<Feed>,
    pub state: StateView,
}

/// Handler for the current viewer state (GET /state)
pub async fn state_handler(State(state): State<Arc<AppState>>) -> Json<StateView> {
    Json(state.controller.view().await)
}

/// Handler for page commands (POST /commands)
pub async fn commands_handler(
    State(state): State<Arc<AppState>>,
    Json(command): Json<Command>,
) -> Json<StateView> {
    Json(state.controller.dispatch(command).await)
}

/// Handler for a manual refresh (POST /reload). Waits for the loads so the
/// page can redraw straight after.
pub async fn reload_handler(State(state): State<Arc<AppState>>) -> Json<ReloadResponse> {
    let reloaded = state.controller.reload().await;
    info!("manual reload of {:?} finished", reloaded);
    Json(ReloadResponse {
        reloaded,
        state: state.controller.view().await,
    })
}
