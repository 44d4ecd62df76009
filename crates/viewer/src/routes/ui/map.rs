use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{
    templates::{map_page, MapPageData},
    AppState,
};

/// Handler for the map page (GET /)
pub async fn map_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let viewer_state = state.controller.state().await;
    let data = MapPageData {
        state: &viewer_state,
        loading: state.controller.store().loading(),
    };
    Html(map_page(&state.remote_url, &data).into_string())
}
