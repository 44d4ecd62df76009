use crate::{
    boundary_handler, commands_handler, controller::MapController, layer_handler, loader::FeedLoader,
    map_handler, metar_legend_handler, reload_handler, sigmet_legend_handler, state_handler,
    store::LayerStore, taf_table_handler, winds_handler,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use wxmap_core::SLIDER_TICK_MILLIS;
use wxmap_feeds::{feed_source_for, FeedSource};

#[derive(Clone)]
pub struct AppState {
    pub ui_dir: String,
    pub image_dir: String,
    pub remote_url: String,
    pub controller: Arc<MapController>,
}

pub struct ViewerSettings {
    pub remote_url: String,
    pub feed_base: String,
    pub ui_dir: String,
    pub image_dir: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub domestic_firs: Vec<String>,
}

pub fn build_app_state(settings: ViewerSettings) -> Result<AppState, anyhow::Error> {
    let source = feed_source_for(
        &settings.feed_base,
        &settings.user_agent,
        settings.request_timeout,
    )
    .map_err(|e| anyhow!("error setting up feed source: {}", e))?;

    Ok(app_state_with_source(
        source,
        settings,
        Duration::from_millis(SLIDER_TICK_MILLIS),
    ))
}

/// Wires the viewer around an already built feed source.
pub fn app_state_with_source(
    source: Arc<dyn FeedSource>,
    settings: ViewerSettings,
    tick_period: Duration,
) -> AppState {
    let store = Arc::new(LayerStore::new());
    let loader = FeedLoader::new(source, store, settings.domestic_firs);
    let controller = Arc::new(MapController::new(loader, tick_period));

    AppState {
        ui_dir: settings.ui_dir,
        image_dir: settings.image_dir,
        remote_url: settings.remote_url,
        controller,
    }
}

pub fn app(app_state: AppState) -> Router {
    let serve_ui = ServeDir::new(&app_state.ui_dir);
    let serve_images = ServeDir::new(&app_state.image_dir);
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(map_handler))
        // Fragment routes
        .route("/fragments/legend/metar", get(metar_legend_handler))
        .route("/fragments/legend/sigmet", get(sigmet_legend_handler))
        .route("/fragments/taf/{station_id}", get(taf_table_handler))
        // API routes
        .route("/layers/{layer}", get(layer_handler))
        .route("/boundary", get(boundary_handler))
        .route("/winds", get(winds_handler))
        .route("/state", get(state_handler))
        .route("/commands", post(commands_handler))
        .route("/reload", post(reload_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .nest_service("/static", serve_ui)
        .nest_service("/images", serve_images)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
