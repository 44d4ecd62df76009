use crate::helpers::{
    body_text, serving, spawn_app, DOMESTIC_SIGMET, FOREIGN_SIGMET, STATIONS_XML, TAF_XML,
};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// The map page lists every layer and forecast element
#[tokio::test]
async fn map_page_renders_controls() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let response = test_app.get("/").await;
    assert!(response.status().is_success());

    let html = body_text(response).await;
    assert!(html.contains("<title>Aviation Weather Map</title>"));
    assert!(html.contains("const API_BASE = \"http://127.0.0.1:9810\";"));
    assert!(html.contains("data-layer=\"sigmet\""));
    assert!(html.contains("data-element=\"CAT_FL180\""));
    assert!(html.contains("id=\"timeSliderControl\""));
}

/// The flight-category legend lists the four categories in order
#[tokio::test]
async fn metar_legend_lists_categories() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let html = body_text(test_app.get("/fragments/legend/metar").await).await;
    let positions: Vec<usize> = ["VFR", "MVFR", "IFR", "LIFR"]
        .iter()
        .map(|label| html.find(&format!(" {}<", label)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

/// Before any SIGMET load the legend says it is unavailable
#[tokio::test]
async fn sigmet_legend_unavailable_until_loaded() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let html = body_text(test_app.get("/fragments/legend/sigmet").await).await;
    assert!(html.contains("Legend unavailable"));
}

/// After a load the legend lists each hazard once
#[tokio::test]
async fn sigmet_legend_lists_loaded_hazards() {
    let sigmets = format!(
        "[{}, {}]",
        DOMESTIC_SIGMET.trim().trim_start_matches('[').trim_end_matches(']'),
        FOREIGN_SIGMET.trim().trim_start_matches('[').trim_end_matches(']'),
    );
    let test_app = spawn_app(Arc::new(serving(vec![("currentwx/isigmet.json", sigmets)]))).await;

    test_app
        .post_json(
            "/commands",
            json!({"type": "layer_toggle", "layer": "sigmet", "active": true}),
        )
        .await;
    test_app.post_json("/reload", json!({})).await;

    let html = body_text(test_app.get("/fragments/legend/sigmet").await).await;
    assert!(html.contains("Hazards"));
    assert!(html.contains("(TS)"));
    assert!(html.contains("(VA)"));
    assert_eq!(html.matches("(TS)").count(), 1);
}

/// The compact TAF table is served per station
#[tokio::test]
async fn taf_table_for_known_station() {
    let feeds = serving(vec![
        ("currentwx/taf.xml", TAF_XML.to_string()),
        ("map/stations.xml", STATIONS_XML.to_string()),
    ]);
    let test_app = spawn_app(Arc::new(feeds)).await;
    test_app.post_json("/reload", json!({})).await;

    let response = test_app.get("/fragments/taf/vidp").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<table"));
    assert!(html.contains("HZ"));

    let response = test_app.get("/fragments/taf/VOMM").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
