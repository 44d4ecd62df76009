use crate::helpers::{body_json, serving, spawn_app, TestApp};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use tokio::time::sleep;

async fn command(test_app: &TestApp, body: Value) -> Value {
    let response = test_app.post_json("/commands", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn initial_state_matches_startup_map() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let state = body_json(test_app.get("/state").await).await;
    assert_eq!(state["base_map"], "dark");
    assert_eq!(state["layers"]["weather"], true);
    assert_eq!(state["layers"]["winds"], true);
    assert_eq!(state["layers"]["boundary"], true);
    assert_eq!(state["layers"]["metar"], false);
    assert_eq!(state["time_dimension_visible"], false);
    assert_eq!(state["slider"]["visible"], false);
    assert_eq!(state["slider"]["raster"], Value::Null);
    assert_eq!(state["loading"], 0);
}

#[tokio::test]
async fn selecting_an_element_shows_the_slider_at_twelve_hours() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let state = command(
        &test_app,
        json!({"type": "forecast_toggle", "element": "Clouds", "active": true}),
    )
    .await;
    assert_eq!(state["slider"]["visible"], true);
    assert_eq!(state["slider"]["index"], 2);
    assert_eq!(state["slider"]["hour"], 12);
    assert_eq!(state["slider"]["caption"], "Clouds Day 1 12:00 Z");
    assert_eq!(state["slider"]["raster"]["url"], "/images/clouds/12h_tcldt.png");
    assert_eq!(
        state["slider"]["raster"]["bounds"],
        json!([[-7.75, 30.0], [47.75, 130.0]])
    );

    let state = command(&test_app, json!({"type": "slider_step", "index": 5})).await;
    assert_eq!(state["slider"]["caption"], "Clouds Day 2 06:00 Z");

    let state = command(
        &test_app,
        json!({"type": "forecast_toggle", "element": "PM10", "active": true}),
    )
    .await;
    assert_eq!(state["slider"]["index"], 2);
    assert_eq!(state["slider"]["raster"]["url"], "/images/PM10/12h_pmct.png");

    let state = command(
        &test_app,
        json!({"type": "forecast_toggle", "element": "PM10", "active": false}),
    )
    .await;
    assert_eq!(state["slider"]["visible"], false);
    assert_eq!(state["slider"]["raster"], Value::Null);
}

#[tokio::test]
async fn back_and_forward_stay_in_bounds() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;
    command(
        &test_app,
        json!({"type": "forecast_toggle", "element": "Rain", "active": true}),
    )
    .await;

    command(&test_app, json!({"type": "slider_step", "index": 0})).await;
    let state = command(&test_app, json!({"type": "slider_back"})).await;
    assert_eq!(state["slider"]["index"], 0);

    let state = command(&test_app, json!({"type": "slider_step", "index": 99})).await;
    assert_eq!(state["slider"]["index"], 40);
    let state = command(&test_app, json!({"type": "slider_forward"})).await;
    assert_eq!(state["slider"]["index"], 40);
    assert_eq!(state["slider"]["hour"], 240);
}

#[tokio::test]
async fn playback_advances_and_stops_at_the_last_hour() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;
    command(
        &test_app,
        json!({"type": "forecast_toggle", "element": "WindShear", "active": true}),
    )
    .await;
    command(&test_app, json!({"type": "slider_step", "index": 35})).await;

    let state = command(&test_app, json!({"type": "play"})).await;
    assert_eq!(state["slider"]["playback"], "playing");

    // A second play while playing must not start another ticker.
    command(&test_app, json!({"type": "play"})).await;

    let mut state = Value::Null;
    for _ in 0..100 {
        sleep(Duration::from_millis(10)).await;
        state = body_json(test_app.get("/state").await).await;
        if state["slider"]["playback"] == "paused" {
            break;
        }
    }
    assert_eq!(state["slider"]["playback"], "paused");
    assert_eq!(state["slider"]["index"], 40);
    assert_eq!(state["slider"]["caption"], "Wind Shear Day 11 00:00 Z");
}

#[tokio::test]
async fn play_without_an_element_does_nothing() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let state = command(&test_app, json!({"type": "play_toggle"})).await;
    assert_eq!(state["slider"]["playback"], "paused");
}

#[tokio::test]
async fn radar_shows_the_time_dimension_control() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let state = command(
        &test_app,
        json!({"type": "layer_toggle", "layer": "radar", "active": true}),
    )
    .await;
    assert_eq!(state["time_dimension_visible"], true);

    let state = command(
        &test_app,
        json!({"type": "layer_toggle", "layer": "radar", "active": false}),
    )
    .await;
    assert_eq!(state["time_dimension_visible"], false);
}

#[tokio::test]
async fn base_map_switch_changes_tiles() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let state = command(
        &test_app,
        json!({"type": "select_base_map", "base_map": "light"}),
    )
    .await;
    assert_eq!(state["base_map"], "light");
    assert!(state["base_map_url"]
        .as_str()
        .unwrap()
        .contains("voyager_nolabels"));
}

#[tokio::test]
async fn malformed_command_is_rejected() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let response = test_app
        .post_json("/commands", json!({"type": "rewind"}))
        .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn reload_includes_sigmets_only_while_active() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let body = body_json(test_app.post_json("/reload", json!({})).await).await;
    assert_eq!(body["reloaded"], json!(["metars", "tafs"]));
    assert_eq!(body["state"]["loading"], 0);

    command(
        &test_app,
        json!({"type": "layer_toggle", "layer": "sigmet", "active": true}),
    )
    .await;
    let body = body_json(test_app.post_json("/reload", json!({})).await).await;
    assert_eq!(body["reloaded"], json!(["metars", "tafs", "sigmets"]));
}
