use crate::helpers::{
    body_json, metar_csv, serving, spawn_app, TestApp, COMPLETE_METAR, DOMESTIC_SIGMET,
    FOREIGN_SIGMET, METAR_WITHOUT_RAW_TEXT, STATIONS_XML, TAF_XML,
};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use tokio::time::sleep;

async fn layer(test_app: &TestApp, name: &str) -> Value {
    let response = test_app.get(&format!("/layers/{}", name)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn turn_on(test_app: &TestApp, name: &str) {
    let response = test_app
        .post_json(
            "/commands",
            json!({"type": "layer_toggle", "layer": name, "active": true}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Polls a layer until its backing feed has committed a load.
async fn wait_for_load(test_app: &TestApp, name: &str) -> Value {
    for _ in 0..100 {
        let body = layer(test_app, name).await;
        if body["sequence"].as_u64().unwrap_or_default() > 0 {
            return body;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("layer {} never loaded", name);
}

#[tokio::test]
async fn metar_row_without_raw_text_gets_no_markers() {
    let feeds = serving(vec![(
        "currentwx/metar.csv",
        metar_csv(&[METAR_WITHOUT_RAW_TEXT]),
    )]);
    let test_app = spawn_app(Arc::new(feeds)).await;

    let response = test_app.post_json("/reload", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let weather = layer(&test_app, "weather").await;
    let metar = layer(&test_app, "metar").await;
    assert_eq!(weather["sequence"], 1);
    assert_eq!(weather["annotations"], json!([]));
    assert_eq!(metar["annotations"], json!([]));
}

#[tokio::test]
async fn complete_metar_row_gets_one_marker_per_layer() {
    let feeds = serving(vec![(
        "currentwx/metar.csv",
        metar_csv(&[COMPLETE_METAR, METAR_WITHOUT_RAW_TEXT]),
    )]);
    let test_app = spawn_app(Arc::new(feeds)).await;
    test_app.post_json("/reload", json!({})).await;

    let weather = layer(&test_app, "weather").await;
    assert_eq!(weather["active"], true);
    let icons = weather["annotations"].as_array().unwrap();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0]["kind"], "icon_marker");
    assert_eq!(icons[0]["position"], json!([28.56, 77.1]));
    assert_eq!(icons[0]["icon"]["iconSize"], json!([18, 18]));

    let metar = layer(&test_app, "metar").await;
    assert_eq!(metar["active"], false);
    let dots = metar["annotations"].as_array().unwrap();
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0]["kind"], "circle_marker");
    assert_eq!(dots[0]["style"]["fillColor"], "#0000ff");
}

#[tokio::test]
async fn failed_reload_keeps_previous_metars() {
    let mut feeds = crate::helpers::MockFeedSource::new();
    let mut calls = 0;
    feeds.expect_fetch_text().returning(move |path| {
        if path != "currentwx/metar.csv" {
            return Err(wxmap_feeds::FeedError::Status {
                path: path.to_string(),
                status: 404,
            });
        }
        calls += 1;
        if calls == 1 {
            Ok(metar_csv(&[COMPLETE_METAR]))
        } else {
            Err(wxmap_feeds::FeedError::Status {
                path: path.to_string(),
                status: 503,
            })
        }
    });
    let test_app = spawn_app(Arc::new(feeds)).await;

    test_app.post_json("/reload", json!({})).await;
    test_app.post_json("/reload", json!({})).await;

    let metar = layer(&test_app, "metar").await;
    assert_eq!(metar["sequence"], 1);
    assert_eq!(metar["annotations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn taf_layer_uses_station_names() {
    let feeds = serving(vec![
        ("currentwx/taf.xml", TAF_XML.to_string()),
        ("map/stations.xml", STATIONS_XML.to_string()),
    ]);
    let test_app = spawn_app(Arc::new(feeds)).await;
    test_app.post_json("/reload", json!({})).await;

    let taf = layer(&test_app, "taf").await;
    let markers = taf["annotations"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["style"]["fillColor"], "#800080");
    assert_eq!(markers[0]["popup"]["maxWidth"], 700);
    let html = markers[0]["popup"]["html"].as_str().unwrap();
    assert!(html.contains("Delhi/Indira Gandhi Intl"));
}

#[tokio::test]
async fn airports_load_when_their_layer_is_turned_on() {
    let feeds = serving(vec![(
        "map/airport.csv",
        "latitude,longitude,stnid,stn,icao\n28.56,77.1,VIDP,Delhi,VIDP\nbad,77.1,VIXX,Nowhere,\n"
            .to_string(),
    )]);
    let test_app = spawn_app(Arc::new(feeds)).await;

    let before = layer(&test_app, "airports").await;
    assert_eq!(before["sequence"], 0);
    assert_eq!(before["active"], false);

    turn_on(&test_app, "airports").await;
    let airports = wait_for_load(&test_app, "airports").await;
    assert_eq!(airports["active"], true);
    assert_eq!(airports["annotations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn sigmet_placeholder_only_without_domestic_records() {
    let feeds = serving(vec![("currentwx/isigmet.json", FOREIGN_SIGMET.to_string())]);
    let test_app = spawn_app(Arc::new(feeds)).await;

    // Not active yet: no placeholder even though nothing is domestic.
    let inactive = layer(&test_app, "sigmet").await;
    assert_eq!(inactive["annotations"], json!([]));

    turn_on(&test_app, "sigmet").await;
    let sigmet = wait_for_load(&test_app, "sigmet").await;
    let annotations = sigmet["annotations"].as_array().unwrap();
    // polygon + label for the foreign SIGMET, then the notice
    assert_eq!(annotations.len(), 3);
    let notice = &annotations[2];
    assert_eq!(notice["kind"], "div_marker");
    assert_eq!(notice["position"], json!([22.5, 82.0]));
    assert!(notice["icon"]["html"]
        .as_str()
        .unwrap()
        .contains("No SIGMET found over India"));
}

#[tokio::test]
async fn domestic_sigmet_suppresses_placeholder() {
    let feeds = serving(vec![("currentwx/isigmet.json", DOMESTIC_SIGMET.to_string())]);
    let test_app = spawn_app(Arc::new(feeds)).await;

    turn_on(&test_app, "sigmet").await;
    let sigmet = wait_for_load(&test_app, "sigmet").await;
    let annotations = sigmet["annotations"].as_array().unwrap();
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0]["kind"], "polygon");
    assert_eq!(annotations[0]["style"]["color"], "red");
    assert_eq!(annotations[1]["position"], json!([1.0, 1.0]));
    assert_eq!(annotations[1]["title"], "TS (EMBD)");
}

#[tokio::test]
async fn unknown_layer_is_a_bad_request() {
    let test_app = spawn_app(Arc::new(serving(vec![]))).await;

    let response = test_app.get("/layers/volcanoes").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "unknown layer: volcanoes");
}

#[tokio::test]
async fn boundary_is_served_with_its_style() {
    let feeds = serving(vec![(
        "map/INDIA_STATES.geojson",
        r#"{"type": "FeatureCollection", "features": []}"#.to_string(),
    )]);
    let test_app = spawn_app(Arc::new(feeds)).await;

    let empty = body_json(test_app.get("/boundary").await).await;
    assert_eq!(empty["geojson"], Value::Null);
    assert_eq!(empty["style"]["color"], "#636161ff");

    test_app.controller.start();
    for _ in 0..100 {
        let body = body_json(test_app.get("/boundary").await).await;
        if !body["geojson"].is_null() {
            assert_eq!(body["geojson"]["type"], "FeatureCollection");
            assert_eq!(body["style"]["fillOpacity"], 0.0);
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("boundary never loaded");
}

#[tokio::test]
async fn winds_are_passed_through_after_startup() {
    let feeds = serving(vec![(
        "currentwx/850wind.json",
        r#"[{"header": {"parameterNumber": 2}, "data": [1.5, -0.5]}]"#.to_string(),
    )]);
    let test_app = spawn_app(Arc::new(feeds)).await;

    let empty = body_json(test_app.get("/winds").await).await;
    assert_eq!(empty, Value::Null);

    test_app.controller.start();
    for _ in 0..100 {
        let body = body_json(test_app.get("/winds").await).await;
        if !body.is_null() {
            assert_eq!(body[0]["header"]["parameterNumber"], 2);
            assert_eq!(body[0]["data"], json!([1.5, -0.5]));
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("winds never loaded");
}
