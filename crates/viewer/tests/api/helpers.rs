use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use hyper::{header, Method};
use mockall::mock;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;
use wxmap_feeds::{FeedError, FeedSource};
use wxmap_viewer::{app, app_state_with_source, MapController, ViewerSettings};

mock! {
    pub FeedSource {}
    #[async_trait]
    impl FeedSource for FeedSource {
        async fn fetch_text(&self, path: &str) -> Result<String, FeedError>;
    }
}

pub struct TestApp {
    pub app: Router,
    pub controller: Arc<MapController>,
}

pub const TICK_PERIOD: Duration = Duration::from_millis(10);

pub async fn spawn_app(feed_source: Arc<dyn FeedSource>) -> TestApp {
    let settings = ViewerSettings {
        remote_url: "http://127.0.0.1:9810".to_string(),
        feed_base: "unused".to_string(),
        ui_dir: "./ui".to_string(),
        image_dir: "./images".to_string(),
        user_agent: "wxmap-test".to_string(),
        request_timeout: Duration::from_secs(5),
        domestic_firs: vec!["VIDF".to_string(), "VABF".to_string()],
    };
    let app_state = app_state_with_source(feed_source, settings, TICK_PERIOD);
    let controller = app_state.controller.clone();

    TestApp {
        app: app(app_state),
        controller,
    }
}

/// A feed source that serves the given documents and 404s everything else.
pub fn serving(files: Vec<(&'static str, String)>) -> MockFeedSource {
    let mut feed_source = MockFeedSource::new();
    feed_source.expect_fetch_text().returning(move |path| {
        files
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| FeedError::Status {
                path: path.to_string(),
                status: 404,
            })
    });
    feed_source
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn body_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub const METAR_HEADER: &str = "raw_text,station_id,observation_time,latitude,longitude,temp_c,dewpoint_c,wind_dir_degrees,wind_speed_kt,visibility_statute_mi,wx_string,flight_category,sky_cover_1,cloud_base_ft_agl_1,sky_cover_2,cloud_base_ft_agl_2,sky_cover_3,cloud_base_ft_agl_3,sky_cover_4,cloud_base_ft_agl_4";

pub fn metar_csv(rows: &[&str]) -> String {
    let mut csv = METAR_HEADER.to_string();
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

pub const COMPLETE_METAR: &str = "VIDP 010930Z 27005KT 3000 HZ SCT020,VIDP,2024-05-01T09:30:00Z,28.56,77.10,34,12,270,5,1.86,HZ,MVFR,SCT,2000,,,,,,";
pub const METAR_WITHOUT_RAW_TEXT: &str = ",VABB,2024-05-01T09:30:00Z,19.09,72.87,31,24,250,8,3.1,,VFR,FEW,1800,,,,,,";

pub const TAF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response version="1.2">
  <data num_results="1">
    <TAF>
      <raw_text>TAF VIDP 010500Z 0106/0212 27008KT 3000 HZ</raw_text>
      <station_id>VIDP</station_id>
      <issue_time>2024-05-01T05:00:00Z</issue_time>
      <valid_time_from>2024-05-01T06:00:00Z</valid_time_from>
      <valid_time_to>2024-05-02T12:00:00Z</valid_time_to>
      <latitude>28.57</latitude>
      <longitude>77.1</longitude>
      <forecast>
        <fcst_time_from>2024-05-01T06:00:00Z</fcst_time_from>
        <fcst_time_to>2024-05-02T12:00:00Z</fcst_time_to>
        <wind_dir_degrees>270</wind_dir_degrees>
        <wind_speed_kt>8</wind_speed_kt>
        <visibility_statute_mi>1.86</visibility_statute_mi>
        <wx_string>HZ</wx_string>
      </forecast>
    </TAF>
  </data>
</response>"#;

pub const STATIONS_XML: &str = r#"<response>
  <data num_results="1">
    <Station><station_id>VIDP</station_id><site>Delhi/Indira Gandhi Intl</site></Station>
  </data>
</response>"#;

pub const DOMESTIC_SIGMET: &str = r#"[{
    "geom": "AREA", "firId": "VIDF", "firName": "DELHI", "hazard": "TS", "qualifier": "EMBD",
    "coords": [{"lat": 0, "lon": 0}, {"lat": 0, "lon": 2}, {"lat": 2, "lon": 2}, {"lat": 2, "lon": 0}]
}]"#;

pub const FOREIGN_SIGMET: &str = r#"[{
    "geom": "AREA", "firId": "OPKR", "hazard": "VA",
    "coords": [{"lat": 25, "lon": 66}, {"lat": 26, "lon": 67}, {"lat": 24, "lon": 68}]
}]"#;
