#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use aina_api::{create_router, AppState};
use aina_core::cache::{Clock, ManualClock};
use aina_core::config::{
    ConfigSource, ConfigValue, LayeredConfig, DEFAULT_GNIS_FILE, DEFAULT_SOIL_FILE,
    DEFAULT_TSUNAMI_FILE,
};
use aina_core::soil::{layout_header, layout_line, SoilField};
use aina_store::MetricStore;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const GNIS: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"objectid":1,"feature_id":366201,"feature_name":"Waimanalo","feature_class":"Populated Place","county_name":"Honolulu"},
   "geometry":{"type":"Point","coordinates":[-157.7114,21.3361]}},
  {"type":"Feature","properties":{"objectid":2,"feature_name":"Waimanalo Stream","feature_class":"Stream"},
   "geometry":{"type":"LineString","coordinates":[[-157.72,21.34],[-157.71,21.335]]}},
  {"type":"Feature","properties":{"objectid":3,"feature_name":"Makapuu Point","feature_class":"Cape"},
   "geometry":{"type":"Point","coordinates":[-157.66,21.33]}},
  {"type":"Feature","properties":{"objectid":4,"feature_name":"Sherwood Beach","feature_class":"Beach"},
   "geometry":{"type":"Point","coordinates":[-157.70,21.36]}},
  {"type":"Feature","properties":{"objectid":5,"feature_name":"Kailua","feature_class":"Populated Place"},
   "geometry":{"type":"Point","coordinates":[-157.74,21.40]}},
  {"type":"Feature","properties":{"objectid":6,"feature_name":"Broken","feature_class":"Beach"},
   "geometry":{"type":"Point","coordinates":[-200.0,95.0]}},
  {"type":"Feature","properties":{"objectid":7,"feature_name":"No Geometry","feature_class":"Bay"},"geometry":null}
]}"#;

pub const TSUNAMI: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"objectid":11,"zone_code":1,"zone_type":"Tsunami Evacuation Zone","zone_desc":"Evacuate","areausac":120.5,"island":"OAHU"},
   "geometry":{"type":"Polygon","coordinates":[[[-157.70,21.34],[-157.69,21.34],[-157.69,21.35],[-157.70,21.34]]]}},
  {"type":"Feature","properties":{"objectid":12,"zone_code":"2","zone_type":"Extreme Tsunami Evacuation Zone","island":"OAHU"},
   "geometry":{"type":"Polygon","coordinates":[[[-157.68,21.32],[-157.67,21.32],[-157.67,21.33],[-157.68,21.32]]]}},
  {"type":"Feature","properties":{"objectid":13,"zone_code":3,"zone_type":"Safe Zone","island":"OAHU"},
   "geometry":{"type":"MultiPolygon","coordinates":[[[[-157.73,21.36],[-157.72,21.36],[-157.72,21.37],[-157.73,21.36]]]]}},
  {"type":"Feature","properties":{"objectid":14,"zone_code":1,"zone_type":"Tsunami Evacuation Zone","island":"OAHU"},
   "geometry":{"type":"Polygon","coordinates":[[[-158.30,21.50],[-158.29,21.50],[-158.29,21.51],[-158.30,21.50]]]}},
  {"type":"Feature","properties":{"objectid":15,"zone_code":1,"zone_type":"Tsunami Evacuation Zone","island":"OAHU"},
   "geometry":{"type":"Polygon","coordinates":[[[-157.19005,21.33861],[-157.18,21.33861],[-157.18,21.34],[-157.19005,21.33861]]]}},
  {"type":"Feature","properties":{"objectid":16,"zone_code":1},
   "geometry":{"type":"Polygon","coordinates":[[[-157.70,21.34],[-157.69,21.34],[-157.69,21.35],[-157.70,21.34]]]}}
]}"#;

/// Component file with the given rows under a conforming header
pub fn soil_file(rows: &[Vec<(SoilField, &str)>]) -> String {
    let mut content = layout_header();
    for row in rows {
        content.push('\n');
        content.push_str(&layout_line(row));
    }
    content.push('\n');
    content
}

pub fn pohakupu_row() -> Vec<(SoilField, &'static str)> {
    vec![
        (SoilField::Series, "Pohakupu"),
        (SoilField::SlopeLow, "3"),
        (SoilField::SlopeHigh, "8"),
        (SoilField::ErosionFactor, ".28"),
        (SoilField::OrganicMatter, "2.5"),
        (SoilField::Ph, "6.1"),
        (SoilField::DrainageClass, "Well drained"),
        (SoilField::HydrologicGroup, "B"),
        (SoilField::TaxOrder, "Inceptisols"),
        (SoilField::TaxSuborder, "Ustepts"),
        (SoilField::TaxGreatGroup, "Haplustepts"),
        (SoilField::TaxSubgroup, "Typic Haplustepts"),
        (SoilField::Texture, "Silty clay loam"),
    ]
}

pub fn write_data_dir(soil: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), DEFAULT_GNIS_FILE, GNIS);
    write(dir.path(), DEFAULT_TSUNAMI_FILE, TSUNAMI);
    write(dir.path(), DEFAULT_SOIL_FILE, soil);
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

pub fn config_for(dir: &Path) -> LayeredConfig {
    let mut config = LayeredConfig::with_defaults();
    config.data_dir = ConfigValue::new(dir.to_path_buf(), ConfigSource::File);
    config
}

pub fn app(dir: &Path, store: Arc<dyn MetricStore>) -> Router {
    app_with_clock(dir, store, Arc::new(ManualClock::new()))
}

pub fn app_with_clock(dir: &Path, store: Arc<dyn MetricStore>, clock: Arc<dyn Clock>) -> Router {
    let state = AppState::with_clock(config_for(dir), store, clock);
    create_router(Arc::new(state))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_as(app: &Router, uri: &str, email: &str) -> (StatusCode, Value) {
    let request =
        Request::builder().uri(uri).header("x-user-email", email).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
