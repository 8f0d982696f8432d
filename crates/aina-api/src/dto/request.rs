use std::collections::HashMap;

use aina_core::models::LatLon;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::error::ApiError;

/// `?lat=..&lon=..` query string.
///
/// Kept as raw strings so a missing value and an unparsable one can be
/// reported differently. Extracted directly so that malformed query strings
/// are answered with the JSON error body like every other bad input.
#[derive(Debug, Default)]
pub struct CoordinateQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for CoordinateQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Repeated keys resolve to the last value
        let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|rejection| {
                ApiError::bad_request("Invalid lat/lon parameters")
                    .with_details(rejection.body_text())
            })?;

        Ok(Self {
            lat: params.remove("lat"),
            lon: params.remove("lon"),
        })
    }
}

impl CoordinateQuery {
    pub fn coordinates(&self) -> Result<LatLon, ApiError> {
        let (lat, lon) = match (present(&self.lat), present(&self.lon)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(ApiError::bad_request("Missing lat/lon parameters")),
        };

        match (parse_degrees(lat), parse_degrees(lon)) {
            (Some(lat), Some(lon)) => Ok(LatLon::new(lat, lon)),
            _ => Err(ApiError::bad_request("Invalid lat/lon parameters")
                .with_details(format!("lat={}, lon={}", lat, lon))),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_degrees(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
