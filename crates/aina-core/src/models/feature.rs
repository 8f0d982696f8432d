use serde::{Deserialize, Serialize};

use super::geometry::{Geometry, LatLon};
use crate::formats::SourceFeature;

/// A named place from the geographic names inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicFeature {
    pub objectid: i64,
    pub feature_id: i64,
    pub map_name: String,
    pub feature_name: String,
    pub feature_class: String,
    pub state_numeric: i64,
    pub county_name: String,
    pub county_numeric: i64,
    pub prim_lat_dec: f64,
    pub prim_long_dec: f64,
    pub source_lat_dec: f64,
    pub source_long_dec: f64,
    pub lat: f64,
    pub lon: f64,
}

impl GeographicFeature {
    /// Interpret a source feature.
    ///
    /// Features without properties or geometry are skipped, as are features
    /// whose resolved coordinate falls outside WGS 84 bounds. Geometries other
    /// than points, lines and polygons resolve to `(0, 0)`.
    pub fn from_source(source: &SourceFeature) -> Option<Self> {
        let props = source.properties.as_ref()?;
        let geometry = source.geometry.as_ref()?;

        let resolved = match geometry {
            Geometry::Point { .. } | Geometry::LineString { .. } | Geometry::Polygon { .. } => {
                geometry.anchor().unwrap_or(LatLon::new(0.0, 0.0))
            }
            _ => LatLon::new(0.0, 0.0),
        };

        if !resolved.is_valid() {
            return None;
        }

        Some(Self {
            objectid: props.i64_or("objectid", 0),
            feature_id: props.i64_or("feature_id", 0),
            map_name: props.string_or_default("map_name"),
            feature_name: props.string_or_default("feature_name"),
            feature_class: props.string_or_default("feature_class"),
            state_numeric: props.i64_or("state_numeric", 0),
            county_name: props.string_or_default("county_name"),
            county_numeric: props.i64_or("county_numeric", 0),
            prim_lat_dec: props.f64_or("prim_lat_dec", resolved.lat),
            prim_long_dec: props.f64_or("prim_long_dec", resolved.lon),
            source_lat_dec: props.f64_or("source_lat_dec", resolved.lat),
            source_long_dec: props.f64_or("source_long_dec", resolved.lon),
            lat: resolved.lat,
            lon: resolved.lon,
        })
    }

    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::parse_feature_collection;

    fn parse(json: &str) -> Vec<SourceFeature> {
        parse_feature_collection("gnis.geojson", json).unwrap()
    }

    #[test]
    fn test_defaults_for_missing_properties() {
        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"feature_name":"Waimanalo Bay","feature_class":"Bay"},
                 "geometry":{"type":"Point","coordinates":[-157.70,21.34]}}
            ]}"#,
        );

        let feature = GeographicFeature::from_source(&features[0]).unwrap();
        assert_eq!(feature.objectid, 0);
        assert_eq!(feature.map_name, "");
        assert_eq!(feature.feature_class, "Bay");
        assert_eq!(feature.lat, 21.34);
        assert_eq!(feature.lon, -157.70);
        assert_eq!(feature.prim_lat_dec, 21.34);
        assert_eq!(feature.source_long_dec, -157.70);
    }

    #[test]
    fn test_line_string_resolves_to_first_vertex() {
        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"feature_class":"Stream","prim_lat_dec":21.35},
                 "geometry":{"type":"LineString","coordinates":[[-157.71,21.33],[-157.72,21.34]]}}
            ]}"#,
        );

        let feature = GeographicFeature::from_source(&features[0]).unwrap();
        assert_eq!(feature.position(), LatLon::new(21.33, -157.71));
        assert_eq!(feature.prim_lat_dec, 21.35);
    }

    #[test]
    fn test_features_without_geometry_or_properties_are_skipped() {
        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"feature_class":"Bay"},"geometry":null},
                {"type":"Feature","properties":null,"geometry":{"type":"Point","coordinates":[0,0]}}
            ]}"#,
        );

        assert!(features.iter().all(|f| GeographicFeature::from_source(f).is_none()));
    }

    #[test]
    fn test_out_of_range_coordinates_are_skipped() {
        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"feature_class":"Bay"},
                 "geometry":{"type":"Point","coordinates":[-200.0,21.3]}}
            ]}"#,
        );

        assert!(GeographicFeature::from_source(&features[0]).is_none());
    }
}
