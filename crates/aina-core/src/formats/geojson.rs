//! GeoJSON feature collection reader

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AinaError, Result};
use crate::models::Geometry;

/// A feature as found in a source file, before any domain interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFeature {
    pub id: Option<String>,
    pub geometry: Option<Geometry>,
    pub properties: Option<Properties>,
}

/// Read a GeoJSON file into source features
pub async fn read_feature_collection(path: &Path) -> Result<Vec<SourceFeature>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AinaError::DataFileNotFound { path: path.to_path_buf() }
        } else {
            AinaError::Io(e)
        }
    })?;

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let features = parse_feature_collection(name, &content)?;
    tracing::debug!(file = %path.display(), features = features.len(), "Parsed GeoJSON file");
    Ok(features)
}

/// Parse GeoJSON text into source features.
///
/// A bare `Feature` is treated as a collection of one. A bare geometry is
/// rejected since it carries no properties to interpret. Entries of a
/// collection that are not valid features are skipped; the rest are kept
/// with their original index as fallback id.
pub fn parse_feature_collection(source_name: &str, content: &str) -> Result<Vec<SourceFeature>> {
    let document: Value = serde_json::from_str(content).map_err(|e| AinaError::GeoJson {
        source_name: source_name.to_string(),
        reason: format!("Failed to parse GeoJSON: {}", e),
    })?;

    let kind = document.get("type").and_then(Value::as_str).unwrap_or_default().to_string();
    match kind.as_str() {
        "FeatureCollection" => {
            let entries = match document {
                Value::Object(mut map) => map.remove("features"),
                _ => None,
            };
            let Some(Value::Array(entries)) = entries else {
                return Err(AinaError::GeoJson {
                    source_name: source_name.to_string(),
                    reason: "FeatureCollection has no features array".to_string(),
                });
            };

            let total = entries.len();
            let features: Vec<SourceFeature> = entries
                .into_iter()
                .enumerate()
                .filter_map(|(idx, entry)| match geojson::Feature::try_from(entry) {
                    Ok(feature) => Some(convert_feature(&feature, idx)),
                    Err(e) => {
                        tracing::debug!(
                            source = source_name,
                            index = idx,
                            error = %e,
                            "Skipping malformed feature"
                        );
                        None
                    }
                })
                .collect();

            if features.len() < total {
                tracing::warn!(
                    source = source_name,
                    skipped = total - features.len(),
                    "Dropped malformed features"
                );
            }
            Ok(features)
        }
        "Feature" => {
            let feature = geojson::Feature::try_from(document).map_err(|e| AinaError::GeoJson {
                source_name: source_name.to_string(),
                reason: format!("Failed to parse GeoJSON: {}", e),
            })?;
            Ok(vec![convert_feature(&feature, 0)])
        }
        other => Err(AinaError::GeoJson {
            source_name: source_name.to_string(),
            reason: format!("expected a FeatureCollection, found {:?}", other),
        }),
    }
}

fn convert_feature(feature: &geojson::Feature, idx: usize) -> SourceFeature {
    let id = feature
        .id
        .as_ref()
        .map(|id| match id {
            geojson::feature::Id::String(s) => s.clone(),
            geojson::feature::Id::Number(n) => n.to_string(),
        })
        .or_else(|| Some(idx.to_string()));

    let geometry = feature.geometry.as_ref().and_then(|g| Geometry::from_geojson(&g.value));
    let properties = feature.properties.clone().map(Properties);

    SourceFeature { id, geometry, properties }
}

/// Property bag of a source feature.
///
/// Accessors treat `null`, missing keys, `0`, `""` and `false` as absent, so
/// callers can fall back to a default the way loosely-typed source data
/// expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(pub Map<String, Value>);

impl Properties {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_present(v))
    }

    /// Numeric property, accepting numbers or numeric strings
    pub fn f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .filter(|v| *v != 0.0 && !v.is_nan())
    }

    /// Integer property, accepting integers, floats (truncated) or numeric strings
    pub fn i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => leading_integer(s),
            _ => None,
        }
    }

    /// String property; numbers are rendered as text
    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.f64(key).unwrap_or(default)
    }

    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.i64(key).unwrap_or(default)
    }

    pub fn string_or_default(&self, key: &str) -> String {
        self.string(key).unwrap_or_default()
    }

    /// Whether the key exists with any non-null value, including `0`
    pub fn contains(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|v| !v.is_null())
    }

    /// Raw value access without the presence rules
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

// "12abc" -> 12, matching integer parsing of loosely formatted codes
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
