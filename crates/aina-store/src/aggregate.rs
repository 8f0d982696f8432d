use std::collections::HashMap;

use aina_core::models::{LocationMetrics, MetricPoint, MetricRow};

const UNKNOWN: &str = "unknown";

/// Fold readings into location -> metric type -> series.
///
/// Locations keep first-seen order and each series keeps row order, so rows
/// that arrive in ascending time produce ascending series. Missing names
/// group under `"unknown"`; a missing value reads as `0`.
pub fn group_metric_rows<I>(rows: I) -> Vec<LocationMetrics>
where
    I: IntoIterator<Item = MetricRow>,
{
    let mut locations: Vec<LocationMetrics> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let location = non_empty(row.location_name).unwrap_or_else(|| UNKNOWN.to_string());
        let type_name = non_empty(row.type_name).unwrap_or_else(|| UNKNOWN.to_string());

        let slot = *index.entry(location.clone()).or_insert_with(|| {
            locations.push(LocationMetrics::new(location));
            locations.len() - 1
        });

        locations[slot]
            .data
            .entry(type_name)
            .or_default()
            .push(MetricPoint { timestamp: row.timestamp, value: row.value.unwrap_or(0.0) });
    }

    locations
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(
        minute: u32,
        value: Option<f64>,
        type_name: Option<&str>,
        location: Option<&str>,
    ) -> MetricRow {
        MetricRow {
            timestamp: Utc.with_ymd_and_hms(2025, 7, 22, 8, minute, 0).unwrap(),
            value,
            type_name: type_name.map(str::to_string),
            location_name: location.map(str::to_string),
        }
    }

    #[test]
    fn test_groups_by_location_then_type() {
        let grouped = group_metric_rows(vec![
            row(0, Some(21.5), Some("temperature"), Some("Mala 2")),
            row(1, Some(40.0), Some("moisture"), Some("Mala 1")),
            row(2, Some(22.0), Some("temperature"), Some("Mala 2")),
            row(3, Some(38.5), Some("moisture"), Some("Mala 2")),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Mala 2");
        assert_eq!(grouped[1].name, "Mala 1");

        let temps = &grouped[0].data["temperature"];
        assert_eq!(temps.len(), 2);
        assert_eq!(temps[0].value, 21.5);
        assert_eq!(temps[1].value, 22.0);
        assert!(temps[0].timestamp < temps[1].timestamp);
        assert_eq!(grouped[0].point_count(), 3);
    }

    #[test]
    fn test_row_order_is_kept_without_resorting() {
        let grouped = group_metric_rows(vec![
            row(5, Some(2.0), Some("ph"), Some("Mala 1")),
            row(1, Some(1.0), Some("ph"), Some("Mala 1")),
        ]);

        let values: Vec<f64> = grouped[0].data["ph"].iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2.0, 1.0]);
    }

    #[test]
    fn test_missing_fields_are_defaulted() {
        let grouped = group_metric_rows(vec![
            row(0, None, None, None),
            row(1, Some(3.0), Some(""), Some("")),
        ]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].name, "unknown");
        let series = &grouped[0].data["unknown"];
        assert_eq!(series[0].value, 0.0);
        assert_eq!(series[1].value, 3.0);
    }

    #[test]
    fn test_no_rows_no_locations() {
        assert!(group_metric_rows(Vec::new()).is_empty());
    }
}
