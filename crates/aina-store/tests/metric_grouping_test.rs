use std::collections::HashSet;

use aina_core::models::MetricRow;
use aina_store::{group_metric_rows, MemoryMetricStore, MetricStore};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

const LOCATIONS: [&str; 3] = ["Mala 1", "Mala 2", "Mala 3"];
const TYPES: [&str; 3] = ["temperature", "moisture", "ph"];

fn row(offset_min: i64, location: usize, metric: usize, value: f64) -> MetricRow {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    MetricRow {
        timestamp: base + Duration::minutes(offset_min),
        value: Some(value),
        type_name: Some(TYPES[metric].to_string()),
        location_name: Some(LOCATIONS[location].to_string()),
    }
}

#[tokio::test]
async fn test_store_rows_fold_into_ascending_series() {
    let store = MemoryMetricStore::new();
    let aina = store.add_aina(store.add_user("farmer@example.org"));

    for (i, minute) in [30, 10, 20, 0].into_iter().enumerate() {
        store.record(aina, row(minute, i % 2, 0, minute as f64));
    }

    let rows = store.metric_rows(aina).await.unwrap();
    let grouped = group_metric_rows(rows);

    for location in &grouped {
        for series in location.data.values() {
            assert!(series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        }
    }
    let total: usize = grouped.iter().map(|l| l.point_count()).sum();
    assert_eq!(total, 4);
}

proptest! {
    #[test]
    fn grouping_keeps_every_row(
        entries in prop::collection::vec(
            (0i64..10_000, 0usize..3, 0usize..3, -50.0f64..50.0),
            0..60,
        )
    ) {
        let mut rows: Vec<MetricRow> = entries
            .iter()
            .map(|(t, l, m, v)| row(*t, *l, *m, *v))
            .collect();
        rows.sort_by_key(|r| r.timestamp);

        let grouped = group_metric_rows(rows.clone());

        let total: usize = grouped.iter().map(|l| l.point_count()).sum();
        prop_assert_eq!(total, rows.len());

        let names: HashSet<&str> = grouped.iter().map(|l| l.name.as_str()).collect();
        prop_assert_eq!(names.len(), grouped.len());

        for location in &grouped {
            for series in location.data.values() {
                prop_assert!(series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            }
        }
    }
}
