use async_trait::async_trait;
use aina_core::error::{AinaError, Result};
use aina_core::models::{AinaId, MetricRow, UserId};
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::PostgresStore;
use crate::ports::MetricStore;

#[async_trait]
impl MetricStore for PostgresStore {
    async fn find_user_id(&self, subject: &str) -> Result<Option<UserId>> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(subject)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AinaError::Storage(format!("Failed to look up user: {}", e)))?;

        Ok(id.map(UserId))
    }

    async fn find_aina_id(&self, user_id: UserId) -> Result<Option<AinaId>> {
        let id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM aina WHERE user_id = $1 ORDER BY id LIMIT 1")
                .bind(user_id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AinaError::Storage(format!("Failed to look up aina: {}", e)))?;

        Ok(id.map(AinaId))
    }

    async fn metric_rows(&self, aina_id: AinaId) -> Result<Vec<MetricRow>> {
        let rows = sqlx::query(
            r#"
            SELECT m.value, m.timestamp, mt.type_name, ma.name AS mala_name
            FROM metric m
            INNER JOIN sensor_mala sm ON sm.sensor_id = m.sensor_id
            INNER JOIN mala ma ON ma.id = sm.mala_id
            INNER JOIN aina a ON a.id = ma.aina_id
            INNER JOIN metric_type mt ON mt.id = m.metric_type
            WHERE a.id = $1
            ORDER BY m.timestamp ASC
            "#,
        )
        .bind(aina_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AinaError::Storage(format!("Failed to query metrics: {}", e)))?;

        rows.iter()
            .map(|row| {
                let timestamp: Option<DateTime<Utc>> =
                    decoded("timestamp", row.try_get("timestamp"))?;

                Ok(MetricRow {
                    // A reading with no timestamp is reported as current
                    timestamp: timestamp.unwrap_or_else(Utc::now),
                    value: decoded("value", row.try_get("value"))?,
                    type_name: decoded("type_name", row.try_get("type_name"))?,
                    location_name: decoded("mala_name", row.try_get("mala_name"))?,
                })
            })
            .collect()
    }
}

/// NULL decodes to `None`; a type mismatch is a storage error, never a default
fn decoded<T>(column: &str, value: std::result::Result<T, sqlx::Error>) -> Result<T> {
    value.map_err(|e| AinaError::Storage(format!("Bad metric column '{}': {}", column, e)))
}
