use async_trait::async_trait;
use aina_core::error::Result;
use aina_core::models::{AinaId, MetricRow, UserId};

/// Port for sensor metric lookups
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// Resolve the user behind a session subject (an email address)
    async fn find_user_id(&self, subject: &str) -> Result<Option<UserId>>;

    /// Resolve the aina a user is associated with
    async fn find_aina_id(&self, user_id: UserId) -> Result<Option<AinaId>>;

    /// All readings for an aina, joined with site and metric type,
    /// ordered by timestamp ascending
    async fn metric_rows(&self, aina_id: AinaId) -> Result<Vec<MetricRow>>;
}
