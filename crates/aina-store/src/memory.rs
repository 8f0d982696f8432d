//! In-memory metric store for development and testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use aina_core::error::Result;
use aina_core::models::{AinaId, MetricRow, UserId};

use crate::ports::MetricStore;

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<String, UserId>,
    aina: HashMap<UserId, AinaId>,
    rows: HashMap<AinaId, Vec<MetricRow>>,
    next_id: i64,
}

/// In-memory implementation of MetricStore
#[derive(Debug, Clone, Default)]
pub struct MemoryMetricStore {
    state: Arc<RwLock<MemoryState>>,
    row_queries: Arc<AtomicUsize>,
}

impl MemoryMetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user by email, returning the existing id when known
    pub fn add_user(&self, email: &str) -> UserId {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if let Some(id) = state.users.get(email) {
            return *id;
        }
        state.next_id += 1;
        let id = UserId(state.next_id);
        state.users.insert(email.to_string(), id);
        id
    }

    /// Give a user an aina and return its id
    pub fn add_aina(&self, user_id: UserId) -> AinaId {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.next_id += 1;
        let id = AinaId(state.next_id);
        state.aina.insert(user_id, id);
        id
    }

    pub fn record(&self, aina_id: AinaId, row: MetricRow) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.rows.entry(aina_id).or_default().push(row);
    }

    /// Number of times readings have been queried
    pub fn row_queries(&self) -> usize {
        self.row_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricStore for MemoryMetricStore {
    async fn find_user_id(&self, subject: &str) -> Result<Option<UserId>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state.users.get(subject).copied())
    }

    async fn find_aina_id(&self, user_id: UserId) -> Result<Option<AinaId>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state.aina.get(&user_id).copied())
    }

    async fn metric_rows(&self, aina_id: AinaId) -> Result<Vec<MetricRow>> {
        self.row_queries.fetch_add(1, Ordering::SeqCst);

        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let mut rows = state.rows.get(&aina_id).cloned().unwrap_or_default();
        rows.sort_by_key(|row| row.timestamp);
        Ok(rows)
    }
}
