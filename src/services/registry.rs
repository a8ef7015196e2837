//! In-memory worker registry
//!
//! Keeps the latest metrics snapshot per worker behind an RwLock so the
//! rankings endpoint can score the whole marketplace without a storage
//! round-trip. Records are whole-value replaced on upsert.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{EngagementMetrics, PerformanceFactors};

/// Registered worker: engagement metrics plus optional performance counters.
#[derive(Debug, Clone)]
pub struct WorkerRecord {
    pub metrics: EngagementMetrics,
    pub performance: Option<PerformanceFactors>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct WorkerRegistry {
    inner: Arc<RwLock<HashMap<String, WorkerRecord>>>,
}

impl WorkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a worker record, returning the stored copy.
    pub fn upsert(
        &self,
        metrics: EngagementMetrics,
        performance: Option<PerformanceFactors>,
        now: DateTime<Utc>,
    ) -> WorkerRecord {
        let record = WorkerRecord {
            metrics,
            performance,
            updated_at: now,
        };
        let mut inner = self.inner.write();
        let replaced = inner
            .insert(record.metrics.worker_id.clone(), record.clone())
            .is_some();
        tracing::debug!(
            worker_id = %record.metrics.worker_id,
            replaced,
            "Worker record upserted"
        );
        record
    }

    pub fn get(&self, worker_id: &str) -> Option<WorkerRecord> {
        self.inner.read().get(worker_id).cloned()
    }

    /// Remove a worker. Returns false when the id was not registered.
    pub fn remove(&self, worker_id: &str) -> bool {
        let removed = self.inner.write().remove(worker_id).is_some();
        if removed {
            tracing::debug!(worker_id, "Worker record removed");
        }
        removed
    }

    /// Snapshot of all engagement metrics, ordered by worker id so ranking
    /// ties (and therefore pagination) stay deterministic.
    pub fn snapshot_metrics(&self) -> Vec<EngagementMetrics> {
        let mut all: Vec<EngagementMetrics> = self
            .inner
            .read()
            .values()
            .map(|r| r.metrics.clone())
            .collect();
        all.sort_by(|a, b| a.worker_id.cmp(&b.worker_id));
        all
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
