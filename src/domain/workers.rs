//! Worker domain types
//!
//! Performance counters feed the gig score; engagement metrics feed the
//! marketplace ranking. Both are transient snapshots read fresh per scoring
//! call, never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw performance counters for a single worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceFactors {
    /// Average review rating, 0-5 scale
    pub avg_rating: f64,
    pub review_count: u32,
    pub completed_jobs: u32,
    /// Average response latency in minutes
    pub response_time_minutes: f64,
    pub cancelled_jobs: u32,
    /// Semantically at most `completed_jobs`, but not enforced
    pub repeat_clients: u32,
}

/// Partial performance profile as submitted by clients. Missing fields fall
/// back to neutral defaults before scoring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformanceProfile {
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub completed_jobs: Option<u32>,
    #[serde(default)]
    pub response_time_minutes: Option<f64>,
    #[serde(default)]
    pub cancelled_jobs: Option<u32>,
    #[serde(default)]
    pub repeat_clients: Option<u32>,
}

impl PerformanceProfile {
    /// Default response latency assumed for workers with no recorded value
    pub const DEFAULT_RESPONSE_TIME_MINUTES: f64 = 60.0;

    pub fn into_factors(self) -> PerformanceFactors {
        PerformanceFactors {
            avg_rating: self.avg_rating.unwrap_or(0.0),
            review_count: self.review_count.unwrap_or(0),
            completed_jobs: self.completed_jobs.unwrap_or(0),
            response_time_minutes: self
                .response_time_minutes
                .unwrap_or(Self::DEFAULT_RESPONSE_TIME_MINUTES),
            cancelled_jobs: self.cancelled_jobs.unwrap_or(0),
            repeat_clients: self.repeat_clients.unwrap_or(0),
        }
    }
}

/// Engagement counters for a single worker, input to the ranking engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Opaque identifier, passed through for result correlation
    pub worker_id: String,
    pub like_count: u32,
    /// Average review rating, 0-5 scale
    pub avg_rating: f64,
    pub review_count: u32,
    pub last_activity: DateTime<Utc>,
    /// Average response latency in minutes
    pub response_time_minutes: f64,
}

/// The four weighted sub-scores behind a ranking score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub like_score: f64,
    pub rating_score: f64,
    pub recency_score: f64,
    pub response_score: f64,
}

/// A worker with its computed ranking score. Produced fresh per ranking call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWorker {
    #[serde(flatten)]
    pub metrics: EngagementMetrics,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Display badge tier derived from a ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    TopRated,
    Excellent,
    Great,
    New,
}

impl BadgeTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TopRated => "Top Rated",
            Self::Excellent => "Excellent",
            Self::Great => "Great",
            Self::New => "New",
        }
    }

    /// Variant understood by the frontend badge component. Closed mapping,
    /// no name-based lookup.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::TopRated => "default",
            Self::Excellent => "secondary",
            Self::Great => "outline",
            Self::New => "muted",
        }
    }
}

/// Badge DTO as rendered by clients
#[derive(Debug, Clone, Serialize)]
pub struct WorkerBadge {
    pub tier: BadgeTier,
    pub label: &'static str,
    pub variant: &'static str,
}

impl From<BadgeTier> for WorkerBadge {
    fn from(tier: BadgeTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            variant: tier.variant(),
        }
    }
}

/// Request body for registering or updating a worker
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertWorkerRequest {
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub review_count: u32,
    pub last_activity: DateTime<Utc>,
    #[serde(default)]
    pub response_time_minutes: f64,
    /// Optional performance counters for gig score computation
    #[serde(default)]
    pub performance: Option<PerformanceProfile>,
}

impl UpsertWorkerRequest {
    pub fn into_metrics(self, worker_id: String) -> (EngagementMetrics, Option<PerformanceProfile>) {
        let metrics = EngagementMetrics {
            worker_id,
            like_count: self.like_count,
            avg_rating: self.avg_rating,
            review_count: self.review_count,
            last_activity: self.last_activity,
            response_time_minutes: self.response_time_minutes,
        };
        (metrics, self.performance)
    }
}

/// Request body for the stateless scoring endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub performance: Option<PerformanceProfile>,
}

/// Request body for the stateless ranking endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub workers: Vec<EngagementMetrics>,
}

/// Response DTO for the stateless scoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GigScoreResponse {
    pub gig_score: f64,
}

/// Ranked worker plus its display badge
#[derive(Debug, Clone, Serialize)]
pub struct RankedWorkerResponse {
    #[serde(flatten)]
    pub ranked: RankedWorker,
    pub badge: WorkerBadge,
}

/// Response DTO for a registered worker profile
#[derive(Debug, Clone, Serialize)]
pub struct WorkerProfileResponse {
    pub worker_id: String,
    pub metrics: EngagementMetrics,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub badge: WorkerBadge,
    /// Present when performance counters are on file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gig_score: Option<f64>,
    pub updated_at: DateTime<Utc>,
}
