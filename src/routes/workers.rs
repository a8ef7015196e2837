//! Worker scoring and ranking routes
//!
//! Handlers stay thin: validate the payload, call the pure engines, shape
//! the response. Out-of-domain input is rejected here with 400 before it
//! reaches the scoring code.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, NoContent, Paginated, PaginationParams};
use crate::app::AppState;
use crate::domain::{
    EngagementMetrics, GigScoreResponse, PerformanceProfile, RankRequest, RankedWorker,
    RankedWorkerResponse, ScoreRequest, UpsertWorkerRequest, WorkerProfileResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::scoring;
use crate::services::registry::WorkerRecord;

const MAX_RATING: f64 = 5.0;

/// POST /workers/score
///
/// Stateless gig score for a (possibly partial) performance profile.
pub async fn score_worker(Json(req): Json<ScoreRequest>) -> ApiResult<impl IntoResponse> {
    if let Some(profile) = &req.performance {
        validate_profile(profile)?;
    }
    let gig_score = scoring::gig_score_from_profile(req.performance);
    Ok(DataResponse::new(GigScoreResponse { gig_score }))
}

/// POST /workers/rank
///
/// Stateless ranking of a caller-supplied set of workers.
pub async fn rank_worker_set(Json(req): Json<RankRequest>) -> ApiResult<impl IntoResponse> {
    for metrics in &req.workers {
        validate_metrics(metrics)?;
    }
    let ranked = scoring::rank_workers(&req.workers, Utc::now());
    let data: Vec<RankedWorkerResponse> = ranked.into_iter().map(to_ranked_response).collect();
    Ok(DataResponse::new(data))
}

/// POST /workers
///
/// Register a new worker under a server-minted id.
pub async fn register_worker(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpsertWorkerRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_upsert(&req)?;

    let worker_id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let (metrics, performance) = req.into_metrics(worker_id);
    let record = state
        .registry
        .upsert(metrics, performance.map(PerformanceProfile::into_factors), now);

    tracing::info!(worker_id = %record.metrics.worker_id, "Worker registered");
    Ok(Created(DataResponse::new(profile_response(record, now))))
}

/// PUT /workers/:worker_id
///
/// Insert or replace a worker's metrics under a caller-chosen id.
pub async fn upsert_worker(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
    Json(req): Json<UpsertWorkerRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_upsert(&req)?;

    let now = Utc::now();
    let (metrics, performance) = req.into_metrics(worker_id);
    let record = state
        .registry
        .upsert(metrics, performance.map(PerformanceProfile::into_factors), now);

    Ok(DataResponse::new(profile_response(record, now)))
}

/// GET /workers/:worker_id
pub async fn get_worker(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let record = state
        .registry
        .get(&worker_id)
        .ok_or_else(|| ApiError::NotFound(format!("Worker {worker_id} not found")))?;

    Ok(DataResponse::new(profile_response(record, Utc::now())))
}

/// DELETE /workers/:worker_id
pub async fn delete_worker(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    if !state.registry.remove(&worker_id) {
        return Err(ApiError::NotFound(format!("Worker {worker_id} not found")));
    }
    Ok(NoContent)
}

/// GET /workers/rankings
///
/// Rank every registered worker, paginated.
pub async fn list_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<impl IntoResponse> {
    let all = state.registry.snapshot_metrics();
    let ranked = scoring::rank_workers(&all, Utc::now());
    let total = ranked.len() as u64;

    let page: Vec<RankedWorkerResponse> = ranked
        .into_iter()
        .skip(params.offset())
        .take(params.per_page() as usize)
        .map(to_ranked_response)
        .collect();

    Ok(Paginated::new(page, &params, total))
}

fn to_ranked_response(ranked: RankedWorker) -> RankedWorkerResponse {
    let badge = scoring::badge_for_score(ranked.score).into();
    RankedWorkerResponse { ranked, badge }
}

fn profile_response(record: WorkerRecord, now: DateTime<Utc>) -> WorkerProfileResponse {
    let ranked = scoring::worker_score(&record.metrics, now);
    WorkerProfileResponse {
        worker_id: ranked.metrics.worker_id.clone(),
        gig_score: record.performance.as_ref().map(scoring::gig_score),
        metrics: ranked.metrics,
        score: ranked.score,
        breakdown: ranked.breakdown,
        badge: scoring::badge_for_score(ranked.score).into(),
        updated_at: record.updated_at,
    }
}

fn validate_rating(avg_rating: f64) -> ApiResult<()> {
    if !avg_rating.is_finite() || !(0.0..=MAX_RATING).contains(&avg_rating) {
        return Err(ApiError::BadRequest(format!(
            "avg_rating must be between 0 and 5, got {avg_rating}"
        )));
    }
    Ok(())
}

fn validate_latency(minutes: f64) -> ApiResult<()> {
    if !minutes.is_finite() || minutes < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "response_time_minutes must be non-negative, got {minutes}"
        )));
    }
    Ok(())
}

fn validate_profile(profile: &PerformanceProfile) -> ApiResult<()> {
    if let Some(rating) = profile.avg_rating {
        validate_rating(rating)?;
    }
    if let Some(minutes) = profile.response_time_minutes {
        validate_latency(minutes)?;
    }
    Ok(())
}

fn validate_metrics(metrics: &EngagementMetrics) -> ApiResult<()> {
    validate_rating(metrics.avg_rating)?;
    validate_latency(metrics.response_time_minutes)
}

fn validate_upsert(req: &UpsertWorkerRequest) -> ApiResult<()> {
    validate_rating(req.avg_rating)?;
    validate_latency(req.response_time_minutes)?;
    if let Some(profile) = &req.performance {
        validate_profile(profile)?;
    }
    Ok(())
}
