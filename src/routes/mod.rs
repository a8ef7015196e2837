pub mod health;
pub mod workers;

use axum::{routing::delete, routing::get, routing::post, routing::put, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Stateless scoring
        .route("/workers/score", post(workers::score_worker))
        .route("/workers/rank", post(workers::rank_worker_set))
        // Worker registry
        .route("/workers", post(workers::register_worker))
        .route("/workers/rankings", get(workers::list_rankings))
        .route("/workers/:worker_id", put(workers::upsert_worker))
        .route("/workers/:worker_id", get(workers::get_worker))
        .route("/workers/:worker_id", delete(workers::delete_worker))
}
