//! Gig score engine
//!
//! Folds a worker's raw performance counters into a single 0-100 quality
//! score from five weighted sub-scores. Deterministic and total over the
//! documented input domain; out-of-range input is rejected at the API
//! boundary before reaching this module.

use crate::domain::{PerformanceFactors, PerformanceProfile};

/// Sub-score weights, summing to 1.0
pub const REVIEW_WEIGHT: f64 = 0.40;
pub const JOBS_WEIGHT: f64 = 0.25;
pub const RESPONSE_WEIGHT: f64 = 0.15;
pub const CANCELLATION_WEIGHT: f64 = 0.10;
pub const REPEAT_CLIENT_WEIGHT: f64 = 0.10;

/// Review volume at which the rating carries full confidence
const FULL_CONFIDENCE_REVIEWS: f64 = 10.0;
/// Completed-job count at which the jobs curve saturates
const JOBS_SATURATION: f64 = 50.0;
/// Response latency (minutes) at which the response sub-score bottoms out
const RESPONSE_FLOOR_MINUTES: f64 = 240.0;

/// Composite quality score in [0, 100], rounded to one decimal place
/// (half away from zero).
pub fn gig_score(factors: &PerformanceFactors) -> f64 {
    let score = REVIEW_WEIGHT * review_score(factors)
        + JOBS_WEIGHT * jobs_score(factors)
        + RESPONSE_WEIGHT * response_score(factors)
        + CANCELLATION_WEIGHT * cancellation_score(factors)
        + REPEAT_CLIENT_WEIGHT * repeat_client_score(factors);

    round1(score)
}

/// Score an optional partial profile, substituting neutral defaults for
/// missing counters before delegating to [`gig_score`].
pub fn gig_score_from_profile(profile: Option<PerformanceProfile>) -> f64 {
    let factors = profile.unwrap_or_default().into_factors();
    gig_score(&factors)
}

/// Rating scaled to 0-100, discounted by a confidence ramp that reaches
/// full strength at 10 reviews. A single 5-star review cannot produce a
/// maximal sub-score.
fn review_score(f: &PerformanceFactors) -> f64 {
    let confidence = (f.review_count as f64 / FULL_CONFIDENCE_REVIEWS).min(1.0);
    f.avg_rating / 5.0 * 100.0 * confidence
}

/// Logarithmic diminishing-returns curve, anchored so 50 completed jobs
/// maps to exactly 100. Sharp growth for small counts, flat thereafter.
fn jobs_score(f: &PerformanceFactors) -> f64 {
    let curve = (f.completed_jobs as f64 + 1.0).ln() / (JOBS_SATURATION + 1.0).ln() * 100.0;
    curve.min(100.0)
}

/// Linear inverse penalty: 100 at instant response, 0 at four hours or more.
fn response_score(f: &PerformanceFactors) -> f64 {
    (100.0 - f.response_time_minutes / RESPONSE_FLOOR_MINUTES * 100.0).max(0.0)
}

/// Double-weighted penalty on the cancellation rate: a 50% rate already
/// zeroes the sub-score. No job history earns no credit.
fn cancellation_score(f: &PerformanceFactors) -> f64 {
    let total = f.completed_jobs as f64 + f.cancelled_jobs as f64;
    if total == 0.0 {
        return 0.0;
    }
    let rate = f.cancelled_jobs as f64 / total;
    (100.0 - rate * 200.0).max(0.0)
}

/// Share of completed jobs that came from repeat clients, capped at 100
fn repeat_client_score(f: &PerformanceFactors) -> f64 {
    let denom = f.completed_jobs.max(1) as f64;
    (f.repeat_clients as f64 / denom * 100.0).min(100.0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
