//! Worker ranking engine
//!
//! Orders marketplace workers by engagement: likes and volume-adjusted
//! ratings, decayed multiplicatively per week of inactivity, plus a discrete
//! responsiveness bonus. Review volume is smoothed with a square root here,
//! unlike the gig score's linear confidence ramp; the two engines are
//! intentionally separate.

use chrono::{DateTime, Utc};

use crate::domain::{BadgeTier, EngagementMetrics, RankedWorker, ScoreBreakdown};

/// Multiplier on raw like count
pub const LIKE_WEIGHT: f64 = 1.0;
/// Multiplier on the volume-adjusted rating
pub const RATING_WEIGHT: f64 = 2.5;
/// Multiplicative decay applied per full week since last activity
pub const RECENCY_DECAY: f64 = 0.85;

const DAYS_PER_WEEK: i64 = 7;

/// Compute a worker's ranking score as of `now`.
///
/// `now` is a parameter rather than a clock read so identical inputs always
/// produce identical outputs.
pub fn worker_score(metrics: &EngagementMetrics, now: DateTime<Utc>) -> RankedWorker {
    let like_score = LIKE_WEIGHT * metrics.like_count as f64;

    let rating_score = if metrics.review_count > 0 {
        RATING_WEIGHT * metrics.avg_rating * (metrics.review_count as f64).sqrt()
    } else {
        0.0
    };

    // Full elapsed weeks; activity in the future counts as current
    let weeks_ago = (now - metrics.last_activity).num_days().max(0) / DAYS_PER_WEEK;
    let recency_score = RECENCY_DECAY.powi(weeks_ago as i32);

    let response_score = response_bonus(metrics.response_time_minutes);

    // The response bonus is additive and not subject to recency decay
    let score = (like_score + rating_score) * recency_score + response_score;

    RankedWorker {
        metrics: metrics.clone(),
        score,
        breakdown: ScoreBreakdown {
            like_score,
            rating_score,
            recency_score,
            response_score,
        },
    }
}

/// Rank workers by descending score.
///
/// The sort is stable: equal scores keep their input order. Input elements
/// are never mutated; every output record is freshly produced.
pub fn rank_workers(workers: &[EngagementMetrics], now: DateTime<Utc>) -> Vec<RankedWorker> {
    let mut ranked: Vec<RankedWorker> = workers.iter().map(|m| worker_score(m, now)).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Badge tier for a ranking score. Bands are inclusive at their lower bound,
/// mutually exclusive, and exhaustive.
pub fn badge_for_score(score: f64) -> BadgeTier {
    if score >= 50.0 {
        BadgeTier::TopRated
    } else if score >= 30.0 {
        BadgeTier::Excellent
    } else if score >= 15.0 {
        BadgeTier::Great
    } else {
        BadgeTier::New
    }
}

/// Discrete step bonus for responsiveness
fn response_bonus(minutes: f64) -> f64 {
    if minutes <= 15.0 {
        5.0
    } else if minutes <= 30.0 {
        4.0
    } else if minutes <= 60.0 {
        3.0
    } else if minutes <= 120.0 {
        2.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
    }

    fn metrics(id: &str, likes: u32, rating: f64, reviews: u32, weeks_ago: i64) -> EngagementMetrics {
        EngagementMetrics {
            worker_id: id.to_string(),
            like_count: likes,
            avg_rating: rating,
            review_count: reviews,
            last_activity: now() - Duration::weeks(weeks_ago),
            response_time_minutes: 10.0,
        }
    }

    #[test]
    fn combines_likes_ratings_and_response_bonus() {
        // 10 likes + 2.5 * 4.0 * sqrt(25) = 60, fresh activity, fast response
        let m = metrics("w1", 10, 4.0, 25, 0);
        let ranked = worker_score(&m, now());

        assert!((ranked.breakdown.like_score - 10.0).abs() < 1e-9);
        assert!((ranked.breakdown.rating_score - 50.0).abs() < 1e-9);
        assert!((ranked.breakdown.recency_score - 1.0).abs() < 1e-9);
        assert!((ranked.breakdown.response_score - 5.0).abs() < 1e-9);
        assert!((ranked.score - 65.0).abs() < 1e-9);
    }

    #[test]
    fn zero_reviews_contribute_no_rating_score() {
        let m = metrics("w1", 3, 5.0, 0, 0);
        let ranked = worker_score(&m, now());
        assert!((ranked.breakdown.rating_score - 0.0).abs() < 1e-9);
    }

    #[test]
    fn engagement_decays_per_elapsed_week() {
        let fresh = worker_score(&metrics("w1", 10, 4.0, 25, 0), now());
        let stale = worker_score(&metrics("w2", 10, 4.0, 25, 2), now());

        assert!((stale.breakdown.recency_score - 0.85 * 0.85).abs() < 1e-9);
        assert!((stale.score - (60.0 * 0.7225 + 5.0)).abs() < 1e-9);
        assert!(fresh.score >= stale.score);
    }

    #[test]
    fn partial_weeks_do_not_decay() {
        let mut m = metrics("w1", 10, 4.0, 25, 0);
        m.last_activity = now() - Duration::days(6);
        let ranked = worker_score(&m, now());
        assert!((ranked.breakdown.recency_score - 1.0).abs() < 1e-9);

        m.last_activity = now() - Duration::days(7);
        let ranked = worker_score(&m, now());
        assert!((ranked.breakdown.recency_score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn future_activity_counts_as_current() {
        let mut m = metrics("w1", 10, 4.0, 25, 0);
        m.last_activity = now() + Duration::weeks(3);
        let ranked = worker_score(&m, now());
        assert!((ranked.breakdown.recency_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn response_bonus_steps_at_band_edges() {
        assert_eq!(response_bonus(0.0), 5.0);
        assert_eq!(response_bonus(15.0), 5.0);
        assert_eq!(response_bonus(15.1), 4.0);
        assert_eq!(response_bonus(30.0), 4.0);
        assert_eq!(response_bonus(60.0), 3.0);
        assert_eq!(response_bonus(120.0), 2.0);
        assert_eq!(response_bonus(121.0), 1.0);
        assert_eq!(response_bonus(10_000.0), 1.0);
    }

    #[test]
    fn ranking_sorts_descending_and_preserves_length() {
        let workers = vec![
            metrics("low", 1, 3.0, 4, 5),
            metrics("high", 40, 5.0, 100, 0),
            metrics("mid", 10, 4.0, 25, 1),
        ];
        let ranked = rank_workers(&workers, now());

        assert_eq!(ranked.len(), workers.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked[0].metrics.worker_id, "high");
        assert_eq!(ranked[2].metrics.worker_id, "low");
    }

    #[test]
    fn ranking_empty_input_yields_empty_output() {
        assert!(rank_workers(&[], now()).is_empty());
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let workers = vec![
            metrics("first", 10, 4.0, 25, 0),
            metrics("second", 10, 4.0, 25, 0),
            metrics("third", 10, 4.0, 25, 0),
        ];
        let ranked = rank_workers(&workers, now());
        let ids: Vec<&str> = ranked.iter().map(|r| r.metrics.worker_id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn ranking_does_not_mutate_input() {
        let workers = vec![metrics("w1", 10, 4.0, 25, 0)];
        let before = workers.clone();
        let _ = rank_workers(&workers, now());
        assert_eq!(workers, before);
    }

    #[test]
    fn score_is_deterministic() {
        let m = metrics("w1", 7, 4.2, 13, 3);
        let a = worker_score(&m, now());
        let b = worker_score(&m, now());
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    #[test]
    fn badge_bands_are_inclusive_at_lower_bound() {
        assert_eq!(badge_for_score(80.0), BadgeTier::TopRated);
        assert_eq!(badge_for_score(50.0), BadgeTier::TopRated);
        assert_eq!(badge_for_score(49.99), BadgeTier::Excellent);
        assert_eq!(badge_for_score(30.0), BadgeTier::Excellent);
        assert_eq!(badge_for_score(29.99), BadgeTier::Great);
        assert_eq!(badge_for_score(15.0), BadgeTier::Great);
        assert_eq!(badge_for_score(14.99), BadgeTier::New);
        assert_eq!(badge_for_score(0.0), BadgeTier::New);
    }
}
