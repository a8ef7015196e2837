//! Pure scoring engines for the worker marketplace.
//!
//! Both engines are stateless, side-effect-free numeric transforms. The
//! route layer fetches counters, validates them, and serializes around
//! these functions.

pub mod gig_score;
pub mod ranking;

pub use gig_score::{gig_score, gig_score_from_profile};
pub use ranking::{badge_for_score, rank_workers, worker_score};
