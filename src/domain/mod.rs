//! Domain types and DTOs
//!
//! Data structures for the worker marketplace: performance counters,
//! engagement metrics, ranking output, and badge tiers.

pub mod workers;

pub use workers::*;
