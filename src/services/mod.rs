//! Service layer modules.
//!
//! Holds the in-memory worker registry. Durable storage sits with the
//! callers of this API, not here.

pub mod registry;

pub use registry::WorkerRegistry;
