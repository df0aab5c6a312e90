//! Usage metric catalog for container monitoring
//!
//! This crate knows every resource-usage metric a monitoring pipeline collects
//! for containers and nodes, and how to read each one out of a collector
//! snapshot.
//!
//! # Module Organization
//!
//! - [`snapshot`]: Per-entity snapshot types as reported by the collector
//! - [`metrics`]: Metric descriptors, extraction, classification and lookup

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod metrics;
pub mod snapshot;
