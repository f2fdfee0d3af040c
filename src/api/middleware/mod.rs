//! HTTP middleware for request processing.
//!
//! Provides request tracing and panic recovery.

pub mod recover;
pub mod tracing;
