//! Infrastructure layer for external integrations.
//!
//! Implements the backend contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis implementation of the key-value backend

pub mod store;
