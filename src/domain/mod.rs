//! Domain layer containing the link engine's data model and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Stored record types
//! - [`keys`] - Backend key schema
//! - [`repositories`] - The [`repositories::KeyValueStore`] backend contract
//! - [`error`] - Engine error classification
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The engine holds no in-process state; every record lives in the backend
//! - Business logic lives in [`crate::application::services`]

pub mod entities;
pub mod error;
pub mod keys;
pub mod repositories;
