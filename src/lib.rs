//! # Redis Shortener
//!
//! A URL shortening service that allocates short codes from an atomic Redis
//! counter and resolves them back, with every record expiring after a
//! caller-chosen number of minutes.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Record types, key schema, backend contract and errors
//! - **Application Layer** ([`application`]) - The link engine ([`LinkService`])
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis backend
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## How codes are allocated
//!
//! 1. The URL's SHA-256 fingerprint is looked up; a live mapping is reused.
//! 2. Otherwise `INCR next.url.id` yields a fresh id, unique across all
//!    processes sharing the Redis instance.
//! 3. The id is base62-encoded into a 1-11 character code.
//! 4. URL, fingerprint and detail records are written with the same TTL.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"url":"https://www.baidu.com","expiration_in_minutes":60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::LinkService;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::LinkDetail;
    pub use crate::domain::error::{ErrorKind, LinkError};
    pub use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::RedisStore;
    pub use crate::state::AppState;
}
