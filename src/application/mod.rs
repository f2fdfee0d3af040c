//! Application layer services implementing business logic.
//!
//! Services orchestrate the backend contract, the code encoder and the
//! fingerprinting utilities, and provide a clean API for HTTP handlers and
//! the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short code allocation, resolution and details

pub mod services;
