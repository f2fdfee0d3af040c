//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into link engine calls and maps
//! engine errors onto status codes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and panic recovery middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
