//! Core domain entities.
//!
//! The short code and URL records are plain strings in the backend; the only
//! structured record is [`LinkDetail`].

pub mod link_detail;

pub use link_detail::{LinkDetail, MAX_EXPIRATION_MINUTES};
