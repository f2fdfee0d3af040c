//! Utility functions for short code encoding and URL fingerprinting.
//!
//! - [`base62`] - Counter value to short code encoding and validation
//! - [`fingerprint`] - Byte-exact URL digests for deduplication
//! - [`target_url`] - Which URLs may be shortened

pub mod base62;
pub mod fingerprint;
pub mod target_url;
