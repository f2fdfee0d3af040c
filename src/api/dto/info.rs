//! DTOs for the short link detail endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::base62::is_valid_code;

/// Query string of `GET /api/info`.
#[derive(Debug, Deserialize, Validate)]
pub struct InfoQuery {
    /// Short code to describe (1-11 alphanumeric characters).
    #[validate(custom(function = "validate_code"))]
    pub shortlink: String,
}

fn validate_code(code: &str) -> Result<(), ValidationError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new("shortlink_format"))
    }
}
