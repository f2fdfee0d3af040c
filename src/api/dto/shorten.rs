//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::MAX_EXPIRATION_MINUTES;
use crate::utils::target_url::{TargetUrlError, check_target_url};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (absolute http or https URL).
    #[validate(custom(function = "validate_target_url"))]
    pub url: String,

    /// Lifetime of the short link in minutes.
    #[validate(range(
        min = 1,
        max = MAX_EXPIRATION_MINUTES,
        message = "Expiration must be between one minute and 100 years"
    ))]
    pub expiration_in_minutes: u64,
}

/// Response carrying the allocated short code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortlink: String,
}

fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    check_target_url(url).map(|_| ()).map_err(|e| {
        let code = match e {
            TargetUrlError::ControlCharacter(_) => "url_control_character",
            TargetUrlError::Malformed(_) => "url",
            TargetUrlError::UnsupportedScheme(_) => "url_scheme",
        };
        ValidationError::new(code).with_message(e.to_string().into())
    })
}
