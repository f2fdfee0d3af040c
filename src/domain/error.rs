//! Errors returned by the link engine.

use crate::domain::repositories::StoreError;
use thiserror::Error;

/// Outcome classes a boundary layer chooses a response from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The code has no live record. Client-visible.
    NotFound,
    /// The backend could not be reached or failed the call.
    BackendUnavailable,
    /// A stored record could not be interpreted.
    Internal,
}

/// Error returned by [`crate::application::services::LinkService`].
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("unknown short code: {code}")]
    NotFound { code: String },

    #[error(transparent)]
    Backend(#[from] StoreError),

    #[error("stored record for {code} is unreadable: {reason}")]
    InvalidRecord { code: String, reason: String },
}

impl LinkError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Backend(_) => ErrorKind::BackendUnavailable,
            Self::InvalidRecord { .. } => ErrorKind::Internal,
        }
    }

    /// True for outcomes that carry their own client-facing classification.
    pub fn is_classified(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
