//! Detail record describing a shortening event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted lifetime: 100 years of 365 days.
///
/// Keeps `minutes * 60` within what Redis accepts for `EX` and what
/// `DateTime<Utc>` can represent.
pub const MAX_EXPIRATION_MINUTES: u64 = 100 * 365 * 24 * 60;

/// Metadata written once when a short code is allocated.
///
/// Stored as JSON under `shortlink:{code}:detail` with the same TTL as the
/// URL record, and returned verbatim by the info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDetail {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiration_in_minutes: u64,
}

impl LinkDetail {
    /// Creates a detail record stamped with the current time.
    pub fn new(url: impl Into<String>, expiration_in_minutes: u64) -> Self {
        Self {
            url: url.into(),
            created_at: Utc::now(),
            expiration_in_minutes,
        }
    }

    /// Returns the instant after which the record is no longer resolvable.
    ///
    /// `None` if that instant is not representable, which can only happen
    /// for records written with an out-of-range lifetime.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let minutes = i64::try_from(self.expiration_in_minutes).ok()?;
        self.created_at
            .checked_add_signed(chrono::Duration::try_minutes(minutes)?)
    }
}
