//! Backend key schema.
//!
//! | Purpose                | Key                         | Value            | TTL        |
//! |------------------------|-----------------------------|------------------|------------|
//! | Global counter         | `next.url.id`               | integer          | none       |
//! | URL record             | `shortlink:{code}:url`      | long URL         | caller TTL |
//! | Code-keyed hash record | `urlhash:{code}:url`        | long URL         | caller TTL |
//! | Fingerprint index      | `urlhash:{fingerprint}:url` | short code       | caller TTL |
//! | Detail record          | `shortlink:{code}:detail`   | [`LinkDetail`] JSON | caller TTL |
//!
//! Fingerprints are 64 hex characters and codes at most 11, so both uses of
//! the `urlhash:` namespace stay disjoint.
//!
//! [`LinkDetail`]: crate::domain::entities::LinkDetail

/// Counter incremented once per allocated short code. Never expires.
pub const URL_ID_COUNTER_KEY: &str = "next.url.id";

/// Value a fingerprint slot may hold to mean "no mapping".
pub const EMPTY_RECORD_SENTINEL: &str = "{}";

/// Key of the URL record for `code`.
pub fn shortlink_key(code: &str) -> String {
    format!("shortlink:{code}:url")
}

/// Key of the `urlhash` record for either a short code or a fingerprint.
pub fn url_hash_key(code_or_fingerprint: &str) -> String {
    format!("urlhash:{code_or_fingerprint}:url")
}

/// Key of the detail record for `code`.
pub fn detail_key(code: &str) -> String {
    format!("shortlink:{code}:detail")
}
