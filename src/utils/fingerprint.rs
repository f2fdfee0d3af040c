//! Content fingerprints used as deduplication keys.

use sha2::{Digest, Sha256};

/// Returns the SHA-256 digest of the exact URL bytes as lowercase hex.
///
/// No normalization is applied: `https://a.com` and `https://a.com/`
/// produce different fingerprints.
pub fn fingerprint(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}
