//! Short code allocation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::LinkDetail;
use crate::domain::error::LinkError;
use crate::domain::keys::{
    EMPTY_RECORD_SENTINEL, URL_ID_COUNTER_KEY, detail_key, shortlink_key, url_hash_key,
};
use crate::domain::repositories::KeyValueStore;
use crate::utils::base62;
use crate::utils::fingerprint::fingerprint;
use tracing::{debug, error, warn};

/// Service for shortening URLs and resolving short codes.
///
/// Holds no state besides the shared store handle, so any number of
/// instances and concurrent calls may run against the same backend. The
/// atomic counter increment is the only serialization point.
pub struct LinkService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: KeyValueStore + ?Sized> LinkService<S> {
    /// Creates a new link service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns a short code for `url`, valid for `ttl_minutes`.
    ///
    /// # Deduplication
    ///
    /// If a live fingerprint record exists for the exact URL bytes, its code
    /// is returned without allocating and without refreshing any TTL. The
    /// check is optimistic: two concurrent calls for the same new URL can
    /// both miss and receive distinct codes.
    ///
    /// A failed dedup lookup is logged and treated as a miss. Every later
    /// backend failure is returned as [`LinkError::Backend`].
    ///
    /// # Writes
    ///
    /// The URL record, code-keyed hash record, fingerprint index and detail
    /// record are written in that order with the same TTL. They are not
    /// transactional; a failure leaves earlier writes in place.
    ///
    /// `ttl_minutes` is expected to be positive; the HTTP layer validates it.
    pub async fn shorten(&self, url: &str, ttl_minutes: u64) -> Result<String, LinkError> {
        let hash = fingerprint(url);

        if let Some(code) = self.lookup_fingerprint(&hash).await {
            debug!(code = %code, "Dedup hit");
            metrics::counter!("shortener_dedup_hits_total").increment(1);
            return Ok(code);
        }

        let id = self.store.increment(URL_ID_COUNTER_KEY).await.map_err(|e| {
            error!(error = %e, "Failed to allocate short code id");
            LinkError::from(e)
        })?;
        let code = base62::encode(id);
        debug!(id, code = %code, "Allocated short code");

        let ttl = Duration::from_secs(ttl_minutes.saturating_mul(60));
        let detail = serde_json::to_string(&LinkDetail::new(url, ttl_minutes)).map_err(|e| {
            LinkError::InvalidRecord {
                code: code.clone(),
                reason: e.to_string(),
            }
        })?;

        let writes = [
            (shortlink_key(&code), url),
            (url_hash_key(&code), url),
            (url_hash_key(&hash), code.as_str()),
            (detail_key(&code), detail.as_str()),
        ];
        for (key, value) in &writes {
            self.store
                .set_with_ttl(key, value, ttl)
                .await
                .map_err(|e| {
                    error!(code = %code, key = %key, error = %e, "Partial write while shortening");
                    LinkError::from(e)
                })?;
        }

        metrics::counter!("shortener_links_created_total").increment(1);
        Ok(code)
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code was never issued or has
    /// expired, and [`LinkError::Backend`] on backend failures.
    pub async fn unshorten(&self, code: &str) -> Result<String, LinkError> {
        self.store
            .get_string(&shortlink_key(code))
            .await?
            .ok_or_else(|| LinkError::not_found(code))
    }

    /// Returns the detail record for a short code.
    ///
    /// The detail record may be missing even when the URL record exists
    /// (partial writes), in which case this returns [`LinkError::NotFound`].
    ///
    /// # Errors
    ///
    /// Same split as [`Self::unshorten`], plus [`LinkError::InvalidRecord`]
    /// if the stored JSON cannot be parsed.
    pub async fn shortlink_info(&self, code: &str) -> Result<LinkDetail, LinkError> {
        let raw = self
            .store
            .get_string(&detail_key(code))
            .await?
            .ok_or_else(|| LinkError::not_found(code))?;

        serde_json::from_str(&raw).map_err(|e| LinkError::InvalidRecord {
            code: code.to_string(),
            reason: e.to_string(),
        })
    }

    /// Checks backend connectivity.
    pub async fn health_check(&self) -> bool {
        self.store.ping().await.is_ok()
    }

    async fn lookup_fingerprint(&self, hash: &str) -> Option<String> {
        match self.store.get_string(&url_hash_key(hash)).await {
            Ok(Some(code)) if !code.is_empty() && code != EMPTY_RECORD_SENTINEL => Some(code),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Dedup lookup failed, allocating a new code");
                None
            }
        }
    }
}
