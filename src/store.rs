
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::cache::StoreCacheHandling;
use crate::config::Retry;
use crate::metadata::{self, MetadataError};
use crate::models::game::AppId;
use crate::models::steam::StoreAppDetails;
use crate::steam::conv;
use crate::steam::{StoreError, StoreOriginHandling};

/// Resolves store details cache-first, falling back to the live store API and writing what it
/// finds there back to the cache.
pub struct StoreDetailsFetcher {
    cache: Box<dyn StoreCacheHandling + Send + Sync>,
    origin: Arc<dyn StoreOriginHandling + Send + Sync>,
    retry: Retry,
    strict: bool,
}

impl StoreDetailsFetcher {
    pub fn new(
        cache: Box<dyn StoreCacheHandling + Send + Sync>,
        origin: Box<dyn StoreOriginHandling + Send + Sync>,
        retry: Retry,
        strict: bool,
    ) -> StoreDetailsFetcher {
        StoreDetailsFetcher { cache, origin: Arc::from(origin), retry, strict }
    }

    fn get_cached(&self, id: AppId) -> Option<String> {
        match self.cache.get_store_data(id) {
            Ok(raw) if !raw.is_empty() => Some(raw),
            Ok(_) => None,
            Err(e) => {
                error!(app_id = %id, error = %e, "Failed to get steam store cache data");
                None
            }
        }
    }

    // The request runs on the blocking pool so cancellation doesn't have to wait for it; an
    // abandoned request finishes in the background and its result is dropped.
    async fn request_origin(&self, id: AppId, cancel: &CancellationToken) -> metadata::Result<String> {
        let origin = Arc::clone(&self.origin);
        let req = tokio::task::spawn_blocking(move || origin.get_raw_app_details(id));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(MetadataError::Cancelled),
            res = req => Ok(res.map_err(StoreError::from)??),
        }
    }

    // Steam answers 429 when we make too many requests, so back off and try again a bounded
    // number of times. Ok(None) means the attempts ran out.
    async fn get_origin(&self, id: AppId, cancel: &CancellationToken) -> metadata::Result<Option<String>> {
        for attempt in 1..=self.retry.max_attempts {
            if cancel.is_cancelled() {
                return Err(MetadataError::Cancelled);
            }

            match self.request_origin(id, cancel).await {
                Ok(raw) => {
                    debug!(app_id = %id, attempt, "Steam store data got from live server");
                    if let Err(e) = self.cache.post_store_data(id, &raw) {
                        error!(app_id = %id, error = %e, "Failed to post steam store data to cache");
                    }
                    return Ok(Some(raw));
                }
                Err(MetadataError::Store(StoreError::RateLimited)) => {
                    if attempt == self.retry.max_attempts {
                        break;
                    }

                    warn!(app_id = %id, attempt, "Rate limited by steam store, backing off");
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(MetadataError::Cancelled),
                        _ = tokio::time::sleep(self.retry.backoff()) => {}
                    }
                }
                Err(e) => return Err(e),
            }
        }

        error!(app_id = %id, attempts = self.retry.max_attempts, "Reached download timeout for steam store game");
        Ok(None)
    }

    async fn get_raw(&self, id: AppId, cancel: &CancellationToken) -> metadata::Result<Option<String>> {
        if let Some(raw) = self.get_cached(id) {
            debug!(app_id = %id, "Steam store data got from cache");
            return Ok(Some(raw));
        }

        self.get_origin(id, cancel).await
    }

    async fn try_fetch(&self, id: AppId, cancel: &CancellationToken) -> metadata::Result<Option<StoreAppDetails>> {
        match self.get_raw(id, cancel).await? {
            Some(raw) if !raw.is_empty() => Ok(conv::parse_store_data(id, &raw).map_err(StoreError::from)?),
            _ => Ok(None),
        }
    }

    /// Store details for `id`, or None if they are unavailable.
    ///
    /// Outside strict mode only cancellation is reported as an error; everything else is logged
    /// and degrades to None.
    pub async fn fetch(&self, id: AppId, cancel: &CancellationToken) -> metadata::Result<Option<StoreAppDetails>> {
        match self.try_fetch(id, cancel).await {
            Ok(details) => Ok(details),
            Err(MetadataError::Cancelled) => Err(MetadataError::Cancelled),
            Err(e) if self.strict => Err(e),
            Err(e) => {
                error!(app_id = %id, error = %e, "Failed to download steam store metadata");
                Ok(None)
            }
        }
    }
}
