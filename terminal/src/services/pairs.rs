//! # Supported Pairs Cache
//!
//! The pair list changes rarely, so it is fetched once and reused until its
//! TTL lapses. A failed refresh falls back to the stale list when there is
//! one.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::core::error::Result;
use crate::core::service::SwapApi;

struct CachedPairs {
    pairs: Arc<HashSet<String>>,
    fetched_at: Instant,
}

/// Thread-safe cache of supported pair codes.
pub struct PairsCache {
    api: Arc<dyn SwapApi>,
    ttl: Duration,
    entry: RwLock<Option<CachedPairs>>,
}

impl PairsCache {
    pub fn new(api: Arc<dyn SwapApi>, ttl: Duration) -> Self {
        Self {
            api,
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Cached pairs while fresh, otherwise a refetch.
    pub async fn get(&self) -> Result<Arc<HashSet<String>>> {
        {
            let entry = self.entry.read().await;
            if let Some(cached) = entry.as_ref() {
                if cached.fetched_at.elapsed() < self.ttl {
                    debug!(count = cached.pairs.len(), "Pairs cache hit");
                    return Ok(cached.pairs.clone());
                }
                debug!("Pairs cache expired");
            }
        }

        self.refresh().await
    }

    /// Fetch from the backend and replace the cached list.
    pub async fn refresh(&self) -> Result<Arc<HashSet<String>>> {
        match self.api.get_swap_pairs().await {
            Ok(codes) => {
                let pairs: Arc<HashSet<String>> = Arc::new(
                    codes
                        .iter()
                        .map(|code| code.trim().to_uppercase())
                        .filter(|code| !code.is_empty())
                        .collect(),
                );
                info!(count = pairs.len(), "Supported pairs loaded");

                let mut entry = self.entry.write().await;
                *entry = Some(CachedPairs {
                    pairs: pairs.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(pairs)
            }
            Err(e) => {
                let entry = self.entry.read().await;
                match entry.as_ref() {
                    Some(stale) => {
                        warn!(error = %e, "Pairs refresh failed, serving stale list");
                        Ok(stale.pairs.clone())
                    }
                    None => Err(e),
                }
            }
        }
    }

    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}
