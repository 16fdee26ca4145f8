//! # Wallet and Pair Tasks
//!
//! Background loads of the read-only form inputs: wallet balances and the
//! supported-pairs list.

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use tokio::spawn;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::app::events::AppEvent;
use crate::app::timers::TimerHandle;
use crate::core::service::SwapApi;
use crate::services::pairs::PairsCache;

/// Fetch wallet balances once.
pub(crate) fn fetch_wallets(api: Arc<dyn SwapApi>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api.get_wallets().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Wallet fetch failed");
        }
        let _ = event_tx.send(AppEvent::WalletsLoaded(result)).await;
    });
}

/// Load supported pairs, from cache unless `force` is set.
pub(crate) fn load_pairs(pairs: Arc<PairsCache>, event_tx: Sender<AppEvent>, force: bool) {
    spawn(async move {
        let result = if force {
            pairs.refresh().await
        } else {
            pairs.get().await
        };
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to load supported pairs");
        }
        let _ = event_tx.send(AppEvent::PairsLoaded(result)).await;
    });
}

/// Refetch wallet balances every `every` until the handle is dropped.
pub(crate) fn poll_wallets(
    api: Arc<dyn SwapApi>,
    event_tx: Sender<AppEvent>,
    every: Duration,
) -> TimerHandle {
    TimerHandle::spawn(async move {
        let mut ticks = interval_at(Instant::now() + every, every);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            let result = api.get_wallets().await;
            if event_tx.send(AppEvent::WalletsLoaded(result)).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::{ApiCall, MockSwapApi};

    #[tokio::test(start_paused = true)]
    async fn test_poll_wallets_fetches_each_interval() {
        let api = Arc::new(MockSwapApi::new());
        let (tx, rx) = async_channel::unbounded();

        let handle = poll_wallets(api.clone(), tx, Duration::from_secs(30));
        for _ in 0..2 {
            assert!(matches!(rx.recv().await.unwrap(), AppEvent::WalletsLoaded(Ok(_))));
        }
        drop(handle);

        let fetches = api.calls().iter().filter(|c| **c == ApiCall::Wallets).count();
        assert_eq!(fetches, 2);
    }

    #[tokio::test]
    async fn test_load_pairs_sends_codes() {
        let api = Arc::new(MockSwapApi::new());
        let cache = Arc::new(PairsCache::new(api, Duration::from_secs(300)));
        let (tx, rx) = async_channel::unbounded();

        load_pairs(cache, tx, false);
        match rx.recv().await.unwrap() {
            AppEvent::PairsLoaded(Ok(pairs)) => assert!(pairs.contains("USDT-NGN")),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
