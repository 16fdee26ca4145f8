//! # Swap Form Controller
//!
//! [`SwapApp`] owns one swap form session and coordinates user actions,
//! background tasks, timers and published snapshots.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Driver (stdin loop, UI, tests)                              │
//! │   - input_amount() / select_*() / submit_pin() ...           │
//! │   - handle_next_event().await or on_tick()                   │
//! └────────────┬──────────────────────────────▲──────────────────┘
//!              │ method calls                 │ watch::Receiver<SwapView>
//! ┌────────────▼──────────────────────────────┴──────────────────┐
//! │  SwapApp                                                     │
//! │   - state: Arc<RwLock<SwapState>>                            │
//! │   - Debouncer, Countdown (abort on drop)                     │
//! │   - generation counter on every display-bound request        │
//! └────────────┬──────────────────────────────▲──────────────────┘
//!              │ tokio::spawn                 │ async_channel (unbounded)
//! ┌────────────▼──────────────────────────────┴──────────────────┐
//! │  Tasks: fetch_quote, execute_swap, fetch_wallets, load_pairs │
//! │  Timers: DebounceElapsed(seq), CountdownTick(seq)            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quote lifecycle
//!
//! - An amount edit restarts the debounce; when it elapses the amount becomes
//!   the quoted amount and a request is issued if the pair is enabled.
//! - A pair change re-quotes immediately.
//! - Every issuance bumps the generation, opens a fresh validity window and
//!   restarts the one-second countdown anchored at that instant.
//! - At zero the controller issues exactly one automatic refresh when a quote
//!   is displayed and still enabled, otherwise it returns to idle.
//!
//! The write lock is taken per transition and released before the snapshot
//! is published; the lock is never held across an await.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swap_terminal::app::SwapApp;
//! use swap_terminal::core::ClientConfig;
//! use swap_terminal::services::api::ApiClient;
//!
//! # async fn demo() -> swap_terminal::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api = Arc::new(ApiClient::new(&config)?);
//! let mut app = SwapApp::new(api, config);
//! app.load();
//!
//! let mut views = app.subscribe();
//! app.input_amount("0.01");
//! while app.handle_next_event().await {
//!     let view = views.borrow_and_update().clone();
//!     println!("{} -> {} ({}s)", view.amount, view.output_display, view.time_remaining);
//! }
//! # Ok(())
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
pub mod scheduler;
mod state;
mod tasks;
pub mod timers;
mod view;


pub use events::AppEvent;
pub use scheduler::{ExpiryScheduler, QuotePhase, TickOutcome};
pub use state::{Quote, SwapState, Wallet};
pub use view::{SubmitGate, SwapView};

use std::future::Future;
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::core::config::ClientConfig;
use crate::core::service::SwapApi;
use crate::services::pairs::PairsCache;
use timers::{Countdown, Debouncer, TimerHandle};

const TICK_PERIOD: std::time::Duration = std::time::Duration::from_secs(1);

/// Swap form controller.
pub struct SwapApp {
    /// Form state. Read it through [`SwapApp::view`] or a subscription;
    /// direct access is for tests and diagnostics.
    pub state: Arc<RwLock<SwapState>>,

    /// Results from background tasks and timers.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    api: Arc<dyn SwapApi>,
    pairs: Arc<PairsCache>,
    debouncer: Debouncer,
    countdown: Countdown,
    wallet_poller: Option<TimerHandle>,
    view_tx: watch::Sender<SwapView>,
    config: ClientConfig,
}

impl SwapApp {
    /// Create a controller with the configured default pair and no data
    /// loaded. Call [`SwapApp::load`] to fetch pairs and wallets.
    pub fn new(api: Arc<dyn SwapApi>, config: ClientConfig) -> Self {
        let state = SwapState::new(
            &config.default_sell,
            &config.default_buy,
            config.quote_validity,
        );
        let (event_tx, event_rx) = unbounded();
        let (view_tx, _) = watch::channel(SwapView::from_state(&state));
        let pairs = Arc::new(PairsCache::new(api.clone(), config.pairs_ttl));

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            api,
            pairs,
            debouncer: Debouncer::new(config.debounce),
            countdown: Countdown::new(TICK_PERIOD),
            wallet_poller: None,
            view_tx,
            config,
        }
    }

    /// Start the form-load fetches: supported pairs, wallets and, when
    /// configured, periodic wallet polling.
    pub fn load(&mut self) {
        tasks::wallet::load_pairs(self.pairs.clone(), self.event_tx.clone(), false);
        tasks::wallet::fetch_wallets(self.api.clone(), self.event_tx.clone());

        if let Some(every) = self.config.wallet_poll {
            self.wallet_poller = Some(tasks::wallet::poll_wallets(
                self.api.clone(),
                self.event_tx.clone(),
                every,
            ));
        }

        tracing::info!(
            sell = %self.config.default_sell,
            buy = %self.config.default_buy,
            wallet_poll = ?self.config.wallet_poll,
            "Swap form loading"
        );
    }

    /// A second handle on the event channel, for `select!` loops.
    pub fn events(&self) -> Receiver<AppEvent> {
        self.event_rx.clone()
    }

    /// Wait for and process one background event. Returns false once the
    /// channel is closed.
    pub async fn handle_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Process every pending event without waiting. Returns how many ran.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::trace!(processed, "on_tick: processed events");
        }
        processed
    }

    /// Process events until `shutdown` resolves.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                received = self.event_rx.recv() => match received {
                    Ok(event) => self.handle_event(event),
                    Err(_) => break,
                },
            }
        }
        tracing::info!("Swap form controller stopped");
    }

    /// Snapshot stream; the receiver starts at the current view.
    pub fn subscribe(&self) -> watch::Receiver<SwapView> {
        self.view_tx.subscribe()
    }

    /// Latest published snapshot.
    pub fn view(&self) -> SwapView {
        self.view_tx.borrow().clone()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Publish a snapshot of the current state.
    pub(crate) fn publish(&self) {
        let view = SwapView::from_state(&self.state.read());
        self.view_tx.send_replace(view);
    }

    /// Issue a display-bound request for the current pair and quoted amount,
    /// opening a fresh validity window anchored at issuance.
    pub(crate) fn issue_quote(&mut self) {
        let now = Instant::now();
        let (generation, pair, amount) = {
            let mut state = self.state.write();
            let pair = state.pair();
            state.generation += 1;
            state.quote_loading = true;
            state.quote_error = None;
            if state.quote.as_ref().is_some_and(|quote| quote.pair != pair) {
                state.quote = None;
            }
            state.scheduler.start(now);
            (state.generation, pair, state.quoted_amount.clone())
        };

        self.countdown.restart(now, self.event_tx.clone());
        tasks::swap::fetch_quote(
            self.api.clone(),
            self.event_tx.clone(),
            generation,
            pair,
            amount,
        );
    }

    /// Leave the quote cycle: drop the displayed quote, invalidate in-flight
    /// requests and stop counting.
    pub(crate) fn go_idle(&mut self) {
        {
            let mut state = self.state.write();
            state.generation += 1;
            state.quote = None;
            state.quote_loading = false;
            state.quote_error = None;
            state.scheduler.reset();
        }
        self.countdown.stop();
    }

    /// Quote the current key if it is enabled, otherwise go idle.
    pub(crate) fn requote(&mut self) {
        let enabled = self.state.read().quote_enabled();
        if enabled {
            self.issue_quote();
        } else {
            self.go_idle();
        }
    }
}
