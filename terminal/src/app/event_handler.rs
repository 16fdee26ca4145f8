//! # Event Handler
//!
//! Applies background task results and timer deliveries to the form. Each
//! accepted event publishes one snapshot; stale deliveries are dropped
//! without touching state.

use std::collections::HashSet;
use std::sync::Arc;

use shared::{SwapExecuteData, WalletDto};
use tokio::time::Instant;

use crate::app::scheduler::TickOutcome;
use crate::app::state::Quote;
use crate::app::{AppEvent, SwapApp};
use crate::core::error::AppError;
use crate::utils::amount::AmountInput;

impl SwapApp {
    /// Apply one background event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PairsLoaded(result) => self.handle_pairs_loaded(result),
            AppEvent::WalletsLoaded(result) => self.handle_wallets_loaded(result),
            AppEvent::DebounceElapsed(seq) => {
                if !self.debouncer.finish(seq) {
                    tracing::trace!(seq, "Ignoring stale debounce delivery");
                    return;
                }
                self.handle_debounce_elapsed();
            }
            AppEvent::CountdownTick(seq) => {
                if !self.countdown.is_current(seq) {
                    tracing::trace!(seq, "Ignoring stale countdown tick");
                    return;
                }
                self.handle_countdown_tick();
            }
            AppEvent::QuoteResult { generation, result } => {
                let current = self.state.read().generation;
                if generation != current {
                    tracing::debug!(generation, current, "Discarding superseded quote response");
                    return;
                }
                self.handle_quote_result(result);
            }
            AppEvent::ExecutionResult(result) => self.handle_execution_result(result),
        }
        self.publish();
    }

    fn handle_pairs_loaded(&mut self, result: Result<Arc<HashSet<String>>, AppError>) {
        match result {
            Ok(pairs) => {
                let needs_quote = {
                    let mut state = self.state.write();
                    state.supported_pairs = Some(pairs);
                    state.quote.is_none() && !state.quote_loading
                };
                let enabled = self.state.read().quote_enabled();
                if !enabled {
                    self.go_idle();
                } else if needs_quote {
                    self.issue_quote();
                }
            }
            Err(e) => {
                self.state.write().inline_error = Some(e.user_message());
            }
        }
    }

    fn handle_wallets_loaded(&mut self, result: Result<Vec<WalletDto>, AppError>) {
        match result {
            Ok(wallets) => self.apply_wallets(wallets),
            Err(e) => {
                let mut state = self.state.write();
                if state.wallets.is_empty() {
                    state.inline_error = Some(e.user_message());
                }
            }
        }
    }

    fn handle_debounce_elapsed(&mut self) {
        {
            let mut state = self.state.write();
            state.quoted_amount = state.amount.clone();
        }
        tracing::debug!(amount = %self.state.read().quoted_amount, "Amount settled");
        self.requote();
    }

    fn handle_countdown_tick(&mut self) {
        let outcome = self.state.write().scheduler.tick(Instant::now());
        match outcome {
            TickOutcome::Counting(_) => {}
            TickOutcome::Expired => self.handle_quote_expired(),
            TickOutcome::Idle => self.countdown.stop(),
        }
    }

    /// Exactly one refresh per expiry, and only for a displayed, still
    /// enabled quote.
    fn handle_quote_expired(&mut self) {
        let refresh = {
            let state = self.state.read();
            state.quote.is_some() && state.quote_enabled()
        };
        if refresh {
            tracing::info!(pair = %self.state.read().pair(), "Quote expired, refreshing");
            self.issue_quote();
        } else {
            tracing::debug!("Quote window lapsed with nothing to refresh");
            self.go_idle();
        }
    }

    fn handle_quote_result(&mut self, result: Result<Quote, AppError>) {
        let mut state = self.state.write();
        state.quote_loading = false;
        match result {
            Ok(quote) => {
                tracing::debug!(
                    pair = %quote.pair,
                    output_amount = %quote.output_amount,
                    generation = state.generation,
                    "Quote displayed"
                );
                state.quote = Some(quote);
                state.quote_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, generation = state.generation, "Quote request failed");
                state.quote_error = Some(e.user_message());
            }
        }
    }

    fn handle_execution_result(&mut self, result: Result<SwapExecuteData, AppError>) {
        match result {
            Ok(receipt) => {
                tracing::info!(reference = ?receipt.reference, status = ?receipt.status, "Swap completed");
                {
                    let mut state = self.state.write();
                    state.executing = false;
                    state.confirming = false;
                    state.execution_error = None;
                    state.amount = AmountInput::empty();
                    state.quoted_amount = AmountInput::empty();
                    state.last_receipt = Some(receipt);
                }
                self.debouncer.cancel();
                self.go_idle();
                crate::app::tasks::wallet::fetch_wallets(self.api.clone(), self.event_tx.clone());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Swap rejected");
                let mut state = self.state.write();
                state.executing = false;
                state.execution_error = Some(e.user_message());
            }
        }
    }
}
