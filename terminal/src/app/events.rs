//! # Application Events
//!
//! Event types for communication between background tasks (network calls,
//! timers) and the controller.

use std::collections::HashSet;
use std::sync::Arc;

use shared::{SwapExecuteData, WalletDto};

use crate::app::state::Quote;
use crate::core::error::AppError;

/// Async task results and timer deliveries sent to the controller
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Supported pairs fetched (or served from cache)
    PairsLoaded(Result<Arc<HashSet<String>>, AppError>),
    /// Wallet balances fetched
    WalletsLoaded(Result<Vec<WalletDto>, AppError>),
    /// Amount-field quiet period elapsed, tagged with the debounce sequence
    DebounceElapsed(u64),
    /// One-second countdown tick, tagged with the ticker sequence
    CountdownTick(u64),
    /// Display-bound quote request finished
    QuoteResult {
        generation: u64,
        result: Result<Quote, AppError>,
    },
    /// Execute-time quote check plus swap call finished
    ExecutionResult(Result<SwapExecuteData, AppError>),
}
