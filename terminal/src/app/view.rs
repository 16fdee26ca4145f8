//! # Form Snapshots
//!
//! [`SwapView`] is the immutable, render-ready picture of the form that the
//! controller publishes after every transition. Observers never read
//! [`SwapState`] directly, so a snapshot always pairs a quote with the
//! deadline that was set when it was requested.

use rust_decimal::Decimal;

use crate::app::scheduler::QuotePhase;
use crate::app::state::{Quote, SwapState};
use crate::core::error::AppError;
use crate::utils::amount::{display_decimals, format_amount};

/// Why the confirm action is (or is not) available. Evaluated top to bottom;
/// the first failing condition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    Executing,
    SameCurrency,
    PairNotSupported,
    EnterAmount,
    InsufficientBalance,
    FetchingQuote,
    QuoteExpired,
    Ready,
}

impl SubmitGate {
    pub fn evaluate(state: &SwapState) -> Self {
        if state.executing {
            return SubmitGate::Executing;
        }
        if state.same_currency() {
            return SubmitGate::SameCurrency;
        }
        if !state.pair_supported() {
            return SubmitGate::PairNotSupported;
        }

        let amount = match state.amount.to_decimal() {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return SubmitGate::EnterAmount,
        };
        if amount > state.available_balance().unwrap_or(Decimal::ZERO) {
            return SubmitGate::InsufficientBalance;
        }

        if state.quote_loading || !state.amount_settled() {
            return SubmitGate::FetchingQuote;
        }
        if state.scheduler.time_remaining() == 0 && state.quote.is_some() {
            return SubmitGate::QuoteExpired;
        }
        if !quote_matches(state) {
            return SubmitGate::FetchingQuote;
        }

        SubmitGate::Ready
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            SubmitGate::Executing => "Swapping...",
            SubmitGate::SameCurrency => "Select Different Currencies",
            SubmitGate::PairNotSupported => "Pair Not Supported",
            SubmitGate::EnterAmount => "Enter Amount",
            SubmitGate::InsufficientBalance => "Insufficient Balance",
            SubmitGate::FetchingQuote => "Fetching Quote...",
            SubmitGate::QuoteExpired => "Quote Expired",
            SubmitGate::Ready => "Swap",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SubmitGate::Ready)
    }

    /// The error a submission attempt reports while this gate is closed.
    pub fn to_error(&self) -> Option<AppError> {
        let message = match self {
            SubmitGate::Ready => return None,
            SubmitGate::QuoteExpired => return Some(AppError::StaleQuote),
            SubmitGate::Executing => "A swap is already in progress",
            SubmitGate::SameCurrency => "Cannot swap a currency for itself",
            SubmitGate::PairNotSupported => "Pair Not Supported",
            SubmitGate::EnterAmount => "Enter an amount",
            SubmitGate::InsufficientBalance => "Insufficient balance",
            SubmitGate::FetchingQuote => "Please wait for the quote",
        };
        Some(AppError::Validation(message.to_string()))
    }
}

/// The displayed quote belongs to the current pair and amount.
fn quote_matches(state: &SwapState) -> bool {
    state.quote.as_ref().is_some_and(|quote| {
        quote.pair == state.pair() && quote.input_amount.to_decimal() == state.amount.to_decimal()
    })
}

/// Render-ready form snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SwapView {
    pub sell_currency: String,
    pub buy_currency: String,
    pub pair: String,
    /// Sell field contents (canonical, no separators)
    pub amount: String,
    /// Sell amount with thousands separators
    pub amount_display: String,
    /// Buy field contents; `"0"` whenever no quote may be shown
    pub output_display: String,
    pub price_display: Option<String>,
    pub fee_display: Option<String>,
    pub spread_display: Option<String>,
    pub time_remaining: u64,
    pub phase: QuotePhase,
    pub quote_loading: bool,
    pub quote_error: Option<String>,
    pub gate: SubmitGate,
    pub submit_label: String,
    pub can_submit: bool,
    pub sell_balance: Option<String>,
    /// Half/max shortcuts have a non-zero balance to work from
    pub shortcuts_enabled: bool,
    pub inline_error: Option<String>,
    pub confirming: bool,
    pub executing: bool,
    pub execution_error: Option<String>,
    pub last_reference: Option<String>,
}

impl SwapView {
    pub fn from_state(state: &SwapState) -> Self {
        let gate = SubmitGate::evaluate(state);
        let buy_decimals = display_decimals(&state.buy_currency);
        let sell_decimals = display_decimals(&state.sell_currency);

        let shown = state
            .quote
            .as_ref()
            .filter(|quote| state.quote_enabled() && quote.pair == state.pair());

        let output_display = shown
            .map(|quote| format_decimal(quote.output_amount, buy_decimals))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "0".to_string());

        let available = state.available_balance();

        Self {
            sell_currency: state.sell_currency.clone(),
            buy_currency: state.buy_currency.clone(),
            pair: state.pair(),
            amount: state.amount.as_str().to_string(),
            amount_display: format_amount(state.amount.as_str(), sell_decimals),
            output_display,
            price_display: shown.map(|q| price_line(q, buy_decimals)),
            fee_display: shown.map(|q| fee_line(q, sell_decimals)),
            spread_display: shown.map(|q| format_decimal(q.spread, buy_decimals)),
            time_remaining: state.scheduler.time_remaining(),
            phase: state.scheduler.phase(),
            quote_loading: state.quote_loading,
            quote_error: state.quote_error.clone(),
            gate,
            submit_label: gate.label().to_string(),
            can_submit: gate.is_ready(),
            sell_balance: available.map(|b| format_decimal(b, sell_decimals)),
            shortcuts_enabled: available.is_some_and(|b| b > Decimal::ZERO),
            inline_error: state.inline_error.clone(),
            confirming: state.confirming,
            executing: state.executing,
            execution_error: state.execution_error.clone(),
            last_reference: state
                .last_receipt
                .as_ref()
                .and_then(|receipt| receipt.reference.clone()),
        }
    }
}

fn format_decimal(value: Decimal, max_decimals: usize) -> String {
    format_amount(&value.normalize().to_string(), max_decimals)
}

fn price_line(quote: &Quote, decimals: usize) -> String {
    let (base, counter) = shared::split_pair(&quote.pair).unwrap_or(("", ""));
    format!("1 {} = {} {}", base, format_decimal(quote.price, decimals), counter)
}

fn fee_line(quote: &Quote, decimals: usize) -> String {
    format!(
        "{} ({}%)",
        format_decimal(quote.trading_fee, decimals),
        quote.trading_fee_percent
    )
}
