//! # Common Error Types
//!
//! Consolidated error handling for the swap client.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure the swap form can surface. None of them is fatal: each one is local
//! to the form and recoverable by editing input or retrying.
//!
//! ## Error Categories
//!
//! - **Validation**: local checks, no network call made (empty/zero amount,
//!   amount above balance, identical currencies, unsupported pair, bad PIN)
//! - **QuoteUnavailable**: the backend rejected a `calculate` call
//! - **Execution**: the backend rejected the swap itself; message is verbatim
//! - **StaleQuote**: submit attempted while the countdown sits at zero
//! - **Api**: transport or decoding failures
//! - **Config**: invalid environment configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use swap_terminal::core::error::AppError;
//!
//! fn require_amount(amount: &str) -> Result<(), AppError> {
//!     if amount.is_empty() {
//!         return Err(AppError::Validation("Enter an amount".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Application-wide error type for the swap client.
///
/// # Example
///
/// ```rust
/// use swap_terminal::core::error::AppError;
///
/// let err = AppError::QuoteUnavailable("Pair Not Supported".to_string());
/// assert_eq!(err.to_string(), "Quote unavailable: Pair Not Supported");
/// assert_eq!(
///     AppError::StaleQuote.to_string(),
///     "Quote has expired. Please wait for a new quote"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Local input validation failure. No backend call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The pricing endpoint refused to quote the pair/amount combination.
    #[error("Quote unavailable: {0}")]
    QuoteUnavailable(String),

    /// The swap endpoint rejected the execution (expired price, PIN mismatch,
    /// funds found insufficient server-side). Shown to the user verbatim.
    #[error("{0}")]
    Execution(String),

    /// Client-side refusal to submit against a quote whose window has lapsed.
    #[error("Quote has expired. Please wait for a new quote")]
    StaleQuote,

    /// Backend API communication error (network, HTTP status, JSON).
    #[error("API error: {0}")]
    Api(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Message suitable for inline display next to the form.
    ///
    /// Execution and stale-quote errors already read as sentences; the other
    /// variants drop their category prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::QuoteUnavailable(msg)
            | AppError::Execution(msg)
            | AppError::Api(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::StaleQuote => self.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Api(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

impl From<crate::utils::amount::AmountError> for AppError {
    fn from(err: crate::utils::amount::AmountError) -> Self {
        AppError::Validation(err.to_string())
    }
}
