//! # Swap Form State
//!
//! All state owned by one swap form session: the currency selection, the
//! amount being edited, the displayed quote and its validity window, and the
//! confirmation/execution flags. Nothing here outlives the session.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::{SwapExecuteData, SwapQuoteData, SwapSide, WalletDto};

use crate::app::scheduler::ExpiryScheduler;
use crate::core::error::{AppError, Result};
use crate::utils::amount::AmountInput;

/// One priced exchange offer. Superseded by the next quote, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub pair: String,
    pub side: SwapSide,
    pub input_amount: AmountInput,
    pub output_amount: Decimal,
    pub price: Decimal,
    pub trading_fee: Decimal,
    pub trading_fee_percent: f64,
    pub base_amount: Decimal,
    pub spread: Decimal,
    /// Wall-clock issuance time of the request that produced this quote
    pub issued_at: DateTime<Utc>,
}

impl Quote {
    /// Build from the calculate payload. Malformed decimals are an API error.
    pub fn from_data(
        pair: &str,
        side: SwapSide,
        input_amount: AmountInput,
        data: SwapQuoteData,
        issued_at: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            pair: pair.to_string(),
            side,
            input_amount,
            output_amount: parse_decimal("outputAmount", &data.output_amount)?,
            price: parse_decimal("price", &data.price)?,
            trading_fee: parse_decimal("tradingFee", &data.trading_fee)?,
            trading_fee_percent: data.trading_fee_percent,
            base_amount: parse_decimal("baseAmount", &data.base_amount)?,
            spread: parse_decimal("spread", &data.spread)?,
            issued_at,
        })
    }

    /// Whether the validity window measured from issuance has lapsed.
    pub fn is_expired_at(&self, now: DateTime<Utc>, validity: Duration) -> bool {
        match chrono::Duration::from_std(validity) {
            Ok(window) => now >= self.issued_at + window,
            Err(_) => false,
        }
    }
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|e| AppError::Api(format!("Invalid {} '{}': {}", field, raw, e)))
}

/// Read-only wallet balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub currency: String,
    pub available: Decimal,
    pub locked: Decimal,
}

impl TryFrom<WalletDto> for Wallet {
    type Error = AppError;

    fn try_from(dto: WalletDto) -> Result<Self> {
        Ok(Self {
            currency: dto.currency.to_uppercase(),
            available: parse_decimal("availableBalance", &dto.available_balance)?,
            locked: parse_decimal("lockedBalance", &dto.locked_balance)?,
        })
    }
}

/// Swap form session state
#[derive(Debug, Clone)]
pub struct SwapState {
    /// Currency being disposed of
    pub sell_currency: String,
    /// Currency being acquired
    pub buy_currency: String,
    /// Live amount, updated on every accepted keystroke
    pub amount: AmountInput,
    /// Amount quotes are keyed on (the live amount after the debounce)
    pub quoted_amount: AmountInput,
    /// Currently displayed quote
    pub quote: Option<Quote>,
    /// A display-bound quote request is in flight
    pub quote_loading: bool,
    /// Last quote failure, shown in place of the button label
    pub quote_error: Option<String>,
    /// Generation of the latest display-bound request
    pub generation: u64,
    /// Validity window of the displayed quote
    pub scheduler: ExpiryScheduler,
    /// Supported pair codes, `None` until loaded
    pub supported_pairs: Option<Arc<HashSet<String>>>,
    /// Wallet balances, shared read-only
    pub wallets: Vec<Wallet>,
    /// PIN confirmation step is open
    pub confirming: bool,
    /// Execution call in flight
    pub executing: bool,
    /// Error shown inside the confirmation step
    pub execution_error: Option<String>,
    /// Inline form message (validation, load failures)
    pub inline_error: Option<String>,
    /// Receipt of the last successful swap
    pub last_receipt: Option<SwapExecuteData>,
}

impl SwapState {
    pub fn new(sell: &str, buy: &str, quote_validity: Duration) -> Self {
        Self {
            sell_currency: sell.to_uppercase(),
            buy_currency: buy.to_uppercase(),
            amount: AmountInput::empty(),
            quoted_amount: AmountInput::empty(),
            quote: None,
            quote_loading: false,
            quote_error: None,
            generation: 0,
            scheduler: ExpiryScheduler::new(quote_validity),
            supported_pairs: None,
            wallets: Vec::new(),
            confirming: false,
            executing: false,
            execution_error: None,
            inline_error: None,
            last_receipt: None,
        }
    }

    /// Ordered pair code for the current selection, e.g. `BTC-NGN`
    pub fn pair(&self) -> String {
        shared::pair_code(&self.sell_currency, &self.buy_currency)
    }

    pub fn same_currency(&self) -> bool {
        self.sell_currency.eq_ignore_ascii_case(&self.buy_currency)
    }

    pub fn pair_supported(&self) -> bool {
        let pair = self.pair();
        !pair.is_empty()
            && !self.same_currency()
            && self
                .supported_pairs
                .as_ref()
                .is_some_and(|pairs| pairs.contains(&pair))
    }

    /// Enablement predicate: a quote may be requested for the debounced amount.
    pub fn quote_enabled(&self) -> bool {
        self.pair_supported() && self.quoted_amount.is_positive()
    }

    /// The live amount has caught up with the amount being quoted.
    pub fn amount_settled(&self) -> bool {
        self.amount.to_decimal() == self.quoted_amount.to_decimal()
    }

    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|w| w.currency.eq_ignore_ascii_case(currency))
    }

    pub fn holds(&self, currency: &str) -> bool {
        self.wallet(currency).is_some()
    }

    /// Available balance of the sell currency
    pub fn available_balance(&self) -> Option<Decimal> {
        self.wallet(&self.sell_currency).map(|w| w.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::amount::parse_input;
    use rust_decimal_macros::dec;

    fn quote_data() -> SwapQuoteData {
        SwapQuoteData {
            output_amount: "950000".to_string(),
            price: "95000000".to_string(),
            trading_fee: "0.00001".to_string(),
            trading_fee_percent: 0.1,
            base_amount: "0.01".to_string(),
            spread: "1200".to_string(),
        }
    }

    fn state_with_pairs(pairs: &[&str]) -> SwapState {
        let mut state = SwapState::new("btc", "ngn", Duration::from_secs(15));
        state.supported_pairs = Some(Arc::new(pairs.iter().map(|p| p.to_string()).collect()));
        state
    }

    #[test]
    fn test_quote_from_data() {
        let amount = parse_input("0.01").unwrap();
        let quote =
            Quote::from_data("BTC-NGN", SwapSide::Sell, amount, quote_data(), Utc::now()).unwrap();
        assert_eq!(quote.output_amount, dec!(950000));
        assert_eq!(quote.trading_fee, dec!(0.00001));
    }

    #[test]
    fn test_quote_rejects_malformed_decimal() {
        let mut data = quote_data();
        data.price = "n/a".to_string();
        let err = Quote::from_data("BTC-NGN", SwapSide::Sell, AmountInput::empty(), data, Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
    }

    #[test]
    fn test_quote_expiry_is_measured_from_issuance() {
        let issued = Utc::now();
        let quote =
            Quote::from_data("BTC-NGN", SwapSide::Sell, AmountInput::empty(), quote_data(), issued)
                .unwrap();
        let window = Duration::from_secs(15);
        assert!(!quote.is_expired_at(issued + chrono::Duration::seconds(14), window));
        assert!(quote.is_expired_at(issued + chrono::Duration::seconds(15), window));
    }

    #[test]
    fn test_enablement_predicate() {
        let mut state = state_with_pairs(&["BTC-NGN"]);
        assert_eq!(state.pair(), "BTC-NGN");
        assert!(!state.quote_enabled(), "empty amount");

        state.quoted_amount = parse_input("0.01").unwrap();
        assert!(state.quote_enabled());

        state.quoted_amount = parse_input("0").unwrap();
        assert!(!state.quote_enabled(), "zero amount");

        state.quoted_amount = parse_input("0.01").unwrap();
        state.buy_currency = "ETH".to_string();
        assert!(!state.quote_enabled(), "unsupported pair");

        state.buy_currency = "BTC".to_string();
        assert!(!state.quote_enabled(), "identical currencies");
    }

    #[test]
    fn test_pairs_not_loaded_disables_quotes() {
        let mut state = SwapState::new("BTC", "NGN", Duration::from_secs(15));
        state.quoted_amount = parse_input("1").unwrap();
        assert!(!state.quote_enabled());
    }

    #[test]
    fn test_wallet_conversion() {
        let wallet = Wallet::try_from(WalletDto {
            currency: "btc".to_string(),
            available_balance: "2.34560000".to_string(),
            locked_balance: "0".to_string(),
        })
        .unwrap();
        assert_eq!(wallet.currency, "BTC");
        assert_eq!(wallet.available, dec!(2.3456));
    }
}
