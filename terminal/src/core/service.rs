//! # Service Traits
//!
//! Traits for dependency injection, so the swap controller can run against the
//! real REST client or an in-memory fake in tests.

use async_trait::async_trait;
use shared::{SwapExecuteData, SwapQuoteData, SwapSide, WalletDto};

use super::error::Result;

/// Exchange API operations used by the swap form.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use swap_terminal::core::service::SwapApi;
/// use swap_terminal::core::config::ClientConfig;
/// use swap_terminal::services::api::ApiClient;
///
/// # fn demo() -> swap_terminal::Result<()> {
/// let api: Arc<dyn SwapApi> = Arc::new(ApiClient::new(&ClientConfig::default())?);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait SwapApi: Send + Sync {
    /// Supported pair codes, e.g. `["BTC-NGN", "USDT-NGN"]`
    async fn get_swap_pairs(&self) -> Result<Vec<String>>;

    /// Price `amount` of the pair for the given side
    async fn calculate_swap(
        &self,
        pair: &str,
        side: SwapSide,
        amount: &str,
    ) -> Result<SwapQuoteData>;

    /// Execute the swap, authorised by the user's 4-digit PIN
    async fn execute_swap(
        &self,
        pair: &str,
        side: SwapSide,
        amount: &str,
        pin: &str,
    ) -> Result<SwapExecuteData>;

    /// Wallet balances of the signed-in user
    async fn get_wallets(&self) -> Result<Vec<WalletDto>>;
}

/// In-memory [`SwapApi`] for controller tests.
///
/// Quotes price the amount at a fixed rate (default 95,000,000 so `0.01` of
/// the base comes back as `950000`). Failures and per-call latency are queued
/// so a test can script the exact sequence of responses it needs.
#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::str::FromStr;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use rust_decimal::Decimal;
    use shared::{SwapExecuteData, SwapQuoteData, SwapSide, WalletDto};

    use super::SwapApi;
    use crate::core::error::{AppError, Result};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ApiCall {
        Pairs,
        Calculate {
            pair: String,
            side: SwapSide,
            amount: String,
        },
        Execute {
            pair: String,
            side: SwapSide,
            amount: String,
            pin: String,
        },
        Wallets,
    }

    pub struct MockSwapApi {
        pairs: Vec<String>,
        wallets: Mutex<Vec<WalletDto>>,
        rate: Mutex<Decimal>,
        quote_failures: Mutex<VecDeque<AppError>>,
        quote_delays: Mutex<VecDeque<Duration>>,
        execute_failure: Mutex<Option<AppError>>,
        calls: Mutex<Vec<ApiCall>>,
    }

    impl MockSwapApi {
        pub fn new() -> Self {
            Self {
                pairs: vec!["BTC-NGN".to_string(), "USDT-NGN".to_string()],
                wallets: Mutex::new(vec![
                    wallet("BTC", "2.34560000"),
                    wallet("NGN", "1500000"),
                    wallet("USDT", "250.5"),
                ]),
                rate: Mutex::new(Decimal::from(95_000_000)),
                quote_failures: Mutex::new(VecDeque::new()),
                quote_delays: Mutex::new(VecDeque::new()),
                execute_failure: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn set_rate(&self, rate: Decimal) {
            *self.rate.lock() = rate;
        }

        pub fn set_wallets(&self, wallets: Vec<WalletDto>) {
            *self.wallets.lock() = wallets;
        }

        /// Fail the next calculate call with `error`.
        pub fn fail_next_quote(&self, error: AppError) {
            self.quote_failures.lock().push_back(error);
        }

        /// Delay the next calculate call by `delay`.
        pub fn delay_next_quote(&self, delay: Duration) {
            self.quote_delays.lock().push_back(delay);
        }

        pub fn fail_execute(&self, error: AppError) {
            *self.execute_failure.lock() = Some(error);
        }

        pub fn calls(&self) -> Vec<ApiCall> {
            self.calls.lock().clone()
        }

        pub fn calculate_calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .iter()
                .filter_map(|call| match call {
                    ApiCall::Calculate { amount, .. } => Some(amount.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn execute_calls(&self) -> usize {
            self.calls
                .lock()
                .iter()
                .filter(|call| matches!(call, ApiCall::Execute { .. }))
                .count()
        }
    }

    impl Default for MockSwapApi {
        fn default() -> Self {
            Self::new()
        }
    }

    pub fn wallet(currency: &str, available: &str) -> WalletDto {
        WalletDto {
            currency: currency.to_string(),
            available_balance: available.to_string(),
            locked_balance: "0".to_string(),
        }
    }

    #[async_trait]
    impl SwapApi for MockSwapApi {
        async fn get_swap_pairs(&self) -> Result<Vec<String>> {
            self.calls.lock().push(ApiCall::Pairs);
            Ok(self.pairs.clone())
        }

        async fn calculate_swap(
            &self,
            pair: &str,
            side: SwapSide,
            amount: &str,
        ) -> Result<SwapQuoteData> {
            self.calls.lock().push(ApiCall::Calculate {
                pair: pair.to_string(),
                side,
                amount: amount.to_string(),
            });

            let delay = self.quote_delays.lock().pop_front();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let failure = self.quote_failures.lock().pop_front();
            if let Some(error) = failure {
                return Err(error);
            }

            let base = Decimal::from_str(amount)
                .map_err(|e| AppError::QuoteUnavailable(e.to_string()))?;
            let rate = *self.rate.lock();
            Ok(SwapQuoteData {
                output_amount: (base * rate).normalize().to_string(),
                price: rate.to_string(),
                trading_fee: "0".to_string(),
                trading_fee_percent: 0.0,
                base_amount: base.to_string(),
                spread: "0".to_string(),
            })
        }

        async fn execute_swap(
            &self,
            pair: &str,
            side: SwapSide,
            amount: &str,
            pin: &str,
        ) -> Result<SwapExecuteData> {
            self.calls.lock().push(ApiCall::Execute {
                pair: pair.to_string(),
                side,
                amount: amount.to_string(),
                pin: pin.to_string(),
            });

            if let Some(error) = self.execute_failure.lock().clone() {
                return Err(error);
            }

            Ok(SwapExecuteData {
                reference: Some("SWP-0001".to_string()),
                status: Some("completed".to_string()),
                output_amount: None,
            })
        }

        async fn get_wallets(&self) -> Result<Vec<WalletDto>> {
            self.calls.lock().push(ApiCall::Wallets);
            Ok(self.wallets.lock().clone())
        }
    }
}
