//! # Swap Handlers
//!
//! Currency selection, direction toggle and the confirm/PIN flow.

use tokio::time::Instant;

use crate::app::view::SubmitGate;
use crate::app::SwapApp;
use crate::core::error::{AppError, Result};
use crate::utils::amount::AmountInput;
use crate::utils::validation::{validate_amount, validate_currencies, validate_pin};

/// Which side of the pair a selection applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Sell,
    Buy,
}

impl SwapApp {
    /// Choose the currency to sell. Must be one of the user's wallets.
    pub fn select_sell_currency(&mut self, code: &str) -> Result<()> {
        self.select_currency(Side::Sell, code)
    }

    /// Choose the currency to buy. Must be one of the user's wallets.
    pub fn select_buy_currency(&mut self, code: &str) -> Result<()> {
        self.select_currency(Side::Buy, code)
    }

    fn select_currency(&mut self, side: Side, code: &str) -> Result<()> {
        let code = code.trim().to_uppercase();
        let changed = {
            let mut state = self.state.write();
            if !state.holds(&code) {
                let err = AppError::Validation(format!("No {} wallet", code));
                state.inline_error = Some(err.user_message());
                drop(state);
                self.publish();
                return Err(err);
            }

            let slot = match side {
                Side::Sell => &mut state.sell_currency,
                Side::Buy => &mut state.buy_currency,
            };
            let changed = *slot != code;
            *slot = code;
            if changed {
                state.inline_error = None;
                state.quoted_amount = state.amount.clone();
            }
            changed
        };

        if changed {
            tracing::debug!(pair = %self.state.read().pair(), "Pair changed");
            self.debouncer.cancel();
            self.requote();
        }
        self.publish();
        Ok(())
    }

    /// Swap sell and buy. The amount is cleared and the form returns to idle;
    /// the previous quote is never inverted.
    pub fn toggle_direction(&mut self) {
        {
            let mut state = self.state.write();
            let state = &mut *state;
            std::mem::swap(&mut state.sell_currency, &mut state.buy_currency);
            state.amount = AmountInput::empty();
            state.quoted_amount = AmountInput::empty();
            state.inline_error = None;
        }
        self.debouncer.cancel();
        self.go_idle();
        self.publish();
    }

    /// Run local validation and open the PIN step.
    pub fn open_confirmation(&mut self) -> Result<()> {
        let outcome = {
            let mut state = self.state.write();
            let checks = [
                validate_currencies(&state.sell_currency, &state.buy_currency, state.pair_supported()),
                validate_amount(&state.amount, state.available_balance()),
            ];
            let validation = checks.into_iter().find_map(|check| check.error);

            let outcome = match validation {
                Some(message) => Err(AppError::Validation(message)),
                None => match SubmitGate::evaluate(&state).to_error() {
                    Some(err) => Err(err),
                    None => Ok(()),
                },
            };

            match &outcome {
                Ok(()) => {
                    state.confirming = true;
                    state.execution_error = None;
                    state.inline_error = None;
                }
                Err(err) => state.inline_error = Some(err.user_message()),
            }
            outcome
        };

        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "Confirmation blocked");
        }
        self.publish();
        outcome
    }

    /// Authorise the swap with the 4-digit PIN and start execution.
    ///
    /// The execution task re-quotes the latest amount before executing; its
    /// issuance resets the validity window here.
    pub fn submit_pin(&mut self, pin: &str) -> Result<()> {
        let now = Instant::now();
        let prepared = {
            let mut state = self.state.write();
            let checked = if !state.confirming {
                Err(AppError::Validation("Confirm the swap first".to_string()))
            } else if let Some(message) = validate_pin(pin).error {
                Err(AppError::Validation(message))
            } else {
                match SubmitGate::evaluate(&state).to_error() {
                    Some(err) => Err(err),
                    None => Ok(()),
                }
            };

            match checked {
                Ok(()) => {
                    state.executing = true;
                    state.execution_error = None;
                    state.scheduler.start(now);
                    Ok((state.pair(), state.quoted_amount.clone()))
                }
                Err(err) => {
                    state.execution_error = Some(err.user_message());
                    Err(err)
                }
            }
        };

        let result = match prepared {
            Ok((pair, amount)) => {
                tracing::info!(pair = %pair, amount = %amount, "Submitting swap");
                self.countdown.restart(now, self.event_tx.clone());
                crate::app::tasks::swap::execute_swap(
                    self.api.clone(),
                    self.event_tx.clone(),
                    pair,
                    amount,
                    pin.to_string(),
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "PIN submission refused");
                Err(err)
            }
        };
        self.publish();
        result
    }

    /// Close the PIN step. Ignored while the swap is executing.
    pub fn cancel_confirmation(&mut self) {
        {
            let mut state = self.state.write();
            if state.executing {
                return;
            }
            state.confirming = false;
            state.execution_error = None;
        }
        self.publish();
    }
}
