//! # Amount Handlers
//!
//! Edits of the sell amount field and the half/max shortcuts.

use rust_decimal::Decimal;

use crate::app::SwapApp;
use crate::utils::amount::{self, AmountInput};

impl SwapApp {
    /// Apply a keystroke-level edit of the sell amount.
    ///
    /// Returns false when the text is not a valid partial amount; the field
    /// keeps its previous value and nothing is scheduled.
    pub fn input_amount(&mut self, raw: &str) -> bool {
        let accepted = match amount::parse_input(raw) {
            Ok(value) => {
                self.set_amount(value);
                true
            }
            Err(e) => {
                tracing::debug!(raw, error = %e, "Rejected amount edit");
                false
            }
        };
        self.publish();
        accepted
    }

    /// Focus left the amount field: tidy trailing zeros in place.
    pub fn blur_amount(&mut self) {
        {
            let mut state = self.state.write();
            let normalized = amount::normalize(state.amount.as_str());
            if state.quoted_amount.to_decimal() == normalized.to_decimal() {
                state.quoted_amount = normalized.clone();
            }
            state.amount = normalized;
        }
        self.publish();
    }

    /// Fill half of the sell balance. False when there is no balance to use.
    pub fn apply_half(&mut self) -> bool {
        self.apply_shortcut(amount::half)
    }

    /// Fill the whole sell balance. False when there is no balance to use.
    pub fn apply_max(&mut self) -> bool {
        self.apply_shortcut(amount::max)
    }

    fn apply_shortcut(&mut self, shortcut: fn(Decimal) -> Option<AmountInput>) -> bool {
        let filled = self.state.read().available_balance().and_then(shortcut);
        let applied = match filled {
            Some(value) => {
                self.set_amount(value);
                true
            }
            None => false,
        };
        self.publish();
        applied
    }

    /// Store a new live amount and restart the debounce when its value moved.
    fn set_amount(&mut self, value: AmountInput) {
        let settled = {
            let mut state = self.state.write();
            state.amount = value;
            state.inline_error = None;
            if state.amount_settled() {
                state.quoted_amount = state.amount.clone();
                true
            } else {
                false
            }
        };

        if settled {
            self.debouncer.cancel();
        } else {
            self.debouncer.schedule(self.event_tx.clone());
        }
    }
}
