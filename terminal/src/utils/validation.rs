//! Validation utilities for swap form input

use rust_decimal::Decimal;

use super::amount::AmountInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate the 4-digit transaction PIN
pub fn validate_pin(pin: &str) -> ValidationResult {
    if pin.is_empty() {
        return ValidationResult::err("PIN is required");
    }

    if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("PIN must be exactly 4 digits");
    }

    ValidationResult::ok()
}

/// Validate the currency selection
pub fn validate_currencies(sell: &str, buy: &str, pair_supported: bool) -> ValidationResult {
    if sell.is_empty() || buy.is_empty() {
        return ValidationResult::err("Select both currencies");
    }

    if sell.eq_ignore_ascii_case(buy) {
        return ValidationResult::err("Cannot swap a currency for itself");
    }

    if !pair_supported {
        return ValidationResult::err("Pair Not Supported");
    }

    ValidationResult::ok()
}

/// Validate the sell amount against the available balance
pub fn validate_amount(amount: &AmountInput, available: Option<Decimal>) -> ValidationResult {
    let value = match amount.to_decimal() {
        Some(value) => value,
        None => return ValidationResult::err("Enter an amount"),
    };

    if value <= Decimal::ZERO {
        return ValidationResult::err("Amount must be greater than 0");
    }

    if value > available.unwrap_or(Decimal::ZERO) {
        return ValidationResult::err("Insufficient balance");
    }

    ValidationResult::ok()
}
