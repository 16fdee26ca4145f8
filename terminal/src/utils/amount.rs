//! # Amount Normalizer
//!
//! Converts between the three shapes an amount takes in the swap form:
//!
//! - **raw** text as typed, possibly with grouping separators (`1,500.50`)
//! - **canonical** [`AmountInput`]: digits and at most one decimal point (`1500.5`)
//! - **display** text with thousands separators (`1,500.5`)
//!
//! Nothing here rounds except [`half`], which follows the fixed 8-decimal
//! contract of the "half" shortcut. Formatting only ever truncates.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Thousands separator accepted in input and emitted in display text
pub const GROUPING_SEPARATOR: char = ',';

/// Decimal places used by the "half" shortcut
pub const HALF_DECIMALS: u32 = 8;

/// Currencies displayed with cent precision
const FIAT_CURRENCIES: &[&str] = &["NGN", "USD", "EUR", "GBP", "GHS", "KES", "ZAR"];

/// Why an edit was refused. The previous value stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("'{0}' is not allowed in an amount")]
    InvalidCharacter(char),
    #[error("An amount can only have one decimal point")]
    MultipleDecimalPoints,
    #[error("A decimal point needs at least one digit")]
    LoneDecimalPoint,
}

/// Canonical decimal-string amount. Empty means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AmountInput(String);

impl AmountInput {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact decimal value, `None` when unset or out of `Decimal` range.
    ///
    /// Partially typed values like `"5."` and `".5"` are read as `5` and `0.5`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        if self.0.is_empty() {
            return None;
        }
        let (int_part, frac_part) = match self.0.split_once('.') {
            Some((i, f)) => (i, f),
            None => (self.0.as_str(), ""),
        };
        let int_part = if int_part.is_empty() { "0" } else { int_part };
        if frac_part.is_empty() {
            Decimal::from_str(int_part).ok()
        } else {
            Decimal::from_str(&format!("{}.{}", int_part, frac_part)).ok()
        }
    }

    pub fn is_positive(&self) -> bool {
        self.to_decimal().is_some_and(|d| d > Decimal::ZERO)
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AmountInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Remove thousands separators.
pub fn strip_grouping(raw: &str) -> String {
    raw.chars().filter(|c| *c != GROUPING_SEPARATOR).collect()
}

/// Validate a keystroke-level edit.
///
/// Accepts `^\d*\.?\d*$` once separators are stripped, except a lone `"."`.
/// Nothing is corrected: a rejected edit must leave the previous value alone.
pub fn parse_input(raw: &str) -> Result<AmountInput, AmountError> {
    let stripped = strip_grouping(raw);

    if stripped == "." {
        return Err(AmountError::LoneDecimalPoint);
    }

    let mut seen_point = false;
    for c in stripped.chars() {
        match c {
            '0'..='9' => {}
            '.' if seen_point => return Err(AmountError::MultipleDecimalPoints),
            '.' => seen_point = true,
            other => return Err(AmountError::InvalidCharacter(other)),
        }
    }

    Ok(AmountInput(stripped))
}

/// Canonicalize: strip separators, trailing fractional zeros, then a bare point.
///
/// ```rust
/// use swap_terminal::utils::amount::normalize;
///
/// assert_eq!(normalize("1500.50").as_str(), "1500.5");
/// assert_eq!(normalize("1,500.00").as_str(), "1500");
/// assert_eq!(normalize("").as_str(), "");
/// ```
pub fn normalize(raw: &str) -> AmountInput {
    let stripped = strip_grouping(raw);
    if !stripped.contains('.') {
        return AmountInput(stripped);
    }
    let trimmed = stripped.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    AmountInput(trimmed.to_string())
}

/// Render for display with thousands separators, keeping at most
/// `max_decimals` fractional digits (truncated, never rounded).
///
/// ```rust
/// use swap_terminal::utils::amount::format_amount;
///
/// assert_eq!(format_amount("1500.5", 8), "1,500.5");
/// assert_eq!(format_amount("950000", 2), "950,000");
/// assert_eq!(format_amount("0.123456789", 8), "0.12345678");
/// ```
pub fn format_amount(amount: &str, max_decimals: usize) -> String {
    let stripped = strip_grouping(amount);
    let (sign, unsigned) = match stripped.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", stripped.as_str()),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }

    let frac: String = frac_part.chars().take(max_decimals).collect();
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        if grouped.is_empty() {
            return String::new();
        }
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// The "half" shortcut: `balance / 2` at 8 decimals (midpoint away from zero),
/// normalized. `None` for a zero or negative balance.
pub fn half(balance: Decimal) -> Option<AmountInput> {
    if balance <= Decimal::ZERO {
        return None;
    }
    let halved = (balance / Decimal::from(2))
        .round_dp_with_strategy(HALF_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    Some(normalize(&halved.to_string()))
}

/// The "max" shortcut: the whole balance, normalized. `None` for a zero or
/// negative balance.
pub fn max(balance: Decimal) -> Option<AmountInput> {
    if balance <= Decimal::ZERO {
        return None;
    }
    Some(normalize(&balance.to_string()))
}

/// Fractional digits to show for a currency.
pub fn display_decimals(currency: &str) -> usize {
    if FIAT_CURRENCIES
        .iter()
        .any(|fiat| fiat.eq_ignore_ascii_case(currency))
    {
        2
    } else {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const CANONICAL_SAMPLES: &[&str] = &[
        "", "0", "1", "12", "123", "1234", "1500.5", "950000", "0.01", "2.3456",
        "1234567.891", "0.00000001", "10", "100000000",
    ];

    #[test]
    fn test_parse_input_accepts_decimal_shapes() {
        assert_eq!(parse_input("").unwrap().as_str(), "");
        assert_eq!(parse_input("0.01").unwrap().as_str(), "0.01");
        assert_eq!(parse_input("5.").unwrap().as_str(), "5.");
        assert_eq!(parse_input(".5").unwrap().as_str(), ".5");
        assert_eq!(parse_input("1,500.50").unwrap().as_str(), "1500.50");
    }

    #[test]
    fn test_parse_input_rejects_malformed_edits() {
        assert_eq!(parse_input("."), Err(AmountError::LoneDecimalPoint));
        assert_eq!(parse_input("1.2.3"), Err(AmountError::MultipleDecimalPoints));
        assert_eq!(parse_input("12a"), Err(AmountError::InvalidCharacter('a')));
        assert_eq!(parse_input("-5"), Err(AmountError::InvalidCharacter('-')));
        assert_eq!(parse_input("1 000"), Err(AmountError::InvalidCharacter(' ')));
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize("1500.50").as_str(), "1500.5");
        assert_eq!(normalize("1500.00").as_str(), "1500");
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize("100").as_str(), "100");
        assert_eq!(normalize("0.000").as_str(), "0");
        assert_eq!(normalize("5.").as_str(), "5");
        assert_eq!(normalize("2.34560000").as_str(), "2.3456");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "1500.50", "1500.00", "", "0.0", "5.", ".50", "1,234.5600", "100", "0.00000010",
        ];
        for raw in inputs {
            let once = normalize(raw);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "normalize not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_format_groups_and_truncates() {
        assert_eq!(format_amount("1500.5", 8), "1,500.5");
        assert_eq!(format_amount("950000", 2), "950,000");
        assert_eq!(format_amount("1234567.891", 2), "1,234,567.89");
        assert_eq!(format_amount("0.999", 2), "0.99");
        assert_eq!(format_amount("12.500", 8), "12.5");
        assert_eq!(format_amount("12.001", 2), "12");
        assert_eq!(format_amount("", 8), "");
        assert_eq!(format_amount("-1200.5", 2), "-1,200.5");
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        for sample in CANONICAL_SAMPLES {
            let canonical = normalize(sample);
            let shown = format_amount(canonical.as_str(), 8);
            let reparsed = parse_input(&strip_grouping(&shown)).unwrap();
            assert_eq!(reparsed, canonical, "round trip failed for {:?}", sample);
        }
    }

    #[test]
    fn test_half_and_max() {
        assert_eq!(max(dec!(2.34560000)).unwrap().as_str(), "2.3456");
        assert_eq!(half(dec!(2.34560000)).unwrap().as_str(), "1.1728");
        assert_eq!(half(dec!(1)).unwrap().as_str(), "0.5");
        assert_eq!(half(dec!(0.00000001)).unwrap().as_str(), "0.00000001");
        assert_eq!(half(dec!(150000.00)).unwrap().as_str(), "75000");
    }

    #[test]
    fn test_zero_balance_disables_shortcuts() {
        assert_eq!(half(Decimal::ZERO), None);
        assert_eq!(max(Decimal::ZERO), None);
    }

    #[test]
    fn test_to_decimal_handles_partial_input() {
        assert_eq!(AmountInput::empty().to_decimal(), None);
        assert_eq!(parse_input("5.").unwrap().to_decimal(), Some(dec!(5)));
        assert_eq!(parse_input(".5").unwrap().to_decimal(), Some(dec!(0.5)));
        assert!(!parse_input("0.000").unwrap().is_positive());
        assert!(parse_input("0.01").unwrap().is_positive());
    }

    #[test]
    fn test_display_decimals() {
        assert_eq!(display_decimals("NGN"), 2);
        assert_eq!(display_decimals("usd"), 2);
        assert_eq!(display_decimals("BTC"), 8);
    }
}
