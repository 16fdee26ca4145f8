//! # Shared Utility Functions
//!
//! Currency pair helpers used by both the client and its tests.
//!
//! ## Pair Codes
//!
//! A pair is an ordered `SELL-BUY` code such as `BTC-NGN`:
//! - [`pair_code`] - build a pair code from two currency codes
//! - [`split_pair`] - split a pair code back into its two currencies
//!
//! ```rust
//! use shared::utils::{pair_code, split_pair};
//!
//! assert_eq!(pair_code("btc", "ngn"), "BTC-NGN");
//! assert_eq!(split_pair("BTC-NGN"), Some(("BTC", "NGN")));
//! ```

/// Build the ordered pair code for selling `sell` into `buy`.
///
/// Currency codes are upper-cased; an empty side yields an empty code since
/// no pair can be formed from it.
pub fn pair_code(sell: &str, buy: &str) -> String {
    let sell = sell.trim();
    let buy = buy.trim();
    if sell.is_empty() || buy.is_empty() {
        return String::new();
    }
    format!("{}-{}", sell.to_uppercase(), buy.to_uppercase())
}

/// Split `BASE-QUOTE` into its two currency codes.
pub fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let (base, quote) = pair.split_once('-')?;
    if base.is_empty() || quote.is_empty() || quote.contains('-') {
        return None;
    }
    Some((base, quote))
}
