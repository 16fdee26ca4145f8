//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the swap client and the exchange's
//! REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: the `{ success, data, message }` wrapper
//!   - **[`dto::swap`]**: pairs, quote calculation and swap execution
//!   - **[`dto::wallet`]**: wallet balances
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::pair_code`]**: Build a `SELL-BUY` pair code
//!   - **[`utils::split_pair`]**: Split a pair code into its currencies
//!
//! ## Wire Format
//!
//! - Field names are **camelCase** on the wire (`outputAmount`, `availableBalance`)
//! - Decimal quantities are **strings**, never floats, except `tradingFeePercent`
//! - The swap side serializes as `"buy"` / `"sell"` under the key `type`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::{ApiEnvelope, SwapCalculateRequest, SwapQuoteData, SwapSide};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let request = SwapCalculateRequest {
//!     pair: shared::pair_code("BTC", "NGN"),
//!     side: SwapSide::Sell,
//!     amount: "0.01".to_string(),
//! };
//!
//! let quote: ApiEnvelope<SwapQuoteData> = reqwest::Client::new()
//!     .post("http://localhost:3001/api/v1/swap/calculate")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
