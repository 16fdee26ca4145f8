//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the exchange REST API consumed by the swap client.
//!
//! ## Module Organization
//!
//! - [`envelope`] - `{ success, data, message }` wrapper shared by all endpoints
//! - [`swap`] - pairs, quote calculation and swap execution
//! - [`wallet`] - wallet balance list
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/swap/calculate
//! Content-Type: application/json
//!
//! { "pair": "BTC-NGN", "type": "sell", "amount": "0.01" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "data": {
//!     "outputAmount": "950000",
//!     "price": "95000000",
//!     "tradingFee": "0.00001",
//!     "tradingFeePercent": 0.1,
//!     "baseAmount": "0.01",
//!     "spread": "1200"
//!   }
//! }
//! ```

pub mod envelope;
pub mod swap;
pub mod wallet;

pub use envelope::*;
pub use swap::*;
pub use wallet::*;
