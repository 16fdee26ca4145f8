//! # Backend API Client Module
//!
//! HTTP client for the exchange's REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, envelope decoding, SwapApi impl
//! ├── swap.rs     - Swap endpoints (pairs, calculate, execute)
//! └── wallet.rs   - Wallet balance endpoint
//! ```

pub mod client;
pub mod swap;
pub mod wallet;

pub use client::ApiClient;
