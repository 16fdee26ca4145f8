//! # Services Module
//!
//! External integrations used by the swap controller.
//!
//! ```text
//! services/
//! ├── api/       - REST client for the exchange backend
//! │                (pairs, quote calculation, execution, wallets)
//! └── pairs.rs   - TTL cache over the supported-pairs endpoint
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`crate::core::Result`]. Backend rejections keep the
//! backend's message verbatim:
//! - Quote rejections: `AppError::QuoteUnavailable`
//! - Execution rejections: `AppError::Execution`
//! - Anything else: `AppError::Api`
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps a `reqwest::Client` (internally pooled and thread-safe)
//! and is shared across tasks behind `Arc<dyn SwapApi>`.

pub mod api;
pub mod pairs;

pub use pairs::PairsCache;
