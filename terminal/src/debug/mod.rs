//! # Logging and Tracing
//!
//! File-based structured logging for the swap client.
//!
//! - **File logging**: `logs/swap-terminal.log.YYYY-MM-DD` (daily rotation)
//! - **Trace ids**: one uuid per swap submission, recorded on its span
//! - **Panic hook**: panics are logged with location before the default handler
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive
//! let _guard = swap_terminal::debug::init_logger();
//!
//! tracing::info!(pair = "BTC-NGN", duration_ms = 234, "Quote received");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `swap_terminal=info,warn`)
//! - `SWAP_LOG_DIR`: Log directory (default `logs`)
//! - `SWAP_LOG_JSON`: `1` for JSON lines

pub mod config;
pub mod logger;
pub mod trace_context;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use trace_context::{execution_span, new_trace_id};
