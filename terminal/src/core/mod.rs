//! # Core Abstractions
//!
//! Error types, configuration, and the service trait the controller is
//! written against.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Environment-driven client configuration (`ClientConfig`)
//! - **[`service`]**: The exchange API seam (`SwapApi`)
//!
//! ```rust,no_run
//! use swap_terminal::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::SwapApi;
