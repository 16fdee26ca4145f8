//! # Utility Functions
//!
//! Shared utility functions used across the swap client.
//!
//! ## Modules
//!
//! - **[`amount`]**: Amount Normalizer (parse, normalize, format, half/max)
//! - **[`validation`]**: Form validation (PIN, currencies, amount vs balance)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Pair code helpers
//! - [`crate::core`]: Core abstractions and error types

pub mod amount;
pub mod validation;
