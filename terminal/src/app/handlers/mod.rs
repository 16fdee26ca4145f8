//! # User Action Handlers
//!
//! User-facing transitions, grouped by the part of the form they act on.
//! Each one publishes exactly one snapshot.

pub mod amount;
pub mod swap;
pub mod wallet;
