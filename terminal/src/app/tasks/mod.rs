//! # Async Tasks
//!
//! Background work spawned by the controller. Every task reports back through
//! the event channel; none of them touch form state directly.

pub mod swap;
pub mod wallet;
