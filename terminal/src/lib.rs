//! # Swap Terminal - Library Root
//!
//! Headless client for a custodial exchange's swap API. The library holds the
//! swap form controller; the binary (`main.rs`) is a small stdin driver.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap-terminal (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - SwapApp controller, timers, snapshots    │
//! │  services   - REST client, supported-pairs cache       │
//! │  utils      - amount normalizer, form validation       │
//! │  core       - errors, config, SwapApi trait            │
//! │  debug      - tracing setup, trace ids                 │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON
//!          ▼
//! ┌─────────────────────────────────┐
//! │  Exchange API                   │
//! │  GET  /api/v1/swap/pairs        │
//! │  POST /api/v1/swap/calculate    │
//! │  POST /api/v1/swap              │
//! │  GET  /api/v1/wallets           │
//! └─────────────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Controller
//!
//! User actions are plain method calls on [`app::SwapApp`]. Network calls and
//! timers run as tokio tasks and report back through an `async_channel`; the
//! controller applies those results one at a time, so form state has a single
//! writer.
//!
//! ### Snapshots
//!
//! After every transition the controller publishes an immutable
//! [`app::SwapView`] on a `tokio::sync::watch` channel. Renderers subscribe
//! instead of locking state.
//!
//! ### Exact Amounts
//!
//! Amounts are decimal strings on the wire and `rust_decimal::Decimal` in
//! memory. Nothing goes through floating point.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! cargo test --lib app::tests
//! ```
//!
//! Timing tests run on tokio's paused clock against an in-memory `SwapApi`.

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use app::{AppEvent, SwapApp, SwapView};
pub use core::{AppError, Result};
