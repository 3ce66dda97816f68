//! erratic core: the error-rate store, the per-request fail decision, and the
//! shared error type.
//!
//! Nothing here knows about HTTP. The server crate wires these pieces into
//! routes and metrics.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `ErraticError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;
pub mod store;
pub mod unit;

/// Shared result type.
pub use error::{ErraticError, Result};
pub use store::{FileRateStore, MemoryRateStore, RateStore};
pub use unit::RateUnit;

/// Rate written at process start.
pub const DEFAULT_ERROR_RATE: f64 = 0.001;
