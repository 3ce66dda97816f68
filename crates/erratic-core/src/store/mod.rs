//! Error-rate storage.
//!
//! Exactly one rate exists at a time. Every `set_rate` replaces it and every
//! `get_rate` reads it fresh from the backing medium. Stores do no validation;
//! callers decide what a legal rate is.

mod file;
mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use file::FileRateStore;
pub use memory::MemoryRateStore;

/// Single-value rate store.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Replace the stored rate.
    async fn set_rate(&self, rate: f64) -> Result<()>;

    /// Read the current rate.
    async fn get_rate(&self) -> Result<f64>;
}
