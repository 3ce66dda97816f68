//! Rate store decorator that feeds the configured error ratio gauge.

use std::sync::Arc;

use async_trait::async_trait;

use erratic_core::error::Result;
use erratic_core::RateStore;

use crate::obs::ServerMetrics;

/// Wraps any `RateStore`; successful reads and writes update
/// `example_configured_error_ratio`, failures bump `erratic_rate_store_errors_total`.
pub struct MeteredRateStore {
    inner: Arc<dyn RateStore>,
    metrics: Arc<ServerMetrics>,
}

impl MeteredRateStore {
    pub fn new(inner: Arc<dyn RateStore>, metrics: Arc<ServerMetrics>) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl RateStore for MeteredRateStore {
    async fn set_rate(&self, rate: f64) -> Result<()> {
        match self.inner.set_rate(rate).await {
            Ok(()) => {
                self.metrics.configured_error_ratio.set(rate);
                Ok(())
            }
            Err(e) => {
                self.metrics.rate_store_errors.inc(&[("op", "set"), ("kind", e.kind().as_str())]);
                Err(e)
            }
        }
    }

    async fn get_rate(&self) -> Result<f64> {
        match self.inner.get_rate().await {
            Ok(rate) => {
                self.metrics.configured_error_ratio.set(rate);
                Ok(rate)
            }
            Err(e) => {
                self.metrics.rate_store_errors.inc(&[("op", "get"), ("kind", e.kind().as_str())]);
                Err(e)
            }
        }
    }
}
