//! Shared application state for the erratic server.
//!
//! Handlers get the rate store, sampler, metrics and shutdown trigger from
//! here; nothing is global. Tests build it with an in-memory store, a fixed
//! sampler and a recording trigger.

use std::sync::Arc;

use erratic_core::decision::{Sampler, ThreadRngSampler};
use erratic_core::{RateStore, RateUnit};

use crate::lifecycle::{ProcessExit, ShutdownTrigger};
use crate::obs::ServerMetrics;
use crate::store::MeteredRateStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: MeteredRateStore,
    sampler: Arc<dyn Sampler>,
    metrics: Arc<ServerMetrics>,
    shutdown: Arc<dyn ShutdownTrigger>,
    unit: RateUnit,
}

impl AppState {
    pub fn builder(store: Arc<dyn RateStore>) -> AppStateBuilder {
        AppStateBuilder {
            store,
            sampler: Arc::new(ThreadRngSampler),
            metrics: Arc::new(ServerMetrics::new()),
            shutdown: Arc::new(ProcessExit),
            unit: RateUnit::default(),
        }
    }

    /// The metered store. Every read and write updates the ratio gauge.
    pub fn store(&self) -> &dyn RateStore {
        &self.inner.store
    }

    pub fn sampler(&self) -> &dyn Sampler {
        self.inner.sampler.as_ref()
    }

    pub fn metrics(&self) -> Arc<ServerMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn shutdown(&self) -> &dyn ShutdownTrigger {
        self.inner.shutdown.as_ref()
    }

    pub fn unit(&self) -> RateUnit {
        self.inner.unit
    }
}

pub struct AppStateBuilder {
    store: Arc<dyn RateStore>,
    sampler: Arc<dyn Sampler>,
    metrics: Arc<ServerMetrics>,
    shutdown: Arc<dyn ShutdownTrigger>,
    unit: RateUnit,
}

impl AppStateBuilder {
    pub fn sampler(mut self, sampler: Arc<dyn Sampler>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn shutdown(mut self, shutdown: Arc<dyn ShutdownTrigger>) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn unit(mut self, unit: RateUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn build(self) -> AppState {
        let store = MeteredRateStore::new(self.store, Arc::clone(&self.metrics));
        AppState {
            inner: Arc::new(AppStateInner {
                store,
                sampler: self.sampler,
                metrics: self.metrics,
                shutdown: self.shutdown,
                unit: self.unit,
            }),
        }
    }
}
