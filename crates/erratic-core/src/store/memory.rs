use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{ErraticError, Result};

use super::RateStore;

/// In-process store for tests and embedding.
///
/// Reading before the first write fails the same way a missing file does.
#[derive(Debug, Default)]
pub struct MemoryRateStore {
    rate: RwLock<Option<f64>>,
}

impl MemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(rate: f64) -> Self {
        Self {
            rate: RwLock::new(Some(rate)),
        }
    }
}

#[async_trait]
impl RateStore for MemoryRateStore {
    async fn set_rate(&self, rate: f64) -> Result<()> {
        let mut slot = self
            .rate
            .write()
            .map_err(|_| ErraticError::Io(std::io::Error::other("rate lock poisoned")))?;
        *slot = Some(rate);
        Ok(())
    }

    async fn get_rate(&self) -> Result<f64> {
        let slot = self
            .rate
            .read()
            .map_err(|_| ErraticError::Io(std::io::Error::other("rate lock poisoned")))?;
        (*slot).ok_or_else(|| {
            ErraticError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no rate has been set",
            ))
        })
    }
}
