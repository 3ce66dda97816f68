use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{ErraticError, Result};

use super::RateStore;

const DEFAULT_FILE_NAME: &str = "rate.txt";

/// Rate persisted as decimal text in a single file.
///
/// No locking: concurrent writers race at the OS level and the last write
/// wins. A read that overlaps a write may see a truncated value, which comes
/// back as `ErraticError::Parse`.
#[derive(Debug, Clone)]
pub struct FileRateStore {
    path: PathBuf,
}

impl FileRateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<temp_dir>/rate.txt`
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(DEFAULT_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileRateStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[async_trait]
impl RateStore for FileRateStore {
    async fn set_rate(&self, rate: f64) -> Result<()> {
        tokio::fs::write(&self.path, rate.to_string()).await?;
        tracing::debug!(path = %self.path.display(), rate, "rate written");
        Ok(())
    }

    async fn get_rate(&self) -> Result<f64> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        raw.trim().parse::<f64>().map_err(|e| {
            ErraticError::Parse(format!(
                "stored rate {:?} in {}: {e}",
                raw,
                self.path.display()
            ))
        })
    }
}
