use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

use erratic_core::error::{ErraticError, Result};
use erratic_core::{FileRateStore, RateUnit, DEFAULT_ERROR_RATE};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub rate: RateSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            rate: RateSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ErraticError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.rate.validate()?;

        Ok(())
    }

    /// Overlay the `PORT` value, if any. Empty means unset.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        match port {
            Some(p) if !p.is_empty() => {
                self.server.port = p
                    .parse()
                    .map_err(|e| ErraticError::Config(format!("invalid PORT {p:?}: {e}")))?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|e| ErraticError::Config(format!("server.host {:?}: {e}", self.host)))?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ErraticError::Config(format!("server.host {:?}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateSection {
    /// Rate file; `<temp_dir>/rate.txt` when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default = "default_rate")]
    pub default: f64,

    #[serde(default)]
    pub unit: RateUnit,
}

impl Default for RateSection {
    fn default() -> Self {
        Self {
            file: None,
            default: default_rate(),
            unit: RateUnit::default(),
        }
    }
}

impl RateSection {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.default) {
            return Err(ErraticError::Config(
                "rate.default must be between 0 and 1".into(),
            ));
        }
        if matches!(&self.file, Some(p) if p.as_os_str().is_empty()) {
            return Err(ErraticError::Config("rate.file must not be empty".into()));
        }
        Ok(())
    }

    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(FileRateStore::default_path)
    }
}

fn default_rate() -> f64 {
    DEFAULT_ERROR_RATE
}
