//! Server config loader (strict parsing).
//!
//! Sources, later wins: built-in defaults, the YAML file named by
//! `ERRATIC_CONFIG` (if set), then `PORT`.

pub mod schema;

use std::fs;

use erratic_core::error::{ErraticError, Result};

pub use schema::{RateSection, ServerConfig, ServerSection};

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "ERRATIC_CONFIG";
/// Env var overriding the listen port.
pub const PORT_ENV: &str = "PORT";

pub fn load() -> Result<ServerConfig> {
    let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_from_file(&path)?,
        _ => ServerConfig::default(),
    };
    cfg.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ErraticError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| ErraticError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
