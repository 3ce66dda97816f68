//! erratic server binary.
//!
//! `PORT` picks the listen port (default 8080), `ERRATIC_CONFIG` an optional
//! YAML config file, `RUST_LOG` the log filter. Exits 1 on fatal startup
//! errors.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use erratic_core::error::Result;
use erratic_server::{config, lifecycle};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "fatal");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let state = lifecycle::bootstrap(&cfg).await?;
    lifecycle::serve(&cfg, state).await
}
