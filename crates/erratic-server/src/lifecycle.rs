//! Process lifecycle: startup, serving, and the two ways of stopping.
//!
//! - Normal shutdown: Ctrl-C / SIGTERM, in-flight requests drain.
//! - Hard stop: `/quitquitquit` calls the `ShutdownTrigger`, which in
//!   production exits the process on the spot with no drain.

use std::sync::Arc;

use erratic_core::error::{ErraticError, Result};
use erratic_core::{FileRateStore, RateStore};

use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::router;

/// Exit status used by the hard-stop endpoint.
pub const QUIT_EXIT_CODE: i32 = 1;

/// Capability to terminate the process.
pub trait ShutdownTrigger: Send + Sync {
    fn trigger(&self, code: i32);
}

/// Exits the process immediately. In-flight requests are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl ShutdownTrigger for ProcessExit {
    fn trigger(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Build the state for `cfg` and write the default rate.
///
/// A failed initial write is fatal: the server would answer every request
/// with a 500.
pub async fn bootstrap(cfg: &ServerConfig) -> Result<AppState> {
    let path = cfg.rate.file_path();
    let file_store: Arc<dyn RateStore> = Arc::new(FileRateStore::new(&path));
    let state = AppState::builder(file_store).unit(cfg.rate.unit).build();

    state
        .store()
        .set_rate(cfg.rate.default)
        .await
        .map_err(|e| {
            ErraticError::Startup(format!(
                "initialize rate file {} failed: {e}",
                path.display()
            ))
        })?;

    tracing::info!(
        path = %path.display(),
        default_rate = cfg.rate.default,
        unit = cfg.rate.unit.as_str(),
        "rate store initialized"
    );
    Ok(state)
}

/// Bind and serve until a shutdown signal arrives.
pub async fn serve(cfg: &ServerConfig, state: AppState) -> Result<()> {
    let listen = cfg.server.listen_addr()?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ErraticError::Startup(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "erratic starting up on http://localhost:{}", cfg.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
