//! Listener binding and graceful shutdown.

use std::io;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;

use crate::config::ServerConfig;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

// =============================================================================
// Server
// =============================================================================

pub struct Server {
    config: ServerConfig,
}

impl Server {
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serves `router` until a shutdown signal arrives.
    ///
    /// After the signal, in-flight requests get the configured grace period
    /// to finish; connections still open after that are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound, or
    /// [`ServerError::Serve`] if accepting connections fails.
    pub async fn run(self, router: Router) -> Result<(), ServerError> {
        let address = self.config.socket_addr();

        tracing::info!("Starting server on {}", address);

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?;

        tracing::info!("Server listening on {}", address);

        let (signalled_sender, signalled_receiver) = oneshot::channel();
        let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
            shutdown_signal().await;
            // The receiver is gone only if the server already stopped.
            let _ = signalled_sender.send(());
        });

        tokio::select! {
            result = async { serve.await } => result?,
            () = grace_deadline(signalled_receiver, self.config.shutdown_grace) => {
                tracing::warn!(
                    grace_secs = self.config.shutdown_grace.as_secs(),
                    "Grace period elapsed, dropping remaining connections"
                );
            }
        }

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

async fn grace_deadline(signalled: oneshot::Receiver<()>, grace: Duration) {
    if signalled.await.is_ok() {
        tokio::time::sleep(grace).await;
    } else {
        std::future::pending::<()>().await;
    }
}

// =============================================================================
// Shutdown Signal
// =============================================================================

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
