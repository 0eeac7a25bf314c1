//! Server instance management

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use dermacast_core::{AppError, ServerConfig};

use crate::handlers::{create_router, AppState};

/// Dermacast HTTP server
///
/// Manages the axum server lifecycle including startup and graceful
/// shutdown.
pub struct DermacastServer {
    config: ServerConfig,
    state: AppState,
}

impl DermacastServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind the configured host and port. Hostnames such as `localhost` are
    /// resolved.
    pub async fn bind(&self) -> Result<TcpListener, AppError> {
        TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| {
                error!(
                    "Failed to bind to {}:{}: {:?}",
                    self.config.host, self.config.port, e
                );
                AppError::Io(e)
            })
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.config.host, self.config.port)
    }

    /// Bind and serve until a shutdown signal arrives
    pub async fn start(self) -> Result<(), AppError> {
        let listener = self.bind().await?;
        let app = create_router(self.state.clone());

        info!("Server listening on: {}", self.server_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received TERM signal");
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
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
}
