//! HTTP server wiring: configuration, shared state, router, shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use listkeeper_core::Result;
use listkeeper_store::TodoStore;

use crate::routes;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3000".parse().unwrap(),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    public_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets the static assets directory.
    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            public_dir: self.public_dir.unwrap_or(defaults.public_dir),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The document store backend.
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    /// Creates new app state over the given store.
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server over the given store backend.
    pub fn new(config: ServerConfig, store: Arc<dyn TodoStore>) -> Self {
        let state = Arc::new(AppState::new(store));
        Self { config, state }
    }

    /// Creates the router.
    ///
    /// Exposed so tests can drive the full routing table without binding a
    /// socket.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(routes::health))
            .route("/", get(routes::show_today).post(routes::add_item))
            .route("/delete", post(routes::delete_item))
            .route("/:list_name", get(routes::show_list))
            .nest_service("/public", ServeDir::new(&self.config.public_dir))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address cannot be bound or the server
    /// fails while serving.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting listkeeper server");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(listkeeper_core::Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    tracing::info!("Received Ctrl+C, shutting down");
                },
                () = terminate => {
                    tracing::info!("Received SIGTERM, shutting down");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(listkeeper_core::Error::Io)?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder()
            .addr("127.0.0.1:3000".parse().unwrap())
            .public_dir("assets")
            .build();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.public_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::builder().build();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }
}
