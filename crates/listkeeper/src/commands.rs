//! CLI command implementations.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};

use listkeeper_server::{Server, ServerConfig};
use listkeeper_store::{MongoStore, TodoStore};

use crate::config::Config;

/// Start the web server.
pub async fn serve(
    cfg: &Config,
    host: Option<String>,
    port: Option<u16>,
    public_dir: String,
) -> Result<()> {
    let host = host.unwrap_or_else(|| cfg.server_host.clone());
    let port = port.unwrap_or(cfg.server_port);

    let uri = cfg.mongodb_uri();
    let store = MongoStore::connect(&uri, &cfg.db_name)
        .await
        .wrap_err("Invalid MongoDB connection string")?;

    // The driver connects lazily; an unreachable deployment at startup is
    // logged and the server keeps running, reconnecting on demand.
    match store.ping().await {
        Ok(()) => tracing::info!(db = %cfg.db_name, "MongoDB connected"),
        Err(e) => tracing::warn!(error = %e, "MongoDB unreachable at startup, continuing"),
    }

    let addr = format!("{}:{}", host, port)
        .parse()
        .wrap_err("Invalid listen address")?;
    let server_config = ServerConfig::builder()
        .addr(addr)
        .public_dir(public_dir)
        .build();

    let store: Arc<dyn TodoStore> = Arc::new(store);
    Server::new(server_config, store).run().await?;

    Ok(())
}

/// Print version information.
pub fn version() {
    println!("listkeeper {}", env!("CARGO_PKG_VERSION"));
}
