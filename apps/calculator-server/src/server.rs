//! HTTP server lifecycle: bind, serve, graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use calculator::{CalculatorService, router};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Bind the listener and serve until the cancellation token fires.
pub async fn run(config: &AppConfig, cancel: CancellationToken) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.server.bind_addr))?;

    let service = Arc::new(CalculatorService::new());
    let app = router(service, config.server.enable_docs);

    // Bind first; only then is the service considered up.
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server started on port {}", addr.port());

    let shutdown = {
        let cancel = cancel.clone();
        async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
