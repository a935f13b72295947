//! API server setup

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::create_router;
use crate::application::processor::ReceiptProcessor;
use crate::error::Result;

pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);

/// API server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR,
        }
    }
}

async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind(config.listen).await?;
    info!("Receipt points API listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Runs the API server until Ctrl-C.
pub async fn run_server(config: ServerConfig, processor: ReceiptProcessor) -> Result<()> {
    let listener = bind(&config).await?;
    let router = create_router(processor).layer(TraceLayer::new_for_http());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Receipt points API stopped");
    Ok(())
}

/// Starts the server on a background task and returns the bound address.
///
/// Binding port 0 picks a free port.
pub async fn start_background_server(
    config: ServerConfig,
    processor: ReceiptProcessor,
) -> Result<SocketAddr> {
    let listener = bind(&config).await?;
    let addr = listener.local_addr()?;
    let router = create_router(processor).layer(TraceLayer::new_for_http());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("Server error: {}", e);
        }
    });

    Ok(addr)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
