//! NetBox → Catalyst Center bridge server.
//!
//! A thin webhook receiver: NetBox notifies on interface change, the bridge
//! verifies the message and propagates the interface description to Catalyst
//! Center. Configuration problems refuse startup; per-request failures never
//! take the server down.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nbcc_bridge::web::{health, netbox_interface_updated, root, AppState};
use nbcc_bridge::{CatalystClient, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("bridge_starting");

    // Load configuration; an incomplete environment refuses startup
    let config = Config::from_env().context("configuration is incomplete")?;
    info!(
        catalyst_host = %config.catalyst_host,
        verify_tls = config.verify_tls,
        deployment_mode = %config.deployment_mode,
        interface_path = ?config.interface_path,
        signature_verification = !config.webhook_secret.is_empty(),
        port = config.port,
        "config_loaded"
    );

    let catalyst = CatalystClient::new(&config).context("Failed to build controller client")?;

    let port = config.port;
    let state = AppState::new(config, catalyst);

    // Build the router
    let app = Router::new()
        .route("/", get(root))
        .route("/healthz", get(health))
        .route("/netbox/interface-updated", post(netbox_interface_updated))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "bridge_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("bridge_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("bridge_shutting_down");
}
