//! Leadership FMEA server binary.
//!
//! Loads configuration from the environment, initializes tracing and
//! serves the FMEA API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leadership_fmea::adapters::http::{build_router, FmeaAppState};
use leadership_fmea::adapters::MarkdownReportRenderer;
use leadership_fmea::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let state = FmeaAppState::new(
        config.analysis.clone(),
        Arc::new(MarkdownReportRenderer::new()),
    );
    let app = build_router(state, &config.server);

    tracing::info!(
        environment = ?config.server.environment,
        agent_delay_ms = config.analysis.agent_delay_ms,
        "Starting Leadership FMEA server on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over config.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        // Keep serving; without a signal handler there is nothing to wait on.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
