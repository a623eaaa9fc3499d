use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::{get_points_handler, process_receipt_handler};
use crate::config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER};
use crate::store::ReceiptStore;

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Only one of the two fmt layers is ever present
    let (json_layer, pretty_layer) = match format {
        LogFormat::Json => (
            Some(fmt::layer()
                .json()
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::CLOSE)), // Log span close with duration
            None,
        ),
        LogFormat::Pretty => (None, Some(fmt::layer().with_target(false))),
    };

    tracing_subscriber::registry()
        .with(json_layer)
        .with(pretty_layer)
        .with(filter)
        .init();
}

pub fn create_app(store: Arc<ReceiptStore>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(get_points_handler))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(store)
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down gracefully..."),
        Err(e) => {
            // Keep serving rather than exit on a broken signal handler
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    info!("Starting receipt processor");

    let store = Arc::new(ReceiptStore::new());
    let app = create_app(store);

    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
