//! Main entry point for the coursechat web gateway.
//!
//! This file initializes the axum web server, wires up the backend API
//! client, and registers all routes and middleware. It orchestrates the
//! application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod errors;
mod logging;
mod utils;

#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use coursechat_adapters::{Backend, BackendClient};

use config::AppConfig;

#[derive(Parser)]
#[command(name = "coursechat", version)]
#[command(about = "Web gateway for the coursechat application", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    listen: SocketAddr,

    /// Base URL of the backend API
    #[arg(long, env = "API_URL")]
    api_url: String,

    /// Mark the session cookie Secure (TLS deployments)
    #[arg(long, env = "SECURE_COOKIES")]
    secure_cookies: bool,

    /// Backend request timeout in seconds
    #[arg(long, default_value = "10")]
    upstream_timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,
}

/// Shared application state: configuration plus the backend API handle.
pub struct AppState {
    pub config: AppConfig,
    pub backend: Arc<dyn Backend>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.json_logs);

    let config = AppConfig {
        listen: cli.listen,
        api_url: cli.api_url,
        secure_cookies: cli.secure_cookies,
        upstream_timeout: Duration::from_secs(cli.upstream_timeout),
        ..AppConfig::default()
    };

    let backend = BackendClient::new(&config.api_url, config.upstream_timeout)
        .context("building backend API client")?;
    let state = Arc::new(AppState { config: config.clone(), backend: Arc::new(backend) });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;

    tracing::info!(addr = %config.listen, api = %config.api_url, "coursechat gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    tracing::info!("gateway shutdown complete");
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth::routes::router())
        .merge(api::pages::routes::router())
        .merge(api::courses::routes::router())
        .merge(api::groups::routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
