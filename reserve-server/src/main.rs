mod config;
mod error;
mod state;
mod api;

use std::net::SocketAddr;
use std::sync::Arc;

use reserve_core::record::memory::InMemoryUserStore;
use reserve_core::reserve::service::ReserveService;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reserve_server=info,reserve_core=info,tower_http=info")),
        )
        .init();

    tracing::info!("Reserve Server starting...");

    // Load .env file if present (non-fatal if missing).
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("no .env file loaded: {e}");
    }

    let config = Config::from_env();
    tracing::info!(
        http_port = config.http_port,
        leaf_tag = %config.leaf_tag,
        branch_tag = %config.branch_tag,
        "configuration loaded"
    );

    // The tree is built once here and never mutated while serving.
    let reserve = ReserveService::with_scheme(InMemoryUserStore::sample(), config.scheme());
    let state = Arc::new(AppState { reserve });

    let router = api::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind HTTP listener");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "Reserve Server running");

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "Axum server error");
        std::process::exit(1);
    }
}
