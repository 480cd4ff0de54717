mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use civicpulse_aggregator::{AggregatorClient, PostStore};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = civicpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = AggregatorClient::new(
        &config.aggregator_url,
        Duration::from_secs(config.fetch_timeout_secs),
        config.fetch_limit,
    );
    let store = Arc::new(PostStore::new(client));

    // Warm the corpus in the background so the dashboard has data on first
    // load without blocking server startup.
    let warm_store = Arc::clone(&store);
    let default_query = config.default_query.clone();
    tokio::spawn(async move { warm_store.ensure_initial_fetch(&default_query).await });

    let app = build_app(AppState { store });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "civicpulse-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
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

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
