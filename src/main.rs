use anyhow::Context;
use log::{info, warn};
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod db;
mod error;
mod models;
mod services;
mod utils;

use config::Config;
use db::{MemoryStore, PgStore, Store};
use models::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing; also picks up `log` records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vaxsites=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    match config.database_url.clone() {
        Some(url) => {
            let store = PgStore::connect(&url, config.database_max_connections)
                .await
                .context("Failed to connect to Postgres")?;
            store.migrate().await.context("Failed to run migrations")?;
            serve(config, store).await
        }
        None => {
            warn!("DATABASE_URL not set, records will only live in memory");
            serve(config, MemoryStore::new()).await
        }
    }
}

async fn serve<S: Store>(config: Config, store: S) -> anyhow::Result<()> {
    let address = config.address()?;
    let app = api::create_router(AppState::new(store, config.session));

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
