//! Read-Through Cache server
//!
//! Serves the sample album catalogue through a TTL-bounded in-memory cache.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use read_through_cache::api::create_router;
use read_through_cache::store::MemoryDocumentStore;
use read_through_cache::{spawn_cleanup_task, Album, AppState, Config};

/// Main entry point for the read-through cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Seed the in-memory album store
/// 4. Build the cache and read-through layer
/// 5. Start background TTL cleanup task
/// 6. Serve HTTP until SIGINT/SIGTERM, then drop the seeded albums
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "read_through_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting read-through cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, fetch_timeout={}ms, max_entries={}, port={}, cleanup_interval={}s",
        config.cache_ttl,
        config.fetch_timeout_ms,
        config.max_entries,
        config.server_port,
        config.cleanup_interval
    );

    let store = Arc::new(MemoryDocumentStore::<Album>::new());
    if config.seed_sample_albums {
        let ids = store.insert_many(Album::samples()).await;
        info!("Seeded {} sample albums", ids.len());
    }

    let state = AppState::from_config(&config, store.clone());

    let cleanup_handle = spawn_cleanup_task(state.cache.clone(), config.cleanup_period());
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    let dropped = store.drop_all().await;
    info!("Dropped {} albums, shutdown complete", dropped);
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
