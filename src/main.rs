//! Catalog Views - HTTP server entry point
//!
//! Serves the demo catalog through the cached view layer.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_views::api::create_router;
use catalog_views::catalog::InMemoryCatalog;
use catalog_views::flags::{FeatureFlags, StaticFlags, UnleashFlags, UnleashSettings};
use catalog_views::{spawn_cleanup_task, spawn_flag_refresh_task, AppState, Config};

/// Main entry point for the catalog views server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the flag resolver (toggle service or static set) and start refreshing it
/// 4. Wire repositories, assembler and view cache
/// 5. Start background cache sweep
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_views=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Catalog Views Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: items_per_page={}, cache_sliding={}s, cache_max_entries={}, port={}",
        config.items_per_page, config.cache_sliding_secs, config.cache_max_entries, config.server_port
    );

    let mut background: Vec<JoinHandle<()>> = Vec::new();

    // One resolver for the whole process
    let flags: Arc<dyn FeatureFlags> = match UnleashSettings::from_config(&config) {
        Some(settings) => {
            info!("Using toggle service at {}", settings.api_url);
            let unleash = Arc::new(UnleashFlags::new(settings)?);
            unleash.refresh_or_warn().await;
            background.push(spawn_flag_refresh_task(
                unleash.clone(),
                config.flag_refresh_interval,
            ));
            unleash
        }
        None => {
            info!("No toggle service configured, static flags: {:?}", config.enabled_flags);
            Arc::new(StaticFlags::new(config.enabled_flags.clone()))
        }
    };

    let catalog = Arc::new(InMemoryCatalog::seeded());
    let state = AppState::from_config(&config, catalog, flags);
    info!("View cache initialized");

    background.push(spawn_cleanup_task(
        state.views.cache().store(),
        config.cleanup_interval,
    ));
    info!("Background cache sweep started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(background))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then aborts background tasks.
async fn shutdown_signal(background: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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

    for handle in background {
        handle.abort();
    }
    warn!("Background tasks aborted");
}
