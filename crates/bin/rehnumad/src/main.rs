//! # rehnumad, the rehnuma daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Initialise the `SQLite` connection pool and run migrations
//! - Rebuild the content store from the CSV seed files
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rehnuma_adapter_http_axum::state::AppState;
use rehnuma_adapter_seed_csv::CsvSeedSource;
use rehnuma_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteServiceRepository, SqliteStepRepository,
};
use rehnuma_app::narration::SilentNarrator;
use rehnuma_app::services::assistant::Assistant;
use rehnuma_app::services::content_service::ContentService;
use rehnuma_app::services::seeder::Seeder;

use crate::config::Config;

const FALLBACK_FILTER: &str = "info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to initialise database")?;
    let pool = db.pool().clone();

    // Services
    let content_service = Arc::new(ContentService::new(
        SqliteServiceRepository::new(pool.clone()),
        SqliteStepRepository::new(pool),
    ));
    let assistant = Arc::new(Assistant::new(SilentNarrator));

    // Seeding completes before the listener is bound.
    if config.seed.enabled {
        let source = CsvSeedSource::new(&config.seed.dir);
        info!(dir = %source.dir().display(), "seeding content store");
        if let Err(err) = Seeder::new(source).run(&content_service).await {
            error!(
                error = %err,
                source = ?std::error::Error::source(&err),
                "seeding failed, serving an empty content store"
            );
        }
    } else {
        info!("seeding disabled, serving existing content");
    }

    // HTTP
    let state = AppState::from_arcs(content_service, assistant);
    let app = rehnuma_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "rehnumad listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("rehnumad stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();

    if let Some(err) = invalid {
        warn!(filter, error = %err, "invalid log filter, falling back to {FALLBACK_FILTER}");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => error!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
