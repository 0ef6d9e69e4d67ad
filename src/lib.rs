pub mod commands;
pub mod modules;
pub mod schema;
pub mod shared;

use std::sync::Arc;

use anyhow::Context;
use commands::{build_router, AppState, Repositories};
use modules::identity::TokenDecoder;
use shared::{AppConfig, Database};

/// Builds the application on top of Postgres and serves it until the
/// listener fails.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let database = Arc::new(
        Database::new(&config.database).context("Failed to initialize database pool")?,
    );

    // Migrations are blocking Diesel work
    let migrator = Arc::clone(&database);
    tokio::task::spawn_blocking(move || migrator.run_migrations())
        .await
        .context("Migration task panicked")?
        .context("Failed to run database migrations")?;

    let state = AppState::new(
        Repositories::postgres(database),
        TokenDecoder::new(&config.auth),
    );
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;

    log::info!("Movie catalog listening on {}", config.server.bind_address);
    axum::serve(listener, router)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
