//! HTTP server initialization and runtime setup.
//!
//! Opens the store, builds the service, and runs the Axum server until a
//! shutdown signal arrives.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlMappingRepository;
use crate::infrastructure::persistence::{InMemoryUrlMappingRepository, PgUrlMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool using the configured connection string and pool settings.
///
/// # Errors
///
/// Returns an error if the connection string is missing or malformed, or if
/// the first connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres storage backend")?;

    let mut options =
        PgConnectOptions::from_str(database_url).context("Invalid DATABASE_URL")?;

    if let Some(ref name) = config.database_name {
        options = options.database(name);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Opens the configured store and makes sure its schema exists.
///
/// The returned handle lives for the rest of the process and is shared by
/// every request.
pub async fn open_repository(config: &Config) -> Result<Arc<dyn UrlMappingRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            let repository = PgUrlMappingRepository::with_table(Arc::new(pool), &config.url_table)?;
            repository
                .ensure_schema()
                .await
                .context("Failed to prepare url mapping table")?;
            tracing::info!(table = %repository.table(), "Url mapping table ready");

            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; mappings are lost on restart");
            Ok(Arc::new(InMemoryUrlMappingRepository::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_repository(&config).await?;

    let state = AppState::from_repository(repository, config.code_max_attempts);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
