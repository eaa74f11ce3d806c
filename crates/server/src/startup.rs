use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Resolve the storage adapter selected by configuration.
///
/// The database connection lives for the rest of the process.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("storage.backend = memory; projects are lost on restart");
            Ok(AppState::in_memory())
        }
        StorageBackend::Database => {
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg).await?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await?;
                info!("database migrations applied");
            }
            Ok(AppState::with_database(db))
        }
    }
}

/// Router with CORS and request tracing applied.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Serve with an already validated configuration.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "project-manage server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
