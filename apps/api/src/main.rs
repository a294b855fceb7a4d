mod audit;
mod config;
mod db;
mod engine;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::{AuditSink, LogAuditSink, PgAuditSink};
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::{build_router, cors_layer, trace_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting IdeaForge API v{}", env!("CARGO_PKG_VERSION"));

    let audit = build_audit_sink(&config).await;

    if let Some(seed) = config.generator_seed {
        info!("Idea generator seeded with {seed}; responses are repeatable");
    }

    let state = AppState {
        config: config.clone(),
        audit,
    };

    let app = build_router(state)
        .layer(trace_layer())
        .layer(cors_layer());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Audit logging is best-effort: a missing or unreachable database downgrades
/// to log-only output instead of failing startup.
async fn build_audit_sink(config: &Config) -> Arc<dyn AuditSink> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; generations will be logged only");
        return Arc::new(LogAuditSink);
    };

    let pool = match create_pool(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            warn!("Audit database unavailable, falling back to log-only audit: {e:#}");
            return Arc::new(LogAuditSink);
        }
    };

    if let Err(e) = ensure_schema(&pool).await {
        warn!("{e:#}; audit inserts may fail");
    }

    Arc::new(PgAuditSink::new(pool))
}
