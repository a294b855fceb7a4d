use std::sync::Arc;

use crate::audit::AuditSink;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where successful generations are logged. Postgres when configured,
    /// otherwise tracing output only.
    pub audit: Arc<dyn AuditSink>,
}
