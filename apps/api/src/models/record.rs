use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// One row of the `generated_ideas` audit table. Written once per successful
/// generation and never read back by the service itself.
#[derive(Debug, Clone, FromRow)]
pub struct GeneratedIdeaRecord {
    pub id: i32,
    pub domain: String,
    pub skill_level: String,
    pub project_type: String,
    pub generated_content: Value,
    pub created_at: Option<DateTime<Utc>>,
}
