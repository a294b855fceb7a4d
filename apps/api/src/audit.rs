//! Best-effort audit log of generated ideas.
//!
//! Writes are detached from the request: the handler spawns them and never
//! waits, and a failed write is logged and dropped.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::models::idea::{IdeaInput, Labelled, ProjectIdea};
use crate::models::record::GeneratedIdeaRecord;

/// Destination for audit records. Carried in `AppState` as `Arc<dyn AuditSink>`.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, input: &IdeaInput, idea: &ProjectIdea) -> Result<()>;
}

/// The stored blob: request fields and generated document side by side in one object.
#[derive(Serialize)]
struct AuditPayload<'a> {
    #[serde(flatten)]
    input: &'a IdeaInput,
    #[serde(flatten)]
    idea: &'a ProjectIdea,
}

pub fn audit_payload(input: &IdeaInput, idea: &ProjectIdea) -> Result<serde_json::Value> {
    serde_json::to_value(AuditPayload { input, idea }).context("Failed to serialize audit payload")
}

// ────────────────────────────────────────────────────────────────────────────
// PgAuditSink
// ────────────────────────────────────────────────────────────────────────────

pub struct PgAuditSink {
    pool: PgPool,
}

impl PgAuditSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditSink for PgAuditSink {
    async fn record(&self, input: &IdeaInput, idea: &ProjectIdea) -> Result<()> {
        let content = audit_payload(input, idea)?;

        let row = sqlx::query_as::<_, GeneratedIdeaRecord>(
            r#"
            INSERT INTO generated_ideas (domain, skill_level, project_type, generated_content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, domain, skill_level, project_type, generated_content, created_at
            "#,
        )
        .bind(input.domain.as_str())
        .bind(input.skill_level.as_str())
        .bind(input.project_type.as_str())
        .bind(&content)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert generated_ideas row")?;

        debug!(
            id = row.id,
            domain = %row.domain,
            skill_level = %row.skill_level,
            project_type = %row.project_type,
            created_at = ?row.created_at,
            "Logged generation {:?}",
            row.generated_content["title"].as_str().unwrap_or_default()
        );
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LogAuditSink — used when no database is configured
// ────────────────────────────────────────────────────────────────────────────

pub struct LogAuditSink;

#[async_trait]
impl AuditSink for LogAuditSink {
    async fn record(&self, input: &IdeaInput, idea: &ProjectIdea) -> Result<()> {
        info!(
            domain = input.domain.as_str(),
            skill_level = input.skill_level.as_str(),
            project_type = input.project_type.as_str(),
            "Generated \"{}\" (audit database not configured)",
            idea.title
        );
        Ok(())
    }
}

/// Fires the audit write on a background task. Errors never reach the caller.
pub fn spawn_record(sink: Arc<dyn AuditSink>, input: IdeaInput, idea: ProjectIdea) {
    tokio::spawn(async move {
        if let Err(e) = sink.record(&input, &idea).await {
            warn!("Failed to log generation: {e:#}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::idea::{Domain, Language, ProjectType, SkillLevel};
    use tokio::sync::mpsc;

    struct FailingSink(mpsc::UnboundedSender<()>);

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn record(&self, _input: &IdeaInput, _idea: &ProjectIdea) -> Result<()> {
            let _ = self.0.send(());
            anyhow::bail!("connection refused")
        }
    }

    fn sample() -> (IdeaInput, ProjectIdea) {
        let input = IdeaInput {
            skill_level: SkillLevel::Beginner,
            domain: Domain::WebDev,
            language: Language::JavaScript,
            project_type: ProjectType::MiniProject,
        };
        let idea = ProjectIdea {
            title: "Lite Budget Manager".into(),
            problem_statement: "p".into(),
            description: "d".into(),
            key_features: vec!["User Authentication".into()],
            tech_stack: vec!["React".into()],
            dataset_suggestions: None,
            roadmap: vec!["Planning".into()],
            folder_structure: "project-root/".into(),
            future_enhancements: vec!["Cloud Deployment".into()],
            model_name: None,
            learning_type: None,
            evaluation_metric: None,
            ml_pipeline: None,
            advanced_metadata: None,
            code_templates: None,
        };
        (input, idea)
    }

    #[test]
    fn test_payload_merges_input_and_idea() {
        let (input, idea) = sample();
        let payload = audit_payload(&input, &idea).unwrap();
        assert_eq!(payload["domain"], "Web Dev");
        assert_eq!(payload["skillLevel"], "Beginner");
        assert_eq!(payload["projectType"], "Mini Project");
        assert_eq!(payload["title"], "Lite Budget Manager");
        assert!(payload.get("modelName").is_none());
    }

    #[tokio::test]
    async fn test_log_sink_never_fails() {
        let (input, idea) = sample();
        assert!(LogAuditSink.record(&input, &idea).await.is_ok());
    }

    #[tokio::test]
    async fn test_spawned_failure_is_swallowed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (input, idea) = sample();
        spawn_record(Arc::new(FailingSink(tx)), input, idea);
        // The write was attempted; the failure stays on the background task.
        assert!(rx.recv().await.is_some());
    }
}
