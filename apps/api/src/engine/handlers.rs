//! Axum route handlers for the Generation API.

use std::collections::HashMap;

use axum::{
    extract::{FromRequest, Request, State},
    http::header,
    Form, Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{Map, Value};
use tracing::info;

use crate::audit::spawn_record;
use crate::engine::generator::generate_project;
use crate::errors::AppError;
use crate::models::idea::{IdeaInput, Labelled, ProjectIdea};
use crate::state::AppState;

/// POST /api/generate
///
/// Validates the four preferences, assembles an idea and returns it.
/// The audit write runs detached and cannot affect the response.
pub async fn handle_generate(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ProjectIdea>, AppError> {
    let body = read_body(request).await?;
    let input = IdeaInput::from_json(&body)?;

    let mut rng = match state.config.generator_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let idea = generate_project(&input, &mut rng);

    info!(
        domain = input.domain.as_str(),
        skill_level = input.skill_level.as_str(),
        project_type = input.project_type.as_str(),
        "Generated idea \"{}\"",
        idea.title
    );

    spawn_record(state.audit.clone(), input, idea.clone());

    Ok(Json(idea))
}

/// Decodes the request body by content type. JSON and urlencoded forms are
/// parsed; any other body is read as an empty object so validation names
/// the first missing field.
async fn read_body(request: Request) -> Result<Value, AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") || content_type.contains("+json") {
        let Json(body) = Json::<Value>::from_request(request, &())
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text(), None))?;
        Ok(body)
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text(), None))?;
        Ok(Value::Object(
            fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
        ))
    } else {
        Ok(Value::Object(Map::new()))
    }
}
