use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed validation. `field` names the first offending
    /// field, or is `None` when the body is not an object at all.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>, field: Option<&'static str>) -> Self {
        AppError::Validation {
            message: message.into(),
            field,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, field } => {
                let body = match field {
                    Some(field) => json!({ "message": message, "field": field }),
                    None => json!({ "message": message }),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                internal_error()
            }
        }
    }
}

/// Turns a handler panic into the same opaque 500 as any other internal error.
/// Installed on the router through tower-http's `CatchPanicLayer`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_field() {
        let response = AppError::validation("Required", Some("domain")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Required");
        assert_eq!(body["field"], "domain");
    }

    #[tokio::test]
    async fn test_validation_without_field_omits_key() {
        let response =
            AppError::validation("Expected object, received string", None).into_response();
        let body = body_json(response).await;
        assert!(body.get("field").is_none());
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_opaque_500() {
        use axum::{body::Body, http::Request, routing::get, Router};
        use tower::ServiceExt;
        use tower_http::catch_panic::CatchPanicLayer;

        async fn boom() -> &'static str {
            panic!("lookup table index out of range")
        }

        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));
        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_internal_error_is_opaque() {
        let response =
            AppError::Internal(anyhow::anyhow!("table lookup exploded")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }
}
