//! HTTP request handlers for the mock server.
//!
//! Successful responses wrap their payload as `{"data": ...}`. Failures
//! return an [`ErrorInfo`] body with a non-2xx status.

pub mod notifications;
pub mod projects;
pub mod tasks;

pub use notifications::*;
pub use projects::*;
pub use tasks::*;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::mock_server::state::SharedState;
use crate::ErrorInfo;

/// The `$top`/`$skip` window accepted by list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    #[serde(rename = "$top")]
    pub top: Option<usize>,
    #[serde(rename = "$skip")]
    pub skip: Option<usize>,
}

impl WindowQuery {
    fn apply<T: Clone>(&self, items: Vec<&T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip.unwrap_or(0))
            .take(self.top.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

/// Wrap a payload in the response envelope.
pub(crate) fn data<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(serde_json::json!({ "data": payload }))).into_response()
}

/// A successful response with no payload.
pub(crate) fn no_content() -> Response {
    (StatusCode::OK, Json(serde_json::json!({}))).into_response()
}

pub(crate) fn error(status: StatusCode, info: ErrorInfo) -> Response {
    (status, Json(info)).into_response()
}

/// A 400 response carrying one field validation error.
pub(crate) fn invalid_field(field: &str, message: &str) -> Response {
    let mut validation_errors = serde_json::Map::new();
    validation_errors.insert(field.to_string(), message.into());
    error(
        StatusCode::BAD_REQUEST,
        ErrorInfo {
            validation_errors: Some(validation_errors),
            ..ErrorInfo::new("Validation failed")
        },
    )
}

pub(crate) fn not_found(kind: &str, id: &str) -> Response {
    error(
        StatusCode::NOT_FOUND,
        ErrorInfo::new(format!("{kind} '{id}' not found")),
    )
}

/// Reject requests that lack the configured bearer token.
pub async fn require_token(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let required = state.read().await.required_token.clone();

    if let Some(token) = required {
        let expected = format!("Bearer {token}");
        let presented = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if presented != Some(expected.as_str()) {
            return error(StatusCode::UNAUTHORIZED, ErrorInfo::new("Invalid API key"));
        }
    }

    next.run(request).await
}
