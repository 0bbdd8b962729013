// src/error.rs
// =============================================================================
// Errors that can reach a caller of the project pipeline.
//
// There are only two:
// - SourceUnavailable: the upstream project source could not be reached,
//   answered with a non-success status, or sent a body we could not decode
// - InvalidView: someone asked for a view name outside the fixed set
//
// Both are non-fatal. The HTTP layer turns them into JSON error bodies
// (see the IntoResponse impl below); the page-render layer turns
// SourceUnavailable into a "coming soon" placeholder.
//
// Configuration and startup problems are not in here - those are reported
// with anyhow in main.rs, the same way the CLI reports everything else.
// =============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::projects::View;

#[derive(Error, Debug)]
pub enum ProjectError {
    /// Network or HTTP failure while talking to the upstream source
    #[error("project source unavailable: {0}")]
    SourceUnavailable(String),

    /// View name outside the fixed set
    #[error("invalid view '{0}', expected one of: {}", View::NAMES.join(", "))]
    InvalidView(String),
}

// Any reqwest failure (connect, status, decode) means the source is unavailable
impl From<reqwest::Error> for ProjectError {
    fn from(e: reqwest::Error) -> Self {
        ProjectError::SourceUnavailable(e.to_string())
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let (status, label) = match &self {
            ProjectError::InvalidView(_) => {
                warn!("Rejected request: {}", self);
                (StatusCode::BAD_REQUEST, "Invalid type parameter")
            }
            ProjectError::SourceUnavailable(_) => {
                error!("Failed to serve projects: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch projects")
            }
        };

        let body = json!({
            "error": label,
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
