// src/server/routes.rs
// =============================================================================
// Request handlers.
//
// The `type` query parameter is parsed into a View before anything else
// happens, so an unknown name is a 400 and never costs an upstream call.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::state::AppState;
use crate::error::ProjectError;
use crate::projects::{summarize, ProjectSummary, View};

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    #[serde(rename = "type")]
    pub view: Option<String>,
}

/// GET /api/projects?type=<view>
///
/// A missing `type` means the landing view (featured).
pub async fn projects_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<ProjectSummary>>, ProjectError> {
    let view = match query.view.as_deref() {
        Some(name) => name.parse::<View>()?,
        None => View::default(),
    };

    let selected = state.source.fetch_view(view).await?;
    debug!("Serving {} project(s) for '{}' view", selected.len(), view);

    Ok(Json(summarize(&selected, view)))
}
