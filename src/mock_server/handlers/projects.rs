//! Project endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;

use super::{data, invalid_field, no_content, not_found, WindowQuery};
use crate::mock_server::state::SharedState;
use crate::{ProjectCreateDto, ProjectStatusDto, ProjectUpdateDto};

/// Query parameters for deleting a project.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectQuery {
    pub hard_delete: Option<bool>,
}

/// GET /api/data/projects
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(window): Query<WindowQuery>,
) -> Response {
    let state = state.read().await;
    let projects = window.apply(state.projects.values().collect());
    data(StatusCode::OK, projects)
}

/// GET /api/data/projects/{id}
pub async fn get_project(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.projects.get(&id) {
        Some(project) => data(StatusCode::OK, project),
        None => not_found("Project", &id),
    }
}

/// POST /api/data/projects
pub async fn create_project(
    State(state): State<SharedState>,
    Json(body): Json<ProjectCreateDto>,
) -> Response {
    if body.name.trim().is_empty() {
        return invalid_field("name", "Name is required");
    }

    let mut state = state.write().await;
    let project = state.create_project(body);
    data(StatusCode::CREATED, project)
}

/// PUT /api/data/projects/{id}
pub async fn update_project(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<ProjectUpdateDto>,
) -> Response {
    let mut state = state.write().await;

    if state.update_project(&id, body) {
        no_content()
    } else {
        not_found("Project", &id)
    }
}

/// DELETE /api/data/projects/{id}
pub async fn delete_project(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteProjectQuery>,
) -> Response {
    let mut state = state.write().await;

    // A soft delete only flags the project as archived.
    let removed = if params.hard_delete.unwrap_or(false) {
        state.delete_project(&id)
    } else {
        match state.projects.get_mut(&id) {
            Some(project) => {
                project.status = Some(ProjectStatusDto {
                    name: Some("Deleted".to_string()),
                    is_deleted: Some(true),
                    ..Default::default()
                });
                true
            }
            None => false,
        }
    };

    if removed {
        no_content()
    } else {
        not_found("Project", &id)
    }
}
