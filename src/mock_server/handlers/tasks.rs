//! Task endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};

use super::{data, invalid_field, no_content, not_found, WindowQuery};
use crate::mock_server::state::SharedState;
use crate::{TaskCreateDto, TaskUpdateDto};

/// GET /api/data/tasks
pub async fn list_tasks(
    State(state): State<SharedState>,
    Query(window): Query<WindowQuery>,
) -> Response {
    let state = state.read().await;
    let tasks = window.apply(state.list_tasks(None));
    data(StatusCode::OK, tasks)
}

/// GET /api/data/tasks/{id}
pub async fn get_task(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.tasks.get(&id) {
        Some(task) => data(StatusCode::OK, task),
        None => not_found("Task", &id),
    }
}

/// POST /api/data/projects/{id}/tasks
pub async fn create_task(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
    Json(body): Json<TaskCreateDto>,
) -> Response {
    if body.name.trim().is_empty() {
        return invalid_field("name", "Name is required");
    }

    let mut state = state.write().await;

    match state.create_task(&project_id, body) {
        Some(task) => data(StatusCode::CREATED, task),
        None => not_found("Project", &project_id),
    }
}

/// PUT /api/data/tasks/{id}
pub async fn update_task(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<TaskUpdateDto>,
) -> Response {
    let mut state = state.write().await;

    match state.update_task(&id, body) {
        Some(task) => data(StatusCode::OK, task),
        None => not_found("Task", &id),
    }
}

/// DELETE /api/data/tasks/{id}
pub async fn delete_task(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;

    match state.tasks.remove(&id) {
        Some(_) => no_content(),
        None => not_found("Task", &id),
    }
}
