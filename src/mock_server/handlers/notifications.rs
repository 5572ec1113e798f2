//! Notification endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use super::{data, not_found};
use crate::mock_server::state::SharedState;
use crate::NotificationCountDto;

/// Query parameters for listing notifications.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsQuery {
    pub limit: Option<usize>,
    pub asc: Option<bool>,
}

/// GET /api/data/notifications
pub async fn list_notifications(
    State(state): State<SharedState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Response {
    let state = state.read().await;

    let mut notifications: Vec<_> = state.notifications.values().cloned().collect();
    if !query.asc.unwrap_or(true) {
        notifications.reverse();
    }
    notifications.truncate(query.limit.unwrap_or(usize::MAX));

    data(StatusCode::OK, notifications)
}

/// GET /api/data/notifications/count
pub async fn count_notifications(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    let count = NotificationCountDto {
        count: Some(state.unread_count()),
    };
    data(StatusCode::OK, count)
}

/// POST /api/data/notifications/{id}/markread
pub async fn mark_notification_read(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    set_read(state, id, true).await
}

/// POST /api/data/notifications/{id}/markunread
pub async fn mark_notification_unread(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    set_read(state, id, false).await
}

async fn set_read(state: SharedState, id: String, read: bool) -> Response {
    let mut state = state.write().await;

    match state.set_read(&id, read) {
        Some(notification) => data(StatusCode::OK, notification),
        None => not_found("Notification", &id),
    }
}
