//! Notification endpoints.

use super::segment;
use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{NotificationCountDto, NotificationDto, NotificationQuery};

/// Notifications for the current user.
#[derive(Debug, Clone, Copy)]
pub struct Notifications<'a> {
    client: &'a PmClient,
}

impl<'a> Notifications<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &NotificationQuery) -> Result<ApiResult<Vec<NotificationDto>>> {
        self.client.get_with_query("notifications", query).await
    }

    /// Number of unread notifications.
    #[tracing::instrument(skip(self))]
    pub async fn count(&self) -> Result<ApiResult<NotificationCountDto>> {
        self.client.get("notifications/count").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_read(&self, notification_id: &str) -> Result<ApiResult<NotificationDto>> {
        let path = format!("notifications/{}/markread", segment(notification_id)?);
        self.client.post_empty(&path).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_unread(&self, notification_id: &str) -> Result<ApiResult<NotificationDto>> {
        let path = format!("notifications/{}/markunread", segment(notification_id)?);
        self.client.post_empty(&path).await
    }
}
