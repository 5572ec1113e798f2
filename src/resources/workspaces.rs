//! Workspace and identity endpoints.

use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{WorkSpaceDto, WorkSpaceUserInfoDto};

#[derive(Debug, Clone, Copy)]
pub struct Workspaces<'a> {
    client: &'a PmClient,
}

impl<'a> Workspaces<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    /// Workspaces the current user can access.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<ApiResult<Vec<WorkSpaceDto>>> {
        self.client.get("workspaces").await
    }

    /// The user the API key belongs to.
    #[tracing::instrument(skip(self))]
    pub async fn me(&self) -> Result<ApiResult<WorkSpaceUserInfoDto>> {
        self.client.get("me").await
    }
}
