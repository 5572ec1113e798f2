//! Project endpoints.

use serde::Serialize;

use super::segment;
use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{
    ProjectCreateDto, ProjectDto, ProjectPriorityDto, ProjectStatusDto, ProjectUpdateDto,
};
use crate::query::QueryOptions;

/// Projects in the workspace.
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    client: &'a PmClient,
}

#[derive(Serialize)]
struct DeleteParams {
    #[serde(rename = "hardDelete")]
    hard_delete: bool,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    /// List projects matching the query.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &QueryOptions) -> Result<ApiResult<Vec<ProjectDto>>> {
        self.client.get_with_query("projects", query).await
    }

    /// Fetch a single project.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, project_id: &str) -> Result<ApiResult<ProjectDto>> {
        let path = format!("projects/{}", segment(project_id)?);
        self.client.get(&path).await
    }

    /// Create a project and return it as stored.
    #[tracing::instrument(skip(self, body))]
    pub async fn create(&self, body: &ProjectCreateDto) -> Result<ApiResult<ProjectDto>> {
        self.client.post("projects", body).await
    }

    /// Update fields of a project.
    #[tracing::instrument(skip(self, body))]
    pub async fn update(&self, project_id: &str, body: &ProjectUpdateDto) -> Result<ApiResult<()>> {
        let path = format!("projects/{}", segment(project_id)?);
        self.client.put(&path, body).await
    }

    /// Delete a project. A soft delete moves it to the recycle bin.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, project_id: &str, hard_delete: bool) -> Result<ApiResult<()>> {
        let path = format!("projects/{}", segment(project_id)?);
        self.client
            .delete_with_query(&path, &DeleteParams { hard_delete })
            .await
    }

    /// Project statuses defined in the workspace.
    #[tracing::instrument(skip(self))]
    pub async fn statuses(&self) -> Result<ApiResult<Vec<ProjectStatusDto>>> {
        self.client.get("projects/statuses").await
    }

    /// Project priorities defined in the workspace.
    #[tracing::instrument(skip(self))]
    pub async fn priorities(&self) -> Result<ApiResult<Vec<ProjectPriorityDto>>> {
        self.client.get("projects/priorities").await
    }
}
