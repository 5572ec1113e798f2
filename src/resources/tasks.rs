//! Task endpoints.

use super::segment;
use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{TaskCreateDto, TaskDto, TaskStatusDto, TaskUpdateDto};
use crate::query::QueryOptions;

/// Tasks across all projects.
#[derive(Debug, Clone, Copy)]
pub struct Tasks<'a> {
    client: &'a PmClient,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    /// List tasks matching the query.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &QueryOptions) -> Result<ApiResult<Vec<TaskDto>>> {
        self.client.get_with_query("tasks", query).await
    }

    /// Fetch a single task.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, task_id: &str) -> Result<ApiResult<TaskDto>> {
        let path = format!("tasks/{}", segment(task_id)?);
        self.client.get(&path).await
    }

    /// Create a task in a project.
    #[tracing::instrument(skip(self, body))]
    pub async fn create(&self, project_id: &str, body: &TaskCreateDto) -> Result<ApiResult<TaskDto>> {
        let path = format!("projects/{}/tasks", segment(project_id)?);
        self.client.post(&path, body).await
    }

    /// Update fields of a task and return the updated task.
    #[tracing::instrument(skip(self, body))]
    pub async fn update(&self, task_id: &str, body: &TaskUpdateDto) -> Result<ApiResult<TaskDto>> {
        let path = format!("tasks/{}", segment(task_id)?);
        self.client.put(&path, body).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, task_id: &str) -> Result<ApiResult<()>> {
        let path = format!("tasks/{}", segment(task_id)?);
        self.client.delete(&path).await
    }

    /// Task board columns for a project.
    #[tracing::instrument(skip(self))]
    pub async fn statuses(&self, project_id: &str) -> Result<ApiResult<Vec<TaskStatusDto>>> {
        let path = format!("projects/{}/tasks/statuses", segment(project_id)?);
        self.client.get(&path).await
    }
}
