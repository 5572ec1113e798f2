//! Resource endpoints.

use super::segment;
use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{ResourceCreateDto, ResourceDto, ResourceUpdateDto};
use crate::query::QueryOptions;

/// People and equipment that can be assigned work.
#[derive(Debug, Clone, Copy)]
pub struct Resources<'a> {
    client: &'a PmClient,
}

impl<'a> Resources<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &QueryOptions) -> Result<ApiResult<Vec<ResourceDto>>> {
        self.client.get_with_query("resources", query).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, resource_id: &str) -> Result<ApiResult<ResourceDto>> {
        let path = format!("resources/{}", segment(resource_id)?);
        self.client.get(&path).await
    }

    /// Create a resource. The server sends an invitation when an email is set.
    #[tracing::instrument(skip(self, body))]
    pub async fn create(&self, body: &ResourceCreateDto) -> Result<ApiResult<ResourceDto>> {
        self.client.post("resources", body).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn update(
        &self,
        resource_id: &str,
        body: &ResourceUpdateDto,
    ) -> Result<ApiResult<ResourceDto>> {
        let path = format!("resources/{}", segment(resource_id)?);
        self.client.put(&path, body).await
    }
}
