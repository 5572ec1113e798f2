//! Tag endpoints.

use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{TagCreateDto, TagDto};
use crate::query::QueryOptions;

#[derive(Debug, Clone, Copy)]
pub struct Tags<'a> {
    client: &'a PmClient,
}

impl<'a> Tags<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &QueryOptions) -> Result<ApiResult<Vec<TagDto>>> {
        self.client.get_with_query("tags", query).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn create(&self, body: &TagCreateDto) -> Result<ApiResult<TagDto>> {
        self.client.post("tags", body).await
    }
}
