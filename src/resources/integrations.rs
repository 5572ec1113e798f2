//! Integration endpoints.

use super::segment;
use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{IntegrationDto, IntegrationProviderDto};

/// Third-party integrations.
#[derive(Debug, Clone, Copy)]
pub struct Integrations<'a> {
    client: &'a PmClient,
}

impl<'a> Integrations<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, integration_id: &str) -> Result<ApiResult<IntegrationDto>> {
        let path = format!("integrations/{}", segment(integration_id)?);
        self.client.get(&path).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn enable(&self, integration_id: &str) -> Result<ApiResult<IntegrationDto>> {
        let path = format!("integrations/{}", segment(integration_id)?);
        self.client.post_empty(&path).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn disable(&self, integration_id: &str) -> Result<ApiResult<()>> {
        let path = format!("integrations/{}", segment(integration_id)?);
        self.client.delete(&path).await
    }

    /// Every provider that can be connected, with any instances already set up.
    #[tracing::instrument(skip(self))]
    pub async fn providers(&self) -> Result<ApiResult<Vec<IntegrationProviderDto>>> {
        self.client.get("integrations/providers").await
    }
}
