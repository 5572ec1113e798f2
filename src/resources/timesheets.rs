//! Timesheet endpoints.

use super::segment;
use crate::client::PmClient;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{TimesheetAdminTypeDto, TimesheetCreateDto, TimesheetDto, TimesheetUpdateDto};
use crate::query::QueryOptions;

/// Logged time.
#[derive(Debug, Clone, Copy)]
pub struct Timesheets<'a> {
    client: &'a PmClient,
}

impl<'a> Timesheets<'a> {
    pub(crate) fn new(client: &'a PmClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &QueryOptions) -> Result<ApiResult<Vec<TimesheetDto>>> {
        self.client.get_with_query("timesheets", query).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn create(&self, body: &TimesheetCreateDto) -> Result<ApiResult<TimesheetDto>> {
        self.client.post("timesheets", body).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn update(
        &self,
        timesheet_id: &str,
        body: &TimesheetUpdateDto,
    ) -> Result<ApiResult<TimesheetDto>> {
        let path = format!("timesheets/{}", segment(timesheet_id)?);
        self.client.put(&path, body).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, timesheet_id: &str) -> Result<ApiResult<()>> {
        let path = format!("timesheets/{}", segment(timesheet_id)?);
        self.client.delete(&path).await
    }

    /// Administrative time categories available for booking.
    #[tracing::instrument(skip(self))]
    pub async fn admin_types(&self) -> Result<ApiResult<Vec<TimesheetAdminTypeDto>>> {
        self.client.get("timesheets/admin-tasks").await
    }
}
