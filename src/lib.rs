//! ProjectManager API client library.
//!
//! A Rust library for the ProjectManager REST API. Every call returns an
//! [`ApiResult`] envelope: a 2xx response carries the decoded DTO, anything
//! else carries the server's [`ErrorInfo`]. Only transport failures and
//! undecodable success bodies surface as [`PmError`].
//!
//! # Quick Start
//!
//! ```no_run
//! use pmapi::{PmClient, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> pmapi::Result<()> {
//!     // Create client from environment variables
//!     let client = PmClient::from_env()?;
//!
//!     // First ten tasks, newest first
//!     let query = QueryOptions::window(0, 10).order_by("createDate desc");
//!     let result = client.tasks().list(&query).await?;
//!
//!     match result.data() {
//!         Some(tasks) => println!("Found {} tasks", tasks.len()),
//!         None => println!("Request failed: {:?}", result.error()),
//!     }
//!
//!     // Or treat a failed envelope as an error
//!     let me = client.workspaces().me().await?.into_result()?;
//!     println!("Signed in as {:?}", me.full_name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`PmClient`] holds an injected [`Transport`] ([`HttpTransport`] by
//!   default) and turns raw responses into envelopes.
//! - Resource clients ([`Projects`], [`Tasks`], [`Resources`], ...) borrow
//!   the client and expose one method per endpoint.
//! - DTOs in [`models`] mirror server payloads; every field is optional and
//!   unknown fields are ignored.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `PM_API_KEY` (required) - Your ProjectManager API key
//! - `PM_API_URL` (optional) - Base URL (defaults to `https://api.projectmanager.com/`)
//! - `PM_TIMEOUT_SECS` (optional) - Request timeout in seconds (defaults to 300)

mod client;
mod config;
mod envelope;
mod error;
pub mod models;
mod query;
mod resources;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::PmClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use envelope::{is_success_status, ApiResult, ErrorInfo};
pub use error::{PmError, Result};
pub use query::QueryOptions;
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};

// Re-export resource clients
pub use resources::{
    Integrations, Notifications, Projects, Resources, Tags, Tasks, Timesheets, Workspaces,
};

// Re-export models
pub use models::{
    // Project types
    ProjectCreateDto,
    ProjectDto,
    ProjectPriorityDto,
    ProjectStatusDto,
    ProjectUpdateDto,
    // Task types
    TaskCreateDto,
    TaskDto,
    TaskStatusDto,
    TaskUpdateDto,
    // Resource types
    ResourceCreateDto,
    ResourceDto,
    ResourceUpdateDto,
    // Timesheet types
    TimesheetAdminTypeDto,
    TimesheetCreateDto,
    TimesheetDto,
    TimesheetUpdateDto,
    // Notification types
    NotificationCountDto,
    NotificationDto,
    NotificationQuery,
    // Integration types
    IntegrationDto,
    IntegrationProviderDto,
    // Tag and workspace types
    TagCreateDto,
    TagDto,
    WorkSpaceDto,
    WorkSpaceUserInfoDto,
};
