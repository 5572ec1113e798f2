//! Mock ProjectManager API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! ProjectManager API for integration and end-to-end testing. Unlike wiremock
//! which mocks at the HTTP level per-test, this server maintains state across
//! requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use pmapi::mock_server::MockServer;
//! use pmapi::PmClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = PmClient::new("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = client.projects().get("project-alpha").await.unwrap();
//!     assert_eq!(project.data().unwrap().name.as_deref(), Some("Website Relaunch"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockState, SharedState};
