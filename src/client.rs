//! ProjectManager API client.
//!
//! Shared sender behind every resource client. Holds the injected
//! [`Transport`] and applies the envelope contract to each response.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::envelope::ApiResult;
use crate::error::Result;
use crate::resources::{
    Integrations, Notifications, Projects, Resources, Tags, Tasks, Timesheets, Workspaces,
};
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// Prefix of every data endpoint, relative to the base URL.
const DATA_PREFIX: &str = "api/data/";

/// ProjectManager API client.
///
/// Resource areas hang off accessor methods such as [`PmClient::tasks`].
///
/// This struct is cheaply cloneable; clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use pmapi::PmClient;
///
/// # async fn example() -> pmapi::Result<()> {
/// // Create from environment variables
/// let client = PmClient::from_env()?;
///
/// // Or configure manually
/// let client = PmClient::new("your-api-key", "https://api.projectmanager.com")?;
/// let tasks = client.tasks().list(&Default::default()).await?;
/// println!("success: {}", tasks.success());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PmClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for PmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PmClient").finish_non_exhaustive()
    }
}

impl PmClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `PM_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    /// Create a client with the provided API key and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key, base_url)?)
    }

    /// Create a client over the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self)
    }

    pub fn resources(&self) -> Resources<'_> {
        Resources::new(self)
    }

    pub fn timesheets(&self) -> Timesheets<'_> {
        Timesheets::new(self)
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    pub fn integrations(&self) -> Integrations<'_> {
        Integrations::new(self)
    }

    pub fn tags(&self) -> Tags<'_> {
        Tags::new(self)
    }

    pub fn workspaces(&self) -> Workspaces<'_> {
        Workspaces::new(self)
    }

    /// Send a request and wrap the response in an envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when a 2xx body does not
    /// decode as `T`. A non-2xx status is a failed envelope, not an error.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<ApiResult<T>> {
        let response = self.transport.send(request).await?;
        let result = ApiResult::from_response(response.status, &response.body)?;
        if result.has_error() {
            tracing::debug!(status = response.status, "request failed");
        }
        Ok(result)
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResult<T>> {
        self.execute(ApiRequest::new(Method::GET, data_path(path)))
            .await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::GET, data_path(path)).with_query(query)?;
        self.execute(request).await
    }

    /// Make a POST request with JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::POST, data_path(path)).with_json(body)?;
        self.execute(request).await
    }

    /// Make a POST request without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResult<T>> {
        self.execute(ApiRequest::new(Method::POST, data_path(path)))
            .await
    }

    /// Make a PUT request with JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::PUT, data_path(path)).with_json(body)?;
        self.execute(request).await
    }

    /// Make a DELETE request with query parameters.
    pub async fn delete_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::DELETE, data_path(path)).with_query(query)?;
        self.execute(request).await
    }

    /// Make a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResult<T>> {
        self.execute(ApiRequest::new(Method::DELETE, data_path(path)))
            .await
    }
}

fn data_path(path: &str) -> String {
    format!("{DATA_PREFIX}{}", path.trim_start_matches('/'))
}
