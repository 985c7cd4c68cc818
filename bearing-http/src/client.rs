use async_trait::async_trait;
use bearing_core::SpecificationRequest;
use bearing_core::service::{GenerateResponse, ServiceError, SpecificationService};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

/// [`SpecificationService`] backed by a remote API.
///
/// `base_url` must be absolute; endpoint paths are appended to it, so
/// `http://localhost:8000/api` yields `http://localhost:8000/api/generate`.
pub struct HttpSpecificationService {
    client: Client,
    base_url: String,
}

impl HttpSpecificationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(
        &self,
        path: &str,
    ) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Passes success responses through; turns anything else into
    /// [`ServiceError::Api`] carrying the body text.
    async fn check_status(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "backend returned an error status");
        Err(ServiceError::from_status(status.as_u16(), &body))
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> ServiceError {
    ServiceError::Decode(err.to_string())
}

#[async_trait]
impl SpecificationService for HttpSpecificationService {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn generate(
        &self,
        request: &SpecificationRequest,
    ) -> Result<GenerateResponse, ServiceError> {
        let url = self.endpoint("generate");
        debug!(%url, "posting generate request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(response)
            .await?
            .json::<GenerateResponse>()
            .await
            .map_err(decode)
    }

    async fn search(
        &self,
        query: &str,
    ) -> Result<Value, ServiceError> {
        let url = self.endpoint("search");
        debug!(%url, query, "sending search request");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(response)
            .await?
            .json::<Value>()
            .await
            .map_err(decode)
    }
}
