use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::generate;
use crate::models::{GeneratedOutput, SpecificationRequest};

/// Failure of a generation or search request.
///
/// Every variant is a "generation request failed" from the user's point of
/// view; the split only exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The backend answered with a non-success status. `message` is the
    /// response body, or `API error: <status>` when the body was empty.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    /// Builds an [`ServiceError::Api`] from a status and raw body text.
    pub fn from_status(
        status: u16,
        body: &str,
    ) -> Self {
        let message = if body.trim().is_empty() {
            format!("API error: {status}")
        } else {
            body.to_string()
        };
        Self::Api { status, message }
    }
}

/// Body of a successful `/generate` response.
///
/// Both fields are optional on the wire; see [`GenerateResponse::into_output`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<GeneratedOutput> for GenerateResponse {
    fn from(output: GeneratedOutput) -> Self {
        Self {
            result: Some(output.specification),
            description: Some(output.description),
        }
    }
}

impl GenerateResponse {
    /// Converts the response into displayable output, filling a missing or
    /// blank field from the local generator's result for `request`.
    pub fn into_output(
        self,
        request: &SpecificationRequest,
    ) -> GeneratedOutput {
        let local = generate(request);
        GeneratedOutput {
            specification: non_blank(self.result).unwrap_or(local.specification),
            description: non_blank(self.description).unwrap_or(local.description),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// A backend that turns a [`SpecificationRequest`] into output strings.
#[async_trait]
pub trait SpecificationService: Send + Sync {
    /// Identifier of the backend that produced this service.
    fn backend_name(&self) -> &'static str;

    async fn generate(
        &self,
        request: &SpecificationRequest,
    ) -> Result<GenerateResponse, ServiceError>;

    /// Free-text search. The result shape is backend-defined JSON.
    async fn search(
        &self,
        query: &str,
    ) -> Result<serde_json::Value, ServiceError>;
}
