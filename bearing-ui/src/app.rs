//! Wiring shared by the desktop form and the headless subcommands.

use std::sync::Arc;

use anyhow::{Context, Result};
use bearing_core::service::{self, ServiceRegistry, SpecificationService};
use bearing_core::{FormAction, GeneratedOutput, SpecificationRequest};
use bearing_http::HttpServiceFactory;
use tracing::{debug, warn};

use crate::config::AppConfig;

/// Registry with every backend this binary ships.
pub fn build_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::with_local();
    registry.register(Box::new(HttpServiceFactory));
    registry
}

/// Creates the backend selected by `config`.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn SpecificationService>> {
    let service_config = config.service_config();
    debug!(
        backend = %service_config.backend,
        base_url = %service_config.base_url,
        "creating specification service"
    );

    build_registry()
        .create(&service_config)
        .await
        .with_context(|| format!("cannot start '{}' backend", service_config.backend))
}

/// Outcome of a headless generate: the text to print and, when the backend
/// failed and a fallback was substituted, the error that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub output: GeneratedOutput,
    pub warning: Option<String>,
}

/// Runs one submission the same way the form does.
///
/// # Errors
/// Fails when the backend call fails and no fallback is configured.
pub async fn generate(
    service: &dyn SpecificationService,
    request: &SpecificationRequest,
    fallback_on_error: bool,
) -> Result<GenerateOutcome> {
    // One submission per run, so its number is never compared.
    match service::submit(service, request, fallback_on_error, 0).await {
        FormAction::SubmitSucceeded { output, .. } => Ok(GenerateOutcome {
            output,
            warning: None,
        }),
        FormAction::SubmitFailed {
            message,
            fallback: Some(output),
            ..
        } => {
            warn!(%message, "showing locally generated specification");
            Ok(GenerateOutcome {
                output,
                warning: Some(message),
            })
        }
        FormAction::SubmitFailed { message, .. } => {
            anyhow::bail!("generation request failed: {message}")
        }
        other => anyhow::bail!("unexpected submission result: {other:?}"),
    }
}

/// Pretty-printed search response.
pub async fn search(
    service: &dyn SpecificationService,
    query: &str,
) -> Result<String> {
    let body = service
        .search(query)
        .await
        .with_context(|| format!("search for '{query}' failed"))?;
    serde_json::to_string_pretty(&body).context("cannot format search response")
}
