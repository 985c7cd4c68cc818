use async_trait::async_trait;
use bearing_core::service::{ServiceConfig, ServiceError, ServiceFactory, SpecificationService};
use reqwest::Url;

use crate::client::HttpSpecificationService;

/// [`ServiceFactory`] for the `"http"` backend.
///
/// ```rust,no_run
/// use bearing_core::service::ServiceRegistry;
/// use bearing_http::HttpServiceFactory;
///
/// let mut registry = ServiceRegistry::with_local();
/// registry.register(Box::new(HttpServiceFactory));
/// ```
pub struct HttpServiceFactory;

#[async_trait]
impl ServiceFactory for HttpServiceFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    /// `config.base_url` must be an absolute `http` or `https` URL. Relative
    /// bases such as `/api` have to be resolved against a backend origin
    /// before they reach this factory.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn SpecificationService>, ServiceError> {
        let url = Url::parse(&config.base_url).map_err(|e| {
            ServiceError::Configuration(format!("invalid base url '{}': {e}", config.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ServiceError::Configuration(format!(
                "unsupported scheme '{}' in base url '{}'",
                url.scheme(),
                config.base_url
            )));
        }

        Ok(Box::new(HttpSpecificationService::new(&config.base_url)))
    }
}
