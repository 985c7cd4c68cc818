use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::local::LocalServiceFactory;
use super::provider::{ServiceError, SpecificationService};

/// Which backend to start and where it lives.
///
/// | backend | base_url examples                                  |
/// |---------|----------------------------------------------------|
/// | `local` | ignored                                            |
/// | `http`  | `http://localhost:8000/api`, `https://host/api`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Backend name. Matched case-insensitively, surrounding blanks ignored.
    pub backend: String,
    /// Root that endpoint paths such as `/generate` are appended to.
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: "local".to_string(),
            base_url: "/api".to_string(),
        }
    }
}

impl ServiceConfig {
    /// `backend` in the form factories register under: trimmed, lowercase.
    pub fn backend_key(&self) -> String {
        self.backend.trim().to_ascii_lowercase()
    }
}

/// Builds one kind of [`SpecificationService`] from a [`ServiceConfig`].
#[async_trait]
pub trait ServiceFactory: Send + Sync {
    /// Lowercase name the backend is selected by.
    fn backend_name(&self) -> &'static str;

    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn SpecificationService>, ServiceError>;
}

/// The backends a binary can be started with.
///
/// The `local` backend lives in this crate and is always available through
/// [`ServiceRegistry::with_local`]; network backends are registered by the
/// crates that implement them.
pub struct ServiceRegistry {
    factories: BTreeMap<&'static str, Box<dyn ServiceFactory>>,
}

impl ServiceRegistry {
    /// A registry with no backends at all.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// A registry holding the in-process `local` backend.
    pub fn with_local() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(LocalServiceFactory));
        registry
    }

    /// Adds `factory`. A factory registered earlier under the same name is
    /// replaced.
    pub fn register(
        &mut self,
        factory: Box<dyn ServiceFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Registered backend names, sorted.
    pub fn available_backends(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Starts the backend `config` names.
    ///
    /// The service comes back shared: the desktop form hands it to every
    /// submission task.
    ///
    /// # Errors
    /// * [`ServiceError::Configuration`] when no backend goes by that name.
    /// * Any error the backend's factory returns.
    pub async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Arc<dyn SpecificationService>, ServiceError> {
        let key = config.backend_key();
        let Some(factory) = self.factories.get(key.as_str()) else {
            return Err(ServiceError::Configuration(format!(
                "no backend named '{}' (choose one of: {})",
                config.backend.trim(),
                self.available_backends().join(", ")
            )));
        };

        let service = factory.create(config).await?;
        info!(backend = factory.backend_name(), base_url = %config.base_url, "backend started");
        Ok(Arc::from(service))
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::with_local()
    }
}
