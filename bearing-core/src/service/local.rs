use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use super::factory::{ServiceConfig, ServiceFactory};
use super::provider::{GenerateResponse, ServiceError, SpecificationService};
use crate::form::Field;
use crate::generator::generate;
use crate::models::catalog::{bearing_type_options, sub_type_options};
use crate::models::{Seal, SpecificationRequest};

/// Client-side backend: no network, output straight from the generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSpecificationService;

#[async_trait]
impl SpecificationService for LocalSpecificationService {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    async fn generate(
        &self,
        request: &SpecificationRequest,
    ) -> Result<GenerateResponse, ServiceError> {
        Ok(generate(request).into())
    }

    /// Case-insensitive substring match over the catalog option lists.
    ///
    /// Returns `{"query": q, "results": [{"field": "type", "value": ...}, ...]}`.
    /// An empty query matches everything.
    async fn search(
        &self,
        query: &str,
    ) -> Result<Value, ServiceError> {
        let needle = query.trim().to_lowercase();

        let candidates = bearing_type_options()
            .into_iter()
            .map(|v| (Field::BearingType, v, v))
            .chain(sub_type_options().into_iter().map(|v| (Field::SubType, v, v)))
            .chain(
                Seal::ALL
                    .into_iter()
                    .map(|s| (Field::Seal, s.as_str(), s.to_long_str())),
            );

        let results: Vec<Value> = candidates
            .filter(|(_, value, label)| {
                value.to_lowercase().contains(&needle) || label.to_lowercase().contains(&needle)
            })
            .map(|(field, value, _)| json!({ "field": field.as_str(), "value": value }))
            .collect();

        debug!(query, hits = results.len(), "local catalog search");
        Ok(json!({ "query": query, "results": results }))
    }
}

/// [`ServiceFactory`] for the `"local"` backend.
pub struct LocalServiceFactory;

#[async_trait]
impl ServiceFactory for LocalServiceFactory {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    async fn create(
        &self,
        _config: &ServiceConfig,
    ) -> Result<Box<dyn SpecificationService>, ServiceError> {
        Ok(Box::new(LocalSpecificationService))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn values(result: &Value) -> Vec<String> {
        result["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|hit| hit["value"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn generate_matches_the_generator() {
        let request = SpecificationRequest {
            number: "NU210".to_string(),
            ..Default::default()
        };

        let response = LocalSpecificationService.generate(&request).await.unwrap();

        assert_eq!(response.into_output(&request), generate(&request));
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let result = LocalSpecificationService.search("ROLLER").await.unwrap();

        assert_eq!(
            values(&result),
            vec!["Cylindrical Roller Bearing", "Tapered Roller Bearing"]
        );
        assert_eq!(result["query"], "ROLLER");
    }

    #[tokio::test]
    async fn search_matches_seal_long_labels() {
        let result = LocalSpecificationService.search("rubber").await.unwrap();

        assert_eq!(values(&result), vec!["2RS"]);
        assert_eq!(result["results"][0]["field"], "seals");
    }

    #[tokio::test]
    async fn search_without_hits_returns_empty_list() {
        let result = LocalSpecificationService.search("needle").await.unwrap();

        assert!(values(&result).is_empty());
    }

    #[tokio::test]
    async fn empty_search_lists_whole_catalog() {
        let result = LocalSpecificationService.search("").await.unwrap();

        assert_eq!(values(&result).len(), 5 + 5 + 4);
    }

    #[tokio::test]
    async fn factory_creates_local_service() {
        let service = LocalServiceFactory
            .create(&ServiceConfig::default())
            .await
            .unwrap();

        assert_eq!(service.backend_name(), "local");
    }
}
