use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{ListingRequest, RecipeApi};
use crate::config::FinderConfig;
use crate::error::SearchError;
use crate::model::{CategoryEntry, DetailRecord, MealsEnvelope, RawListing};

/// HTTP client for TheMealDB's v1 JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, SearchError> {
        Self::with_timeout(config, config.timeout_duration())
    }

    /// Create a client from configuration with an explicit request timeout,
    /// overriding the whole-second `timeout` setting
    pub fn with_timeout(
        config: &FinderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(MealDbClient {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let envelope = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<MealsEnvelope<T>>()
            .await?;

        Ok(envelope.into_vec())
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn list(&self, request: &ListingRequest) -> Result<Vec<RawListing>, SearchError> {
        match request {
            ListingRequest::ByIngredient(ingredient) => {
                self.get_meals("filter.php", &[("i", ingredient.as_str())])
                    .await
            }
            ListingRequest::ByCategory(category) => {
                self.get_meals("filter.php", &[("c", category.as_str())])
                    .await
            }
            ListingRequest::Everything => self.get_meals("search.php", &[("s", "")]).await,
        }
    }

    async fn lookup(&self, id: &str) -> Result<Option<DetailRecord>, SearchError> {
        let meals: Vec<DetailRecord> = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    async fn categories(&self) -> Result<Vec<String>, SearchError> {
        let entries: Vec<CategoryEntry> = self.get_meals("list.php", &[("c", "list")]).await?;
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MealDbClient::with_base_url("http://localhost:1234/api/");
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }

    #[test]
    fn test_new_from_default_config() {
        let client = MealDbClient::new(&FinderConfig::default()).unwrap();
        assert_eq!(client.base_url(), crate::config::DEFAULT_BASE_URL);
    }
}
