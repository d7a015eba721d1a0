use std::sync::Arc;
use std::time::Duration;

use crate::api::{MealDbClient, RecipeApi};
use crate::classify::{DurationBucket, Mood};
use crate::config::FinderConfig;
use crate::filter::RecipeFilter;
use crate::model::EnrichedRecipe;
use crate::pipeline::run_search;
use crate::query::SearchQuery;
use crate::SearchError;

/// Builder for configuring and executing a recipe search
#[derive(Default)]
pub struct RecipeSearchBuilder {
    ingredient: Option<String>,
    category: Option<String>,
    mood: Option<Mood>,
    duration: Option<DurationBucket>,
    limit: Option<usize>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    config: Option<FinderConfig>,
    api: Option<Arc<dyn RecipeApi>>,
}

impl RecipeSearchBuilder {
    /// Search by main ingredient
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("chicken");
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    /// Search by category, or narrow an ingredient search to one category.
    /// `"All"` means no restriction.
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .category("Seafood");
    /// ```
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep only recipes tagged with this mood
    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Keep only recipes in this duration bucket
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{DurationBucket, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("rice")
    ///     .duration(DurationBucket::Quick);
    /// ```
    pub fn duration(mut self, duration: DurationBucket) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Maximum number of listings to enrich (default 30)
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Point the search at a different API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests, with sub-second precision
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("chicken")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Start from an explicit configuration instead of `FinderConfig::load()`
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom API implementation. Overrides `base_url` and `timeout`.
    pub fn api(mut self, api: Arc<dyn RecipeApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Build and execute the search
    ///
    /// # Returns
    /// The enriched recipes that pass the mood, duration and category
    /// filters, in listing order
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - The limit is zero
    /// - Configuration cannot be loaded
    /// - The listing query returns nothing or fails
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipes = RecipeSearch::builder()
    ///     .ingredient("chicken")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<EnrichedRecipe>, SearchError> {
        let mut config = match self.config {
            Some(config) => config,
            None => FinderConfig::load()?,
        };
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(limit) = self.limit {
            config.max_results = limit;
        }
        let timeout = self.timeout.or_else(|| config.timeout_duration());

        let api: Arc<dyn RecipeApi> = match self.api {
            Some(api) => api,
            None => Arc::new(MealDbClient::with_timeout(&config, timeout)?),
        };

        let query = SearchQuery::new(self.ingredient.as_deref(), self.category.as_deref());
        let recipes = run_search(api.as_ref(), &query, config.max_results).await?;

        let mut filter = RecipeFilter::new();
        filter.mood = self.mood;
        filter.duration = self.duration;

        Ok(filter.apply(&recipes).into_iter().cloned().collect())
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
