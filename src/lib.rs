pub mod api;
pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod render;

pub use api::{ListingRequest, MealDbClient, RecipeApi};
pub use builder::{RecipeSearch, RecipeSearchBuilder};
pub use classify::{classify_duration, classify_mood, DurationBucket, Mood};
pub use config::FinderConfig;
pub use error::{FailureKind, SearchError};
pub use filter::RecipeFilter;
pub use model::{DetailRecord, EnrichedRecipe, RawListing};
pub use pipeline::{Completion, PipelineState, SearchSession, DEFAULT_MAX_RESULTS};
pub use query::SearchQuery;

use log::debug;

use crate::pipeline::run_search;

/// Run a search with configuration from `recipe-finder.toml` and the
/// environment, returning every enriched recipe in listing order.
///
/// # Example
/// ```no_run
/// use recipe_finder::{search_recipes, SearchQuery};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let query = SearchQuery::new(Some("chicken"), Some("All"));
/// let recipes = search_recipes(&query).await?;
/// for recipe in recipes {
///     println!("{} ({})", recipe.title, recipe.duration);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &SearchQuery) -> Result<Vec<EnrichedRecipe>, SearchError> {
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config)?;
    debug!("Searching {} for {:?}", client.base_url(), query);

    run_search(&client, query, config.max_results).await
}

/// List the category names offered by the recipe API.
pub async fn list_categories() -> Result<Vec<String>, SearchError> {
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config)?;
    client.categories().await
}
