mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::{DetailRecord, RawListing};

/// Which listing endpoint a search goes through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRequest {
    /// `filter.php?i=<ingredient>`
    ByIngredient(String),
    /// `filter.php?c=<category>`
    ByCategory(String),
    /// `search.php?s=` with an empty term
    Everything,
}

/// Read-only access to a recipe data provider
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch the listings for a search. `meals: null` yields an empty vec.
    async fn list(&self, request: &ListingRequest) -> Result<Vec<RawListing>, SearchError>;

    /// Fetch the full record for one meal, `None` when the id is unknown.
    async fn lookup(&self, id: &str) -> Result<Option<DetailRecord>, SearchError>;

    /// Enumerate category names in provider order.
    async fn categories(&self) -> Result<Vec<String>, SearchError>;
}
