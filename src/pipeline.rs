//! Search and enrichment pipeline.
//!
//! A search fetches the listings for a [`SearchQuery`], then looks up every
//! listing concurrently and merges each detail record into an
//! [`EnrichedRecipe`]. A failed lookup degrades that one item; only the
//! listing call can fail the whole search.

use futures::future::join_all;
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::watch;

use crate::api::RecipeApi;
use crate::error::{FailureKind, SearchError};
use crate::filter::RecipeFilter;
use crate::model::{EnrichedRecipe, RawListing};
use crate::query::SearchQuery;

/// Upper bound on detail lookups per search
pub const DEFAULT_MAX_RESULTS: usize = 30;

/// Look up details for the first `limit` listings and enrich them.
///
/// Lookups run concurrently. The output keeps the input order no matter
/// which lookup finishes first, and always has one entry per processed
/// listing.
pub async fn enrich_listings(
    api: &dyn RecipeApi,
    listings: Vec<RawListing>,
    limit: usize,
) -> Vec<EnrichedRecipe> {
    let lookups = listings.into_iter().take(limit).map(|listing| async move {
        match api.lookup(&listing.id).await {
            Ok(Some(detail)) => {
                debug!("Enriched meal {}", listing.id);
                EnrichedRecipe::from_detail(listing, detail)
            }
            Ok(None) => {
                warn!("No detail record for meal {}, using listing only", listing.id);
                EnrichedRecipe::degraded(listing)
            }
            Err(e) => {
                warn!("Detail lookup for meal {} failed: {}", listing.id, e);
                EnrichedRecipe::degraded(listing)
            }
        }
    });

    join_all(lookups).await
}

/// Run one complete search: listing call, then enrichment.
///
/// When the query carries both an ingredient and a category, the listing
/// goes by ingredient and the enriched results are narrowed to the category.
///
/// # Errors
/// * [`SearchError::Builder`] when `limit` is zero
/// * [`SearchError::NoResults`] when the listing comes back empty
/// * [`SearchError::TransportFailure`] when the listing call fails
pub async fn run_search(
    api: &dyn RecipeApi,
    query: &SearchQuery,
    limit: usize,
) -> Result<Vec<EnrichedRecipe>, SearchError> {
    if limit == 0 {
        return Err(SearchError::Builder(
            "Result limit must be at least 1".to_string(),
        ));
    }

    let request = query.listing_request();
    debug!("Listing request: {:?}", request);

    let listings = api.list(&request).await.map_err(|e| {
        error!("Listing request {:?} failed: {}", request, e);
        e
    })?;

    if listings.is_empty() {
        info!("No recipes for {:?}", request);
        return Err(SearchError::NoResults);
    }

    let total = listings.len();
    let recipes = enrich_listings(api, listings, limit).await;
    info!(
        "Search returned {} listings, enriched {}",
        total,
        recipes.len()
    );

    match query.residual_category() {
        Some(category) => {
            let filter = RecipeFilter::new().category(category);
            let narrowed: Vec<EnrichedRecipe> =
                recipes.into_iter().filter(|r| filter.matches(r)).collect();
            debug!("{} recipes left in category {}", narrowed.len(), category);
            Ok(narrowed)
        }
        None => Ok(recipes),
    }
}

/// Observable state of a search session
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Idle,
    Fetching,
    /// May contain degraded items
    Succeeded(Vec<EnrichedRecipe>),
    Failed { kind: FailureKind, message: String },
}

impl PipelineState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PipelineState::Fetching)
    }

    pub fn recipes(&self) -> &[EnrichedRecipe] {
        match self {
            PipelineState::Succeeded(recipes) => recipes,
            _ => &[],
        }
    }
}

/// State published to subscribers, tagged with the search that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub generation: u64,
    pub state: PipelineState,
}

/// Whether a finished search was allowed to publish its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer search (or a reset) started while this one was in flight
    Superseded,
}

/// Runs searches against one API and publishes the latest result.
///
/// Each search takes a new generation number. A search whose generation is
/// no longer current when it finishes is dropped, so overlapping searches
/// resolve to the most recently started one. In-flight requests are not
/// cancelled.
pub struct SearchSession {
    api: Arc<dyn RecipeApi>,
    limit: usize,
    state: watch::Sender<SessionSnapshot>,
}

impl SearchSession {
    pub fn new(api: Arc<dyn RecipeApi>, limit: usize) -> Self {
        let (state, _) = watch::channel(SessionSnapshot {
            generation: 0,
            state: PipelineState::Idle,
        });
        SearchSession { api, limit, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PipelineState {
        self.state.borrow().state.clone()
    }

    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    pub async fn search(&self, query: &SearchQuery) -> Completion {
        let mut generation = 0;
        self.state.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.state = PipelineState::Fetching;
            generation = snapshot.generation;
        });

        let next = match run_search(self.api.as_ref(), query, self.limit).await {
            Ok(recipes) => PipelineState::Succeeded(recipes),
            Err(e) => PipelineState::Failed {
                kind: e.kind(),
                message: e.user_message().to_string(),
            },
        };

        let applied = self.state.send_if_modified(|snapshot| {
            if snapshot.generation != generation {
                return false;
            }
            snapshot.state = next;
            true
        });

        if applied {
            Completion::Applied
        } else {
            debug!("Discarding result of superseded search {}", generation);
            Completion::Superseded
        }
    }

    /// Clear results and invalidate any search still in flight
    pub fn reset(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.state = PipelineState::Idle;
        });
    }
}
