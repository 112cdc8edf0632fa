//! Cache-first retrieval of the restaurant directory.
//!
//! Every query funnels through one retrieval policy: serve the local
//! store when it holds anything, otherwise go to the backend and warm
//! the store in the background. Filtered queries and facet lists are
//! in-memory projections over that result; each call re-runs the policy
//! rather than holding a working set of its own.

use async_trait::async_trait;
use tracing::debug;

use crate::api::{ApiClient, FetchError};
use crate::cache::RestaurantStore;
use crate::config::Config;
use crate::models::Restaurant;

/// Sentinel filter value meaning "do not filter on this dimension".
///
/// Consumers pass it verbatim from their "All Cuisines" / "All
/// Neighborhoods" selector entries; it is never a real facet value.
pub const WILDCARD: &str = "all";

/// Where the full restaurant list comes from when the cache is empty.
///
/// `ApiClient` is the production implementation; tests substitute
/// counting or failing doubles.
#[async_trait]
pub trait RestaurantSource: Send + Sync + 'static {
    async fn fetch_all(&self) -> Result<Vec<Restaurant>, FetchError>;
}

/// Query interface over the restaurant directory, backed by a remote
/// source and an optional persistent local store.
///
/// Holds no dataset of its own: the store owns the persisted copies and
/// every query re-reads them. An absent store simply disables caching.
pub struct RestaurantRepository<S: RestaurantSource> {
    source: S,
    store: Option<RestaurantStore>,
}

impl RestaurantRepository<ApiClient> {
    /// Build a repository from configuration: an HTTP source pointed at
    /// the configured endpoint and a store under the platform cache
    /// directory, when one is available.
    pub fn open(config: &Config) -> Result<Self, FetchError> {
        let source = ApiClient::new(config.base_url())?;
        let store = config.cache_dir().and_then(RestaurantStore::open);
        Ok(Self::new(source, store))
    }
}

impl<S: RestaurantSource> RestaurantRepository<S> {
    pub fn new(source: S, store: Option<RestaurantStore>) -> Self {
        Self { source, store }
    }

    /// Fetch the full restaurant list, cache first.
    ///
    /// A non-empty store answers without touching the network. An empty
    /// or absent store falls through to the source, whose data is handed
    /// to the caller immediately while a background task warms the
    /// store; only source failures surface.
    pub async fn fetch_all(&self) -> Result<Vec<Restaurant>, FetchError> {
        if let Some(ref store) = self.store {
            let cached = store.read_all();
            if !cached.is_empty() {
                debug!(count = cached.len(), "Serving restaurant list from local cache");
                return Ok(cached);
            }
        }

        let restaurants = self.source.fetch_all().await?;
        debug!(count = restaurants.len(), "Fetched restaurant list from source");
        self.warm_store(&restaurants);
        Ok(restaurants)
    }

    /// Look up a single restaurant by id.
    pub async fn by_id(&self, id: u32) -> Result<Restaurant, FetchError> {
        self.fetch_all()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(FetchError::NotFound(id))
    }

    /// Restaurants matching the given cuisine, in dataset order.
    pub async fn by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>, FetchError> {
        let mut restaurants = self.fetch_all().await?;
        restaurants.retain(|r| r.cuisine == cuisine);
        Ok(restaurants)
    }

    /// Restaurants in the given neighborhood, in dataset order.
    pub async fn by_neighborhood(&self, neighborhood: &str) -> Result<Vec<Restaurant>, FetchError> {
        let mut restaurants = self.fetch_all().await?;
        restaurants.retain(|r| r.neighborhood == neighborhood);
        Ok(restaurants)
    }

    /// Restaurants matching both filters; [`WILDCARD`] on either side
    /// disables that filter.
    pub async fn by_cuisine_and_neighborhood(
        &self,
        cuisine: &str,
        neighborhood: &str,
    ) -> Result<Vec<Restaurant>, FetchError> {
        let mut restaurants = self.fetch_all().await?;
        if cuisine != WILDCARD {
            restaurants.retain(|r| r.cuisine == cuisine);
        }
        if neighborhood != WILDCARD {
            restaurants.retain(|r| r.neighborhood == neighborhood);
        }
        Ok(restaurants)
    }

    /// Every distinct neighborhood, first occurrence first.
    pub async fn neighborhoods(&self) -> Result<Vec<String>, FetchError> {
        let restaurants = self.fetch_all().await?;
        Ok(distinct(restaurants.into_iter().map(|r| r.neighborhood)))
    }

    /// Every distinct cuisine, first occurrence first.
    pub async fn cuisines(&self) -> Result<Vec<String>, FetchError> {
        let restaurants = self.fetch_all().await?;
        Ok(distinct(restaurants.into_iter().map(|r| r.cuisine)))
    }

    /// Kick off the fire-and-forget cache write. The caller's data is
    /// already on its way back; the store may lag it briefly.
    fn warm_store(&self, restaurants: &[Restaurant]) {
        if let Some(ref store) = self.store {
            let store = store.clone();
            let records = restaurants.to_vec();
            tokio::task::spawn_blocking(move || store.write_all(&records));
        }
    }
}

/// Order-preserving dedup: first occurrence wins, input order retained.
fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
