//! dinecache - offline-first client library for a restaurant directory.
//!
//! The crate fetches the full restaurant list from an HTTP backend,
//! keeps a persistent local copy for offline use, and answers filtered
//! queries (by id, cuisine, neighborhood, and distinct facet lists)
//! cache first: a warm local store answers without touching the
//! network, an empty one falls through to the backend and is warmed in
//! the background.
//!
//! Rendering, map integration, and other UI concerns are left to
//! consumers, which drive everything through [`RestaurantRepository`].

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod repository;

pub use api::{ApiClient, FetchError};
pub use cache::RestaurantStore;
pub use config::Config;
pub use models::{LatLng, Restaurant};
pub use repository::{RestaurantRepository, RestaurantSource, WILDCARD};
