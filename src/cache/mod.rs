//! Local caching module for offline data access.
//!
//! This module provides the `RestaurantStore`, a persistent single-table
//! store of the last known full restaurant list keyed by restaurant id.
//! Data is cached as a versioned JSON document and survives restarts.
//!
//! The store is strictly best effort: absence, read failures, and write
//! failures all degrade to "no cached data" and are never surfaced as
//! errors to query callers.

pub mod store;

pub use store::RestaurantStore;
