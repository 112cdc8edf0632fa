//! Backend API module for the restaurant directory service.
//!
//! This module provides the `ApiClient` for fetching the restaurant
//! list from the directory backend, and the `FetchError` taxonomy every
//! query surfaces to callers.
//!
//! The backend requires no authentication; a single GET returns the
//! complete dataset.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::FetchError;
