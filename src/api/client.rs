//! HTTP client for the restaurant directory backend.
//!
//! The backend exposes a single unauthenticated endpoint returning the
//! full restaurant list as a JSON array. There is no pagination and no
//! retry; one GET per fetch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::models::Restaurant;
use crate::repository::RestaurantSource;

use super::FetchError;

/// HTTP request timeout in seconds.
/// The backend defines no timeout of its own; without this a dead
/// connection would leave a query pending indefinitely.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the restaurant directory backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a client pointed at the given restaurant-list endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full restaurant list from the backend.
    ///
    /// Transport failures and non-success statuses surface as
    /// `FetchError::Network`; a body that is not a JSON restaurant array
    /// surfaces as `FetchError::Format`.
    pub async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let response = response.error_for_status()?;

        let body = response.text().await?;
        let restaurants: Vec<Restaurant> = serde_json::from_str(&body)?;

        debug!(count = restaurants.len(), "Fetched restaurant list from backend");
        Ok(restaurants)
    }
}

#[async_trait]
impl RestaurantSource for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Restaurant>, FetchError> {
        self.fetch_restaurants().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_configured_endpoint() {
        let client = ApiClient::new("http://localhost:1337/restaurants").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:1337/restaurants");
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_network_error() {
        let client = ApiClient::new("http://127.0.0.1:1/restaurants").unwrap();
        let err = client.fetch_restaurants().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
