//! PokeAPI HTTP client backed by the response cache.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::cache::ResponseCache;

use super::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Default base URL for PokeAPI.
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching PokeAPI data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The response body was not the JSON we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for PokeAPI requests.
///
/// Every fetch consults the injected [`ResponseCache`] first and stores
/// the raw response body on a miss, so repeated commands against the same
/// URL skip the network while the entry lives. The cache holds raw bytes;
/// decoding into models happens here, after the cache.
#[derive(Debug, Clone)]
pub struct PokeApi {
    http: Client,
    cache: ResponseCache,
    base_url: String,
}

impl PokeApi {
    /// Creates a client against the public PokeAPI endpoint.
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            http: Client::new(),
            cache,
            base_url: POKEAPI_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL, mainly for tests and mirrors.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches one page of the location-area listing.
    ///
    /// `page_url` is a complete URL taken from a previous page's
    /// `next`/`previous` field; `None` fetches the first page.
    pub async fn location_areas(
        &self,
        page_url: Option<&str>,
    ) -> Result<LocationAreaPage, ApiError> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area/?offset=0&limit=20", self.base_url),
        };
        let body = self.get_raw(&url).await?;
        decode(&url, &body)
    }

    /// Fetches the detail of a single location area by name.
    pub async fn location_area(&self, area: &str) -> Result<LocationAreaDetail, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, area);
        let body = self.get_raw(&url).await?;
        decode(&url, &body)
    }

    /// Fetches a Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.get_raw(&url).await?;
        decode(&url, &body)
    }

    /// Returns the raw response body for `url`, from cache when possible.
    ///
    /// On a miss the full body is read and cached before returning. Error
    /// responses are never cached, so a typo'd name does not shadow a
    /// later correct fetch.
    async fn get_raw(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }
        debug!(url, "cache miss, fetching");

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()));
        }
        let response = response.error_for_status()?;

        let body = response.bytes().await?.to_vec();
        self.cache.put(url, body.clone());
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
