//! HTTP client for the Tavily search API.
//!
//! Wraps `reqwest` with typed error handling and API key management. Each
//! call is attempted exactly once; retry policy is deliberately absent.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::{RawResult, SearchRequest, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com/";

const SEARCH_DEPTH: &str = "advanced";
const SORT_BY: &str = "relevance";

/// Client for the Tavily search API.
///
/// The API key is optional at construction: a missing key surfaces as
/// [`SearchError::MissingApiKey`] on each call, letting the caller degrade
/// to empty results instead of failing startup.
pub struct TavilyClient {
    client: Client,
    api_key: Option<String>,
    search_url: Url,
}

impl TavilyClient {
    /// Creates a new client pointed at the production Tavily API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<String>, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<String>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            api_key,
            search_url,
        })
    }

    /// Runs one search and returns the raw result list.
    ///
    /// # Errors
    ///
    /// - [`SearchError::MissingApiKey`] if no API key was configured.
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawResult>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let request = SearchRequest {
            api_key,
            query,
            search_depth: SEARCH_DEPTH,
            max_results,
            sort_by: SORT_BY,
            include_raw_content: true,
        };

        let response = self
            .client
            .post(self.search_url.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(query={query})"),
                source: e,
            })?;

        Ok(parsed.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_rejects_invalid_url() {
        let result = TavilyClient::with_base_url(None, 30, "not a url");
        assert!(matches!(result, Err(SearchError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn search_without_api_key_is_missing_api_key() {
        let client = TavilyClient::new(None, 30).expect("client construction should not fail");
        let err = client.search("hackathon", 5).await.unwrap_err();
        assert!(matches!(err, SearchError::MissingApiKey));
    }
}
