//! HTTP client for the catalog suggestion endpoint

use std::time::Duration;

use reqwest::Url;
use reqwest::header::ACCEPT;

use super::endpoint;
use crate::config::ServiceConfig;
use crate::error::SearchError;
use crate::search::SuggestionRecord;

#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SuggestionClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, SearchError> {
        let base_url = endpoint::parse_base_url(&config.base_url)?;
        Self::new(base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch suggestions for `query`
    ///
    /// A `null` body is read as an empty result set. Any non-2xx status is an
    /// error, whatever the body says.
    pub async fn search(&self, query: &str) -> Result<Vec<SuggestionRecord>, SearchError> {
        let url = endpoint::search_url(&self.base_url, query);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let records: Option<Vec<SuggestionRecord>> =
            serde_json::from_slice(&body).map_err(|e| SearchError::Parse(e.to_string()))?;
        Ok(records.unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
