// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GeniusError, Result};
use crate::models::{Envelope, SearchPage, SearchQuery};
use crate::paginator::SearchPageSource;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const USER_AGENT: &str = concat!(
    "Songhound/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/songhound/songhound)"
);

/// Genius search API client.
///
/// Every request carries the configured access token as a bearer credential.
/// The client issues exactly one request per call and never retries.
#[derive(Debug, Clone)]
pub struct GeniusClient {
    client: Client,
    /// Base URL stored without a trailing slash.
    base_url: String,
    access_token: String,
}

impl GeniusClient {
    /// Create a client builder. Both the endpoint and the access token are required.
    pub fn builder() -> GeniusClientBuilder {
        GeniusClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single page of search results.
    ///
    /// # Example
    /// ```no_run
    /// # use songhound_genius::{GeniusClient, SearchQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeniusClient::builder()
    ///     .base_url("https://api.genius.com")
    ///     .access_token("secret")
    ///     .build()?;
    /// let query = SearchQuery::new("Nina Simone")?;
    /// let first = client.search_page(&query, 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_page(&self, query: &SearchQuery, page: u32) -> Result<SearchPage> {
        let url = format!("{}/search", self.base_url);
        let page_param = page.to_string();
        let per_page_param = query.per_page().to_string();

        trace!(
            target: "genius",
            url = %url,
            q = query.artist_text(),
            page,
            per_page = query.per_page(),
            "GET"
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .query(&[
                ("q", query.artist_text()),
                ("page", page_param.as_str()),
                ("per_page", per_page_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!(target: "genius", page, "response status: {}", status);

        let body = response.text().await?;

        let envelope: Envelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(GeniusError::Provider {
                    status: status.as_u16(),
                    message: body.trim().to_string(),
                });
            }
            Err(e) => {
                return Err(GeniusError::MalformedBody(format!(
                    "Failed to parse response: {}",
                    e
                )));
            }
        };

        if envelope.meta.status != 200 {
            return Err(GeniusError::Provider {
                status: envelope.meta.status,
                message: envelope
                    .meta
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let hits = envelope
            .response
            .ok_or_else(|| GeniusError::MalformedBody("missing `response` block".to_string()))?
            .hits;

        debug!(target: "genius", page, "{} hits", hits.len());

        Ok(SearchPage { page, hits })
    }
}

#[async_trait]
impl SearchPageSource for GeniusClient {
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<SearchPage> {
        self.search_page(query, page).await
    }
}

/// Builder for configuring a Genius client.
#[derive(Debug)]
pub struct GeniusClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

impl Default for GeniusClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl GeniusClientBuilder {
    /// Set the API base URL, e.g. `https://api.genius.com` or a mock server URI.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client, failing fast when the endpoint or token is missing.
    pub fn build(self) -> Result<GeniusClient> {
        let base_url = self
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                GeniusError::Configuration("Genius API endpoint is not configured".to_string())
            })?;

        Url::parse(&base_url).map_err(|e| {
            GeniusError::Configuration(format!("invalid Genius API endpoint {}: {}", base_url, e))
        })?;

        let access_token = self
            .access_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                GeniusError::Configuration("Genius access token is not configured".to_string())
            })?;

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        debug!(target: "genius", base_url = %base_url, "initialized Genius client");

        Ok(GeniusClient {
            client,
            base_url,
            access_token,
        })
    }
}
