// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GeniusError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum page size documented by the Genius search endpoint.
///
/// The endpoint accepts up to 50 but has been observed to return at most 20
/// hits per page, so callers must not rely on the requested size.
pub const MAX_PER_PAGE: u32 = 50;

/// Search query parameters, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    artist_text: String,
    per_page: u32,
}

impl SearchQuery {
    /// Create a query for `artist_text` using the maximum page size.
    pub fn new(artist_text: impl Into<String>) -> Result<Self> {
        let artist_text = artist_text.into();
        if artist_text.trim().is_empty() {
            return Err(GeniusError::InvalidQuery(
                "artist text must not be empty".to_string(),
            ));
        }

        Ok(Self {
            artist_text,
            per_page: MAX_PER_PAGE,
        })
    }

    /// Override the page size. Must be within `1..=MAX_PER_PAGE`.
    pub fn with_per_page(mut self, per_page: u32) -> Result<Self> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(GeniusError::InvalidQuery(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, per_page
            )));
        }
        self.per_page = per_page;
        Ok(self)
    }

    pub fn artist_text(&self) -> &str {
        &self.artist_text
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

/// One raw search hit, kept exactly as the provider returned it.
///
/// Only the artist fields under `result` are ever inspected; everything else
/// (title, id, url, ...) is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hit(Value);

impl Hit {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// `result.primary_artist.name`, if present and a string.
    pub fn primary_artist_name(&self) -> Option<&str> {
        self.0
            .pointer("/result/primary_artist/name")
            .and_then(Value::as_str)
    }

    /// Names under `result.featured_artists`. Entries without a string name are skipped.
    pub fn featured_artist_names(&self) -> Vec<&str> {
        self.0
            .pointer("/result/featured_artists")
            .and_then(Value::as_array)
            .map(|artists| {
                artists
                    .iter()
                    .filter_map(|artist| artist.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<Value> for Hit {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// One decoded page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    /// 1-based page index.
    pub page: u32,
    pub hits: Vec<Hit>,
}

impl SearchPage {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Response envelope returned by every Genius API call.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub meta: Meta,
    #[serde(default)]
    pub response: Option<SearchResponseBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponseBody {
    pub hits: Vec<Hit>,
}
