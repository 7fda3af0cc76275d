// SPDX-License-Identifier: GPL-3.0-or-later

//! Song search entry points.
//!
//! Two operations share the same paginated fetch:
//! - [`SongSearchService::raw_search`] returns every hit, honouring a page-size override.
//! - [`SongSearchService::find_by_artist`] always uses the configured page size and
//!   drops hits whose artist fields do not match the query.

use crate::matching::ArtistMatchFilter;
use songhound_config::GeniusConfig;
use songhound_genius::{
    FetchObserver, GeniusClient, GeniusError, Hit, PaginatedFetcher, Result, SearchPageSource,
    SearchQuery, MAX_PER_PAGE,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct SongSearchService<S> {
    fetcher: PaginatedFetcher<S>,
    per_page: u32,
}

impl SongSearchService<GeniusClient> {
    /// Build a service backed by the Genius API.
    ///
    /// Fails with [`GeniusError::Configuration`] when the endpoint or access
    /// token is missing or a page setting is out of range, before any request
    /// is made. An unset `per_page` keeps [`MAX_PER_PAGE`].
    pub fn from_config(config: &GeniusConfig) -> Result<Self> {
        let mut builder =
            GeniusClient::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(endpoint) = &config.endpoint {
            builder = builder.base_url(endpoint);
        }
        if let Some(token) = &config.access_token {
            builder = builder.access_token(token);
        }
        let client = builder.build()?;

        let service = Self::new(client).max_pages(config.max_pages)?;
        match config.per_page {
            Some(per_page) => service.per_page(per_page),
            None => Ok(service),
        }
    }
}

impl<S: SearchPageSource> SongSearchService<S> {
    pub fn new(source: S) -> Self {
        Self {
            fetcher: PaginatedFetcher::new(source),
            per_page: MAX_PER_PAGE,
        }
    }

    /// Set the maximum number of page requests per search.
    pub fn max_pages(mut self, max_pages: u32) -> Result<Self> {
        if max_pages == 0 {
            return Err(GeniusError::Configuration(
                "max_pages must be at least 1".to_string(),
            ));
        }
        self.fetcher = self.fetcher.max_pages(max_pages);
        Ok(self)
    }

    /// Set the page size used when the caller does not override it.
    pub fn per_page(mut self, per_page: u32) -> Result<Self> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(GeniusError::Configuration(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, per_page
            )));
        }
        self.per_page = per_page;
        Ok(self)
    }

    /// Replace the fetch observer (defaults to tracing output).
    pub fn observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.fetcher = self.fetcher.observer(observer);
        self
    }

    /// All hits for `artist`, unfiltered, with an optional page-size override.
    pub async fn raw_search(&self, artist: &str, per_page: Option<u32>) -> Result<Vec<Hit>> {
        let query = SearchQuery::new(artist)?.with_per_page(per_page.unwrap_or(self.per_page))?;

        let hits = self.fetcher.fetch_all(&query).await?;
        info!(target: "songs", artist, hits = hits.len(), "raw search complete");
        Ok(hits)
    }

    /// Hits for `artist` whose primary or featured artists match the query.
    pub async fn find_by_artist(&self, artist: &str) -> Result<Vec<Hit>> {
        let query = SearchQuery::new(artist)?.with_per_page(self.per_page)?;

        let hits = self.fetcher.fetch_all(&query).await?;
        let total = hits.len();
        let songs = ArtistMatchFilter::new(artist).filter(hits);
        info!(
            target: "songs",
            artist,
            total,
            matched = songs.len(),
            "artist search complete"
        );
        Ok(songs)
    }
}
