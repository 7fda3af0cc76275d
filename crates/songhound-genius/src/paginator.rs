// SPDX-License-Identifier: GPL-3.0-or-later

//! Exhaustive pagination over the search endpoint.

use crate::error::{GeniusError, Result};
use crate::events::{FetchEvent, FetchObserver, TracingObserver};
use crate::models::{Hit, SearchPage, SearchQuery};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Default cap on page requests per search. Genius pages hold at most 20
/// hits in practice, so this allows for several thousand results.
pub const DEFAULT_MAX_PAGES: u32 = 250;

/// Anything that can fetch one page of search hits.
///
/// [`GeniusClient`](crate::GeniusClient) is the production implementation;
/// tests substitute in-memory fakes.
#[async_trait]
pub trait SearchPageSource: Send + Sync {
    /// Fetch page `page` (1-based) for `query`.
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<SearchPage>;
}

#[async_trait]
impl<T: SearchPageSource + ?Sized> SearchPageSource for Arc<T> {
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<SearchPage> {
        (**self).fetch_page(query, page).await
    }
}

/// Walks pages 1, 2, 3, ... until the source returns an empty page.
///
/// Pages are requested strictly in sequence and accumulated in order. Any
/// error aborts the walk and discards everything collected so far. A walk
/// that would need more than `max_pages` requests fails with
/// [`GeniusError::PaginationLimitExceeded`].
pub struct PaginatedFetcher<S> {
    source: S,
    max_pages: u32,
    observer: Arc<dyn FetchObserver>,
}

impl<S: SearchPageSource> PaginatedFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_pages: DEFAULT_MAX_PAGES,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Set the maximum number of page requests per `fetch_all` call (at least 1).
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Replace the default [`TracingObserver`].
    pub fn observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every page for `query` and return all hits in page order.
    pub async fn fetch_all(&self, query: &SearchQuery) -> Result<Vec<Hit>> {
        self.fetch_from(query, 1).await
    }

    async fn fetch_from(&self, query: &SearchQuery, first_page: u32) -> Result<Vec<Hit>> {
        let mut hits = Vec::new();
        let mut page = first_page;

        loop {
            if page > self.max_pages {
                return Err(self.abort(page, self.limit_exceeded()));
            }

            self.observer.on_event(&FetchEvent::PageRequested {
                query: query.artist_text().to_string(),
                page,
                per_page: query.per_page(),
            });

            let result = match self.source.fetch_page(query, page).await {
                Ok(result) => result,
                Err(error) => return Err(self.abort(page, error)),
            };

            self.observer.on_event(&FetchEvent::PageReceived {
                page,
                hit_count: result.hits.len(),
            });

            if result.is_empty() {
                self.observer.on_event(&FetchEvent::Completed {
                    pages: page,
                    total_hits: hits.len(),
                });
                return Ok(hits);
            }

            hits.extend(result.hits);
            page = match page.checked_add(1) {
                Some(next) => next,
                None => return Err(self.abort(page, self.limit_exceeded())),
            };
        }
    }

    fn limit_exceeded(&self) -> GeniusError {
        GeniusError::PaginationLimitExceeded {
            max_pages: self.max_pages,
        }
    }

    fn abort(&self, page: u32, error: GeniusError) -> GeniusError {
        self.observer.on_event(&FetchEvent::Failed {
            page,
            error: error.to_string(),
        });
        error
    }
}

impl<S: fmt::Debug> fmt::Debug for PaginatedFetcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedFetcher")
            .field("source", &self.source)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}
