// SPDX-License-Identifier: GPL-3.0-or-later

//! Genius API client for song search.
//!
//! This crate wraps the Genius `/search` endpoint: a single-page client that
//! attaches the bearer credential and decodes the response envelope, and a
//! [`PaginatedFetcher`] that walks every page of results until the provider
//! returns an empty one.

pub mod client;
pub mod error;
pub mod events;
pub mod models;
pub mod paginator;

pub use client::{GeniusClient, GeniusClientBuilder};
pub use error::{GeniusError, Result};
pub use events::{FetchEvent, FetchObserver, RecordingObserver, TracingObserver};
pub use models::{Hit, SearchPage, SearchQuery, MAX_PER_PAGE};
pub use paginator::{PaginatedFetcher, SearchPageSource, DEFAULT_MAX_PAGES};
