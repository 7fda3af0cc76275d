// SPDX-License-Identifier: GPL-3.0-or-later

//! Observability hook for paginated fetches.
//!
//! The paginator reports each page request and outcome to a [`FetchObserver`].
//! [`TracingObserver`] forwards them to `tracing`; [`RecordingObserver`]
//! keeps them in memory for callers that want to inspect them.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Something that happened during one `fetch_all` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FetchEvent {
    PageRequested {
        query: String,
        page: u32,
        per_page: u32,
    },
    PageReceived {
        page: u32,
        hit_count: usize,
    },
    Completed {
        pages: u32,
        total_hits: usize,
    },
    Failed {
        page: u32,
        error: String,
    },
}

/// Receives fetch events. Implementations must be cheap; they run inline with the fetch loop.
pub trait FetchObserver: Send + Sync {
    fn on_event(&self, event: &FetchEvent);
}

/// Default observer: writes every event as a `tracing` record under the `genius` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::PageRequested {
                query,
                page,
                per_page,
            } => debug!(target: "genius", %query, page, per_page, "requesting page"),
            FetchEvent::PageReceived { page, hit_count } => {
                debug!(target: "genius", page, hit_count, "page received")
            }
            FetchEvent::Completed { pages, total_hits } => {
                debug!(target: "genius", pages, total_hits, "pagination complete")
            }
            FetchEvent::Failed { page, error } => {
                warn!(target: "genius", page, %error, "pagination aborted")
            }
        }
    }
}

/// In-memory observer that stores every event it sees.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    inner: Arc<Mutex<Vec<FetchEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<FetchEvent> {
        self.lock().clone()
    }

    /// Retrieve and clear all recorded events.
    pub fn drain(&self) -> Vec<FetchEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FetchEvent>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FetchObserver for RecordingObserver {
    fn on_event(&self, event: &FetchEvent) {
        self.lock().push(event.clone());
    }
}
