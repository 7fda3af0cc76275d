// SPDX-License-Identifier: GPL-3.0-or-later
use songhound_config::AppConfig;
use songhound_genius::GeniusClient;
use std::sync::Arc;

pub mod matching;
pub mod songs;

pub use matching::{filter_by_artist, ArtistMatchFilter};
pub use songs::SongSearchService;

use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub songs: Arc<SongSearchService<GeniusClient>>,
}

impl AppState {
    /// Build the application state, wiring the Genius client from configuration.
    pub fn new(config: AppConfig) -> songhound_genius::Result<Self> {
        let songs = SongSearchService::<GeniusClient>::from_config(&config.genius)?;
        Ok(Self::with_service(config, songs))
    }

    pub fn with_service(config: AppConfig, songs: SongSearchService<GeniusClient>) -> Self {
        Self {
            config,
            songs: Arc::new(songs),
        }
    }

    pub fn on_start(&self) {
        info!(target: "application", "application state initialized");
    }
}
