// SPDX-License-Identifier: GPL-3.0-or-later

//! Lexical artist matching for raw search hits.
//!
//! Genius search is full-text, so a query for an artist also returns songs
//! that merely mention the name. The filter here keeps a hit when any word of
//! the query appears inside the hit's primary artist name or inside its
//! featured artist names. It favours recall: "Bob Dylan" keeps songs by
//! "Bobby Womack" through the token "bob".

use songhound_genius::Hit;
use tracing::debug;

/// Keeps hits whose artist fields contain at least one query token.
#[derive(Debug, Clone)]
pub struct ArtistMatchFilter {
    tokens: Vec<String>,
}

impl ArtistMatchFilter {
    /// Tokenize `artist_text` on whitespace, lowercased.
    pub fn new(artist_text: &str) -> Self {
        Self {
            tokens: artist_text
                .split_whitespace()
                .map(str::to_lowercase)
                .collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether `hit` plausibly belongs to the queried artist.
    ///
    /// A hit without a primary artist name can still match through its
    /// featured artists.
    pub fn matches(&self, hit: &Hit) -> bool {
        if self.tokens.is_empty() {
            return false;
        }

        let primary = match hit.primary_artist_name() {
            Some(name) => Some(name.to_lowercase()),
            None => {
                debug!(target: "matching", "hit has no primary artist name");
                None
            }
        };

        let featured = hit.featured_artist_names();
        let featured = (!featured.is_empty()).then(|| featured.join(" ").to_lowercase());

        self.tokens.iter().any(|token| {
            primary
                .as_deref()
                .is_some_and(|primary| primary.contains(token.as_str()))
                || featured
                    .as_deref()
                    .is_some_and(|featured| featured.contains(token.as_str()))
        })
    }

    /// Retain matching hits, preserving their order.
    pub fn filter(&self, hits: Vec<Hit>) -> Vec<Hit> {
        let before = hits.len();
        let kept: Vec<Hit> = hits.into_iter().filter(|hit| self.matches(hit)).collect();
        debug!(
            target: "matching",
            tokens = ?self.tokens,
            before,
            after = kept.len(),
            "filtered hits by artist"
        );
        kept
    }
}

/// Filter `hits` down to those plausibly performed by `artist_text`.
pub fn filter_by_artist(hits: Vec<Hit>, artist_text: &str) -> Vec<Hit> {
    ArtistMatchFilter::new(artist_text).filter(hits)
}
