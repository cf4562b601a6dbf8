use async_trait::async_trait;

use crate::domain::errors::PlaylistClientError;

// Validated inbound request; the id is kept exactly as the caller sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub playlist_id: String,
}

// One playlist entry that still resolves to a playable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTrack {
    pub name: String,
}

// A single page of playlist entries as handed back by the upstream client.
//
// `None` entries are tracks that were removed or are unavailable in the
// caller's market. `next` is the continuation handle for the following page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackPage {
    pub tracks: Vec<Option<PlaylistTrack>>,
    pub next: Option<String>,
}

impl TrackPage {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

// Flattened, order-preserving track names across every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
    pub track_names: Vec<String>,
}

// The aggregator depends on this trait, not on a concrete HTTP client.
// Implementations are shared across requests and must tolerate concurrent use.
#[async_trait]
pub trait PlaylistClient: Send + Sync {
    async fn get_playlist(&self, playlist_id: &str) -> Result<TrackPage, PlaylistClientError>;

    async fn get_next_page(&self, page: &TrackPage) -> Result<TrackPage, PlaylistClientError>;
}
