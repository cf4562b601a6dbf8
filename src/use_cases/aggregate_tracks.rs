use crate::domain::{AggregationResult, FetchError, PlaylistClient};

// Playlist aggregation use case with an injected upstream client.
pub struct AggregateTracksUseCase<'a> {
    pub client: &'a dyn PlaylistClient,
    // Upper bound on pages consumed; `None` follows the upstream until it stops.
    pub max_pages: Option<usize>,
}

impl AggregateTracksUseCase<'_> {
    /// Walks every page of the playlist in order and collects the names of
    /// all tracks that are still available.
    ///
    /// Pages are fetched one after another since each request needs the
    /// continuation handle of the page before it.
    pub async fn execute(&self, playlist_id: &str) -> Result<AggregationResult, FetchError> {
        let mut page = self.client.get_playlist(playlist_id).await?;
        let mut track_names = Vec::new();
        let mut pages_seen = 1;

        loop {
            track_names.extend(page.tracks.iter().flatten().map(|track| track.name.clone()));

            if !page.has_next() {
                break;
            }

            if let Some(limit) = self.max_pages {
                if pages_seen >= limit {
                    tracing::warn!(playlist_id, limit, "playlist page limit reached");
                    return Err(FetchError::InternalError {
                        message: format!("playlist exceeded {limit} pages"),
                    });
                }
            }

            tracing::debug!(playlist_id, page = pages_seen + 1, "fetching next page");
            page = self.client.get_next_page(&page).await?;
            pages_seen += 1;
        }

        tracing::debug!(
            playlist_id,
            pages = pages_seen,
            tracks = track_names.len(),
            "playlist aggregated"
        );

        Ok(AggregationResult { track_names })
    }
}
