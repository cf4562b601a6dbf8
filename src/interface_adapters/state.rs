use crate::domain::PlaylistClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Long-lived upstream client shared by every request.
    pub playlists: Arc<dyn PlaylistClient>,
    // Optional cap on pages followed per playlist.
    pub max_pages: Option<usize>,
}
