use thiserror::Error;

// Rejections raised before any upstream call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing playlist_id in request body.")]
    MissingPlaylistId,
    #[error("Invalid playlist_id in request body.")]
    InvalidPlaylistId,
}

// Failures reported by a `PlaylistClient` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistClientError {
    // The upstream service answered, but with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response decode error: {0}")]
    Decode(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    // The reference could not be reduced to a playlist id.
    #[error("Invalid playlist Id: {0}")]
    InvalidId(String),
    #[error("page has no continuation handle")]
    MissingNextPage,
}

// Outcome of a failed aggregation, already split by how it reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("upstream error {status}: {message}")]
    UpstreamError { status: u16, message: String },
    #[error("{message}")]
    InternalError { message: String },
}

impl From<PlaylistClientError> for FetchError {
    fn from(err: PlaylistClientError) -> Self {
        match err {
            PlaylistClientError::Service { status, message } => {
                FetchError::UpstreamError { status, message }
            }
            // Spotify answers 400 for ids it cannot parse; keep that contract locally.
            err @ PlaylistClientError::InvalidId(_) => FetchError::UpstreamError {
                status: 400,
                message: err.to_string(),
            },
            other => FetchError::InternalError {
                message: other.to_string(),
            },
        }
    }
}
