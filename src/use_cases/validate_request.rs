use serde_json::Value;

use crate::domain::{PlaylistRequest, ValidationError};

/// Checks the parsed request body for a usable `playlist_id`.
///
/// `body` is `None` when the request carried no JSON at all (empty or
/// malformed). The identifier is passed through untouched; the upstream
/// service decides whether it names a real playlist.
pub fn validate_request(body: Option<&Value>) -> Result<PlaylistRequest, ValidationError> {
    let field = body
        .and_then(Value::as_object)
        .and_then(|object| object.get("playlist_id"));

    match field {
        None | Some(Value::Null) => Err(ValidationError::MissingPlaylistId),
        Some(Value::String(id)) if id.is_empty() => Err(ValidationError::MissingPlaylistId),
        Some(Value::String(id)) => Ok(PlaylistRequest {
            playlist_id: id.clone(),
        }),
        Some(_) => Err(ValidationError::InvalidPlaylistId),
    }
}
