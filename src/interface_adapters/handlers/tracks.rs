use crate::domain::{FetchError, ValidationError};
use crate::interface_adapters::protocol::{ErrorResponse, TracksResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{AggregateTracksUseCase, validate_request};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;
use std::sync::Arc;

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// Handler returning every available track name of a playlist.
//
// The body is read raw so that a missing or malformed payload is reported
// with the same 400 as a missing key, instead of axum's extractor rejections.
#[tracing::instrument(
    name = "get_tracks",
    skip_all,
    fields(playlist_id = tracing::field::Empty)
)]
pub async fn get_tracks(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TracksResponse>, ErrorReply> {
    let payload = serde_json::from_slice::<Value>(&body).ok();
    let request = validate_request(payload.as_ref()).map_err(map_validation_error)?;
    tracing::Span::current().record("playlist_id", request.playlist_id.as_str());

    let use_case = AggregateTracksUseCase {
        client: state.playlists.as_ref(),
        max_pages: state.max_pages,
    };

    let result = use_case
        .execute(&request.playlist_id)
        .await
        .map_err(map_fetch_error)?;

    tracing::info!(tracks = result.track_names.len(), "playlist tracks fetched.");

    Ok(Json(TracksResponse {
        tracks: result.track_names,
    }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: String) -> ErrorReply {
    (status, Json(ErrorResponse { error: message }))
}

fn map_validation_error(err: ValidationError) -> ErrorReply {
    tracing::debug!(error = %err, "rejected request body.");
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

fn map_fetch_error(err: FetchError) -> ErrorReply {
    match err {
        FetchError::UpstreamError { status, message } => {
            tracing::warn!(status, message = %message, "spotify api error.");
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, format!("Spotify API Error: {message}"))
        }
        FetchError::InternalError { message } => {
            tracing::error!(message = %message, "failed to fetch playlist tracks.");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Unexpected Error: {message}"),
            )
        }
    }
}
