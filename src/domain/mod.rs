pub mod errors;
mod playlist;

// Re-export the domain boundary types and ports.
pub use errors::{FetchError, PlaylistClientError, ValidationError};
pub use playlist::{AggregationResult, PlaylistClient, PlaylistRequest, PlaylistTrack, TrackPage};
