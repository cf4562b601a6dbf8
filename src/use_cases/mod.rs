// Use cases layer: request validation and playlist aggregation workflows.

pub mod aggregate_tracks;
pub mod validate_request;


pub use aggregate_tracks::AggregateTracksUseCase;
pub use validate_request::validate_request;
