use serde::Serialize;

// Successful response for a playlist lookup.
#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<String>,
}

// Response for the connectivity check route.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
