use crate::interface_adapters::protocol::TestResponse;
use axum::Json;

// Connectivity check used by the frontend.
pub async fn connectivity_test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Test successful".to_string(),
    })
}
