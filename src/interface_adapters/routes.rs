use crate::interface_adapters::handlers::health::connectivity_test;
use crate::interface_adapters::handlers::tracks::get_tracks;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers; every origin may call them.
    Router::new()
        .route("/get_tracks", post(get_tracks))
        .route("/test", get(connectivity_test))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
