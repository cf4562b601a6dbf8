// Mock Spotify Web API used by the integration tests.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use playlist_tracks::interface_adapters::clients::{SpotifyClient, SpotifyCredentials};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Playlist ids served by the mock; anything else is a 404.
pub const TWO_PAGES: &str = "37i9dQZF1DXcBWIGoYBM5M";
pub const EMPTY: &str = "5ZkVjVkQy4Fq9XGx0zJ0xG";
pub const BROKEN: &str = "1BrokenPlaylist0000000";
pub const RATE_LIMITED: &str = "1RateLimitedPlaylist00";
pub const UNKNOWN: &str = "0UnknownPlaylist000000";

pub const CLIENT_ID: &str = "id";
pub const CLIENT_SECRET: &str = "secret";
const ACCESS_TOKEN: &str = "test-token";
// base64("id:secret")
const BASIC_AUTH: &str = "Basic aWQ6c2VjcmV0";
const PAGE_SIZE: usize = 3;

#[derive(Clone)]
struct MockState {
    base_url: String,
    token_requests: Arc<AtomicUsize>,
    page_requests: Arc<AtomicUsize>,
}

// Handle to a running mock upstream.
pub struct MockSpotify {
    pub base_url: String,
    token_requests: Arc<AtomicUsize>,
    page_requests: Arc<AtomicUsize>,
}

impl MockSpotify {
    // Bind an ephemeral port and serve the mock on the current runtime.
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral mock port");
        let addr = listener.local_addr().expect("get local addr");
        let base_url = format!("http://{addr}");

        let state = MockState {
            base_url: base_url.clone(),
            token_requests: Arc::new(AtomicUsize::new(0)),
            page_requests: Arc::new(AtomicUsize::new(0)),
        };
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/playlists/{id}/tracks", get(playlist_tracks))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        Self {
            base_url,
            token_requests: state.token_requests,
            page_requests: state.page_requests,
        }
    }

    pub fn api_url(&self) -> String {
        format!("{}/v1/", self.base_url)
    }

    // Accounts base; the token endpoint lives at `<base>api/token`.
    pub fn auth_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> SpotifyClient {
        self.client_with_secret(CLIENT_SECRET)
    }

    pub fn client_with_secret(&self, secret: &str) -> SpotifyClient {
        SpotifyClient::new(
            SpotifyCredentials {
                client_id: CLIENT_ID.to_string(),
                client_secret: secret.to_string(),
            },
            self.api_url(),
            self.auth_url(),
        )
    }
}

async fn token(State(state): State<MockState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(BASIC_AUTH);
    if !authorized {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client", "error_description": "Invalid client" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "",
        })),
    )
}

fn artist() -> Value {
    json!({
        "external_urls": { "spotify": "https://open.spotify.com/artist/0TnOYISbd1XYRBk9myaseg" },
        "href": "https://api.spotify.com/v1/artists/0TnOYISbd1XYRBk9myaseg",
        "id": "0TnOYISbd1XYRBk9myaseg",
        "name": "Artist",
        "type": "artist",
        "uri": "spotify:artist:0TnOYISbd1XYRBk9myaseg",
    })
}

// Full track object, shaped like the real Web API returns it.
fn track(name: &str) -> Value {
    json!({
        "album": {
            "album_type": "album",
            "artists": [artist()],
            "available_markets": ["US"],
            "external_urls": { "spotify": "https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy" },
            "href": "https://api.spotify.com/v1/albums/4aawyAB9vmqN3uQ7FjRGTy",
            "id": "4aawyAB9vmqN3uQ7FjRGTy",
            "images": [{ "height": 640, "url": "https://i.scdn.co/image/cover", "width": 640 }],
            "name": "Album",
            "release_date": "2020-01-01",
            "release_date_precision": "day",
            "total_tracks": 3,
            "type": "album",
            "uri": "spotify:album:4aawyAB9vmqN3uQ7FjRGTy",
        },
        "artists": [artist()],
        "available_markets": ["US"],
        "disc_number": 1,
        "duration_ms": 200000,
        "episode": false,
        "explicit": false,
        "external_ids": { "isrc": "USUM72000000" },
        "external_urls": { "spotify": "https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl" },
        "href": "https://api.spotify.com/v1/tracks/11dFghVXANMlKmJXsNCbNl",
        "id": "11dFghVXANMlKmJXsNCbNl",
        "is_local": false,
        "name": name,
        "popularity": 50,
        "preview_url": null,
        "track": true,
        "track_number": 1,
        "type": "track",
        "uri": "spotify:track:11dFghVXANMlKmJXsNCbNl",
    })
}

fn item(name: Option<&str>) -> Value {
    json!({
        "added_at": "2024-01-01T00:00:00Z",
        "added_by": null,
        "is_local": false,
        "track": name.map(track),
    })
}

fn page(
    base_url: &str,
    id: &str,
    items: Vec<Value>,
    offset: usize,
    next: Option<usize>,
) -> Value {
    let href = |offset: usize| {
        format!("{base_url}/v1/playlists/{id}/tracks?offset={offset}&limit={PAGE_SIZE}")
    };
    json!({
        "href": href(offset),
        "items": items,
        "limit": PAGE_SIZE,
        "next": next.map(href),
        "offset": offset,
        "previous": null,
        "total": 4,
    })
}

fn api_error(status: StatusCode, message: &str) -> (StatusCode, String) {
    let body = json!({ "error": { "status": status.as_u16(), "message": message } });
    (status, body.to_string())
}

async fn playlist_tracks(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.page_requests.fetch_add(1, Ordering::SeqCst);

    let bearer = format!("Bearer {ACCESS_TOKEN}");
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(bearer.as_str()) {
        return api_error(StatusCode::UNAUTHORIZED, "Invalid access token");
    }

    let base_url = state.base_url.as_str();
    let offset = query.get("offset").map(String::as_str);
    let page = match (id.as_str(), offset) {
        (TWO_PAGES, None | Some("0")) => page(
            base_url,
            TWO_PAGES,
            vec![item(Some("A")), item(None), item(Some("B"))],
            0,
            Some(PAGE_SIZE),
        ),
        (TWO_PAGES, Some("3")) => page(base_url, TWO_PAGES, vec![item(Some("C"))], 3, None),
        (EMPTY, None) => page(base_url, EMPTY, Vec::new(), 0, None),
        (BROKEN, None) => return (StatusCode::OK, "<html>not json</html>".to_string()),
        (RATE_LIMITED, _) => {
            return api_error(StatusCode::TOO_MANY_REQUESTS, "API rate limit exceeded");
        }
        _ => return api_error(StatusCode::NOT_FOUND, "Not found"),
    };

    (StatusCode::OK, page.to_string())
}
