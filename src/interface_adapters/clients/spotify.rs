use crate::domain::{PlaylistClient, PlaylistClientError, PlaylistTrack, TrackPage};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use rspotify::clients::BaseClient;
use rspotify::http::HttpError;
use rspotify::model::{IdError, Page, PlayableItem, PlaylistId, PlaylistItem};
use rspotify::{ClientCredsSpotify, ClientError, Config, Credentials};
use serde::Deserialize;
use tokio::sync::OnceCell;

#[derive(Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

// Playlist client backed by rspotify's client-credentials flow.
pub struct SpotifyClient {
    spotify: ClientCredsSpotify,
    // Set once the first token has been granted; rspotify refreshes it afterwards.
    authorized: OnceCell<()>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl SpotifyClient {
    pub fn new(
        credentials: SpotifyCredentials,
        api_base_url: impl Into<String>,
        auth_base_url: impl Into<String>,
    ) -> Self {
        let creds = Credentials::new(&credentials.client_id, &credentials.client_secret);
        let config = Config {
            api_base_url: with_trailing_slash(api_base_url.into()),
            auth_base_url: with_trailing_slash(auth_base_url.into()),
            token_cached: false,
            token_refreshing: true,
            ..Default::default()
        };

        Self {
            spotify: ClientCredsSpotify::with_config(creds, config),
            authorized: OnceCell::new(),
        }
    }

    // The first request exchanges the credentials; a failed exchange is retried next time.
    async fn authorize(&self) -> Result<(), PlaylistClientError> {
        self.authorized
            .get_or_try_init(|| async {
                tracing::debug!("requesting spotify access token");
                self.spotify.request_token().await.map_err(|err| {
                    tracing::warn!(error = %err, "spotify token request rejected");
                    PlaylistClientError::Auth(err.to_string())
                })
            })
            .await
            .map(|_| ())
    }

    async fn fetch_page(
        &self,
        playlist_id: PlaylistId<'_>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<TrackPage, PlaylistClientError> {
        self.authorize().await?;

        let page = match self
            .spotify
            .playlist_items_manual(playlist_id, None, None, limit, offset)
            .await
        {
            Ok(page) => page,
            Err(err) => return Err(map_client_error(err).await),
        };

        Ok(track_page(page))
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Reduces the accepted playlist reference forms to a playlist id.
///
/// Accepts a bare id, a `spotify:playlist:<id>` URI, or an
/// `open.spotify.com/playlist/<id>` share link (locale segment and query
/// string allowed).
fn parse_playlist_id(raw: &str) -> Result<PlaylistId<'_>, IdError> {
    let link = raw
        .strip_prefix("https://open.spotify.com/")
        .or_else(|| raw.strip_prefix("http://open.spotify.com/"));

    if let Some(rest) = link {
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        if let Some(id) = path.split('/').skip_while(|s| *s != "playlist").nth(1) {
            return PlaylistId::from_id(id);
        }
    }

    PlaylistId::from_id_or_uri(raw)
}

// Playlist id plus the `limit` and `offset` of the page to request.
type PageCursor = (PlaylistId<'static>, Option<u32>, Option<u32>);

// Next links look like `.../playlists/<id>/tracks?offset=100&limit=100`.
fn parse_next_link(next: &str) -> Result<PageCursor, String> {
    let url = Url::parse(next).map_err(|err| format!("invalid next url: {err}"))?;

    let id = url
        .path_segments()
        .and_then(|mut segments| {
            segments.find(|s| *s == "playlists")?;
            segments.next()
        })
        .ok_or_else(|| format!("no playlist id in next url {next}"))?;
    let id = PlaylistId::from_id(id.to_string()).map_err(|err| err.to_string())?;

    let mut limit = None;
    let mut offset = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "limit" => limit = value.parse().ok(),
            "offset" => offset = value.parse().ok(),
            _ => {}
        }
    }

    Ok((id, limit, offset))
}

fn track_page(page: Page<PlaylistItem>) -> TrackPage {
    TrackPage {
        tracks: page
            .items
            .into_iter()
            .map(|item| {
                let name = match item.track? {
                    PlayableItem::Track(track) => track.name,
                    PlayableItem::Episode(episode) => episode.name,
                    #[allow(unreachable_patterns)]
                    _ => return None,
                };
                Some(PlaylistTrack { name })
            })
            .collect(),
        next: page.next,
    }
}

// Keep upstream status/message so handlers can forward them unchanged.
async fn map_client_error(err: ClientError) -> PlaylistClientError {
    match err {
        ClientError::Http(err) => match *err {
            HttpError::StatusCode(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorResponse>(&body)
                    .map(|payload| payload.error.message)
                    .unwrap_or_else(|_| reason(status));
                PlaylistClientError::Service { status, message }
            }
            HttpError::Client(err) => PlaylistClientError::Transport(err.to_string()),
        },
        ClientError::ParseJson(err) => PlaylistClientError::Decode(err.to_string()),
        ClientError::InvalidToken => PlaylistClientError::Auth("access token missing".to_string()),
        other => PlaylistClientError::Transport(other.to_string()),
    }
}

fn reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[async_trait]
impl PlaylistClient for SpotifyClient {
    async fn get_playlist(&self, playlist_id: &str) -> Result<TrackPage, PlaylistClientError> {
        let id = parse_playlist_id(playlist_id)
            .map_err(|_| PlaylistClientError::InvalidId(playlist_id.to_string()))?;
        self.fetch_page(id, None, None).await
    }

    async fn get_next_page(&self, page: &TrackPage) -> Result<TrackPage, PlaylistClientError> {
        let next = page
            .next
            .as_deref()
            .ok_or(PlaylistClientError::MissingNextPage)?;
        let (id, limit, offset) = parse_next_link(next).map_err(PlaylistClientError::Decode)?;
        self.fetch_page(id, limit, offset).await
    }
}
