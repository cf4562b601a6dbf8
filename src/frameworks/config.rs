use crate::interface_adapters::clients::SpotifyCredentials;
use std::net::{IpAddr, SocketAddr};
use std::env;
use thiserror::Error;

// Runtime settings read from the environment once at startup.

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1/";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/api/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid HOST value {0:?}")]
    InvalidHost(String),
}

pub fn spotify_credentials() -> Result<SpotifyCredentials, ConfigError> {
    Ok(SpotifyCredentials {
        client_id: required("SPOTIPY_CLIENT_ID")?,
        client_secret: required("SPOTIPY_CLIENT_SECRET")?,
    })
}

pub fn bind_address() -> Result<SocketAddr, ConfigError> {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let ip = host
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
    Ok(SocketAddr::new(ip, http_port()))
}

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000)
}

pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

// Base of the accounts service; the token endpoint is `<base>token`.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_AUTH_URL.to_string())
}

// Unset (or zero) keeps pagination unbounded.
pub fn max_playlist_pages() -> Option<usize> {
    env::var("MAX_PLAYLIST_PAGES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&pages| pages > 0)
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
