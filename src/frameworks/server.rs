// Framework bootstrap for the tracks server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::SpotifyClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state().inspect_err(|e| {
        tracing::error!(error = %e, "failed to configure server");
    })?;

    let address = config::bind_address()
        .map_err(std::io::Error::other)
        .inspect_err(|e| {
            tracing::error!(error = %e, "failed to resolve bind address");
        })?;

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

fn build_state() -> Result<Arc<AppState>> {
    let credentials = config::spotify_credentials().map_err(std::io::Error::other)?;
    let api_url = config::spotify_api_url();
    let auth_url = config::spotify_auth_url();
    let max_pages = config::max_playlist_pages();

    let client = SpotifyClient::new(credentials, api_url.clone(), auth_url.clone());
    tracing::debug!(
        api_url = %api_url,
        auth_url = %auth_url,
        max_pages = ?max_pages,
        "spotify client configured"
    );

    Ok(Arc::new(AppState {
        playlists: Arc::new(client),
        max_pages,
    }))
}
