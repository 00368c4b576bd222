use axum::{
    Extension, Router,
    routing::{get, post},
};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api,
    config::Config,
    error::{Error, Result},
    info,
    management::SessionManager,
};

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
            sessions: SessionManager::new(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/auth", get(api::auth))
        .route("/oauthcb", get(api::callback))
        .route("/create-playlist", post(api::create_playlist))
        .layer(Extension(state))
}

pub async fn start_api_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from_str(&config.server_address).map_err(|e| {
        Error::Configuration(format!(
            "Failed to parse server address {}: {}",
            config.server_address, e
        ))
    })?;

    let app = router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Configuration(format!("Failed to bind {addr}: {e}")))?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Configuration(format!("Server stopped: {e}")))
}
