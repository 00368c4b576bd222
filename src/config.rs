//! Configuration management for the playlist service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Credentials for both external platforms, the
//! listening address and the upstream base URLs all come from here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:80";
pub const DEFAULT_GOOGLE_REDIRECT_URI: &str = "https://s2y.royc.io/oauthcb";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_SEARCH_CONCURRENCY: usize = 4;

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is tried first. Afterwards the file in the
/// platform-specific local data directory under `s2y/.env` is loaded; values
/// that are already set are never overwritten, so the working directory wins.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/s2y/.env`
/// - macOS: `~/Library/Application Support/s2y/.env`
/// - Windows: `%LOCALAPPDATA%/s2y/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created. Missing `.env`
/// files are not an error because every value can come from the environment.
pub async fn load_env() -> Result<()> {
    let _ = dotenv::dotenv();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("s2y/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Configuration(e.to_string()))?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Runtime configuration of the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`SERVER_ADDRESS`).
    pub server_address: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    /// Client-credentials token endpoint (`SPOTIFY_API_TOKEN_URL`).
    pub spotify_token_url: String,
    /// Web API base URL (`SPOTIFY_API_URL`).
    pub spotify_api_url: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    /// Must match the redirect URI registered with Google (`GOOGLE_REDIRECT_URI`).
    pub google_redirect_uri: String,
    pub google_auth_url: String,
    pub google_token_url: String,
    /// YouTube Data API v3 base URL (`YOUTUBE_API_URL`).
    pub youtube_api_url: String,
    /// Key used for the quota-metered search call (`YOUTUBE_API_KEY`).
    pub youtube_api_key: String,
    /// Upper bound of concurrent search requests per conversion.
    pub search_concurrency: usize,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a required variable is missing or
    /// `SEARCH_CONCURRENCY` is not a positive number.
    ///
    /// # Example
    ///
    /// ```
    /// let cfg = Config::from_env()?;
    /// println!("listening on {}", cfg.server_address);
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Configuration(format!("{name} must be set")))
        };
        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let search_concurrency = match lookup("SEARCH_CONCURRENCY") {
            Some(raw) => parse_concurrency(&raw)?,
            None => DEFAULT_SEARCH_CONCURRENCY,
        };

        Ok(Self {
            server_address: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL),
            spotify_api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_uri: optional("GOOGLE_REDIRECT_URI", DEFAULT_GOOGLE_REDIRECT_URI),
            google_auth_url: optional("GOOGLE_AUTH_URL", DEFAULT_GOOGLE_AUTH_URL),
            google_token_url: optional("GOOGLE_TOKEN_URL", DEFAULT_GOOGLE_TOKEN_URL),
            youtube_api_url: optional("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL),
            youtube_api_key: required("YOUTUBE_API_KEY")?,
            search_concurrency,
        })
    }
}

/// Parses a concurrency bound, rejecting zero and non-numbers.
pub fn parse_concurrency(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Configuration(format!(
            "SEARCH_CONCURRENCY must be a positive number, got {raw:?}"
        ))),
    }
}
