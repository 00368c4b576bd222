//! Typed errors for the request flow.
//!
//! Every call into Spotify, Google OAuth or the YouTube Data API returns one of
//! these variants so handlers can tell a malformed link apart from a rejected
//! token or an upstream outage. Per-track search and insert failures are not
//! errors; they are reported as [`crate::types::TrackOutcome`] values.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("unknown session, start again at /auth")]
    UnknownSession,

    #[error("session is not authorized yet, start again at /auth")]
    NotAuthorized,

    #[error("authorization expired, start again at /auth")]
    AuthorizationExpired,

    #[error("Failed to get Spotify access token: {0}")]
    SpotifyToken(String),

    #[error("OAuth code exchange failed: {0}")]
    OAuthExchange(String),

    #[error("{service} responded with {status}: {body}")]
    Upstream {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Status code the HTTP layer answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) | Error::UnknownSession => StatusCode::BAD_REQUEST,
            Error::NotAuthorized | Error::AuthorizationExpired => StatusCode::UNAUTHORIZED,
            Error::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::SpotifyToken(_)
            | Error::OAuthExchange(_)
            | Error::Upstream { .. }
            | Error::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Reads a failed upstream response into an [`Error::Upstream`].
    pub async fn from_response(service: &'static str, response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Error::Upstream {
            service,
            status,
            body,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
