use reqwest::{Client, Url};

use crate::{
    config::Config,
    error::{Error, Result},
    types::{Credential, GoogleTokenResponse},
    utils, warning,
};

pub const YOUTUBE_SCOPE: &str = "https://www.googleapis.com/auth/youtube";

/// Builds the Google authorization URL for a session.
///
/// Requests offline access and the playlist-management scope. The session ID
/// travels as the OAuth `state` parameter and comes back on the callback.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if `GOOGLE_AUTH_URL` is not a valid URL.
///
/// # Example
///
/// ```
/// let url = authorize_url(&cfg, "a1b2c3")?;
/// // https://accounts.google.com/o/oauth2/v2/auth?client_id=...&state=a1b2c3
/// ```
pub fn authorize_url(cfg: &Config, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &cfg.google_auth_url,
        &[
            ("client_id", cfg.google_client_id.as_str()),
            ("redirect_uri", cfg.google_redirect_uri.as_str()),
            ("response_type", "code"),
            ("access_type", "offline"),
            ("scope", YOUTUBE_SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Configuration(format!("invalid GOOGLE_AUTH_URL: {e}")))?;

    Ok(url.into())
}

/// Exchanges an authorization code for a token pair.
///
/// # Arguments
///
/// * `code` - Authorization code received on the OAuth callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Credential)` - Access token, optional refresh token and expiry
/// - `Err(Error::OAuthExchange)` - The code was rejected (expired, reused,
///   wrong redirect URI) or the token endpoint was unreachable
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly. The exchange
/// should happen immediately after receiving the code.
pub async fn exchange_code(client: &Client, cfg: &Config, code: &str) -> Result<Credential> {
    let res = client
        .post(&cfg.google_token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", cfg.google_client_id.as_str()),
            ("client_secret", cfg.google_client_secret.as_str()),
            ("redirect_uri", cfg.google_redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| exchange_error(e.to_string()))?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(exchange_error(format!("{status}: {body}")));
    }

    let json = res
        .json::<GoogleTokenResponse>()
        .await
        .map_err(|e| exchange_error(e.to_string()))?;

    Ok(Credential {
        access_token: json.access_token,
        refresh_token: json.refresh_token,
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: utils::unix_now(),
    })
}

fn exchange_error(reason: String) -> Error {
    warning!("Error during OAuth callback: {}", reason);
    Error::OAuthExchange(reason)
}
