use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Config,
    error::{Error, Result},
    types::ClientCredentialsResponse,
    utils, warning,
};

/// Obtains an application access token through the client-credentials grant.
///
/// The token is scoped to the application, not a user, which is enough for
/// reading public playlists.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `cfg` - Configuration holding the client id/secret and token endpoint
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The bearer token
/// - `Err(Error::SpotifyToken)` - Network failure, rejected credentials or a
///   malformed response
///
/// # API Documentation
///
/// Uses Spotify's token endpoint with `grant_type=client_credentials` and the
/// client id/secret as `Basic` authorization.
pub async fn client_credentials_token(client: &Client, cfg: &Config) -> Result<String> {
    let res = client
        .post(&cfg.spotify_token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth(&cfg.spotify_client_id, &cfg.spotify_client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| token_error(e.to_string()))?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(token_error(format!("{status}: {body}")));
    }

    let json = res
        .json::<ClientCredentialsResponse>()
        .await
        .map_err(|e| token_error(e.to_string()))?;

    Ok(json.access_token)
}

fn token_error(reason: String) -> Error {
    warning!("Failed to get access token: {}", reason);
    Error::SpotifyToken(reason)
}
