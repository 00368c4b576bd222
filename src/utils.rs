use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};

use crate::error::{Error, Result};

pub const SESSION_ID_LEN: usize = 32;

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// `Basic` authorization value for a client id/secret pair.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Extracts the playlist ID from a Spotify playlist link.
///
/// The ID is everything after the first `playlist/` up to the query string.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the link has no `playlist/` segment or
/// the ID is empty.
///
/// # Example
///
/// ```
/// let id = playlist_id("https://open.spotify.com/playlist/abc123?si=xyz")?;
/// assert_eq!(id, "abc123");
/// ```
pub fn playlist_id(link: &str) -> Result<String> {
    let Some((_, rest)) = link.trim().split_once("playlist/") else {
        return Err(Error::InvalidInput(format!(
            "{link:?} is not a Spotify playlist link"
        )));
    };

    let id = rest.split(['?', '#']).next().unwrap_or_default();
    let id = id.trim_end_matches('/');
    if id.is_empty() || id.contains('/') {
        return Err(Error::InvalidInput(format!(
            "{link:?} does not contain a playlist id"
        )));
    }

    Ok(id.to_string())
}

pub fn unix_now() -> u64 {
    Utc::now().timestamp() as u64
}
