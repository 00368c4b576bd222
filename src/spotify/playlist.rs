use reqwest::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    info,
    spotify::auth,
    types::{PlaylistTracksResponse, Track},
    utils, warning,
};

/// Fetches the first page of a playlist's items and maps them to tracks.
///
/// Only the page returned by a single `GET /playlists/{id}/tracks` call is
/// read; longer playlists are truncated at the API's default page size.
/// Items without a track object (removed or local files) are skipped.
///
/// # Errors
///
/// Returns [`Error::Upstream`] for a non-success status and [`Error::Http`]
/// for network or decoding failures.
pub async fn get_tracks(
    client: &Client,
    cfg: &Config,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Track>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = cfg.spotify_api_url,
        id = playlist_id
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    if !response.status().is_success() {
        return Err(Error::from_response("Spotify", response).await);
    }

    let json = response.json::<PlaylistTracksResponse>().await?;

    Ok(json
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .map(Track::from)
        .collect())
}

/// Reads the tracks of the playlist behind a Spotify link.
///
/// # Arguments
///
/// * `link` - A link containing a `playlist/<id>` segment, for example
///   `https://open.spotify.com/playlist/abc123?si=xyz`
///
/// # Errors
///
/// - [`Error::InvalidInput`] - the link has no playlist ID; nothing is requested
/// - [`Error::SpotifyToken`] - the client-credentials grant failed
/// - [`Error::Upstream`] / [`Error::Http`] - the playlist could not be fetched
pub async fn scrape(client: &Client, cfg: &Config, link: &str) -> Result<Vec<Track>> {
    let playlist_id = utils::playlist_id(link)?;
    let token = auth::client_credentials_token(client, cfg).await?;

    match get_tracks(client, cfg, &token, &playlist_id).await {
        Ok(tracks) => {
            info!("Found {} tracks in playlist {}", tracks.len(), playlist_id);
            Ok(tracks)
        }
        Err(e) => {
            warning!("Error fetching playlist tracks: {}", e);
            Err(e)
        }
    }
}
