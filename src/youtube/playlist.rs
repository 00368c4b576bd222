use reqwest::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, Credential, PlaylistItemRequest,
        PlaylistItemSnippet, PlaylistRef, PlaylistSnippet, PlaylistStatus, ResourceId,
    },
};

/// Creates a public playlist on the authorized user's channel.
///
/// # Errors
///
/// Returns [`Error::Upstream`] when YouTube rejects the request (missing
/// scope, revoked token, quota) and [`Error::Http`] on network failures.
pub async fn create(
    client: &Client,
    cfg: &Config,
    credential: &Credential,
    title: &str,
    description: &str,
) -> Result<PlaylistRef> {
    let api_url = format!("{uri}/playlists", uri = cfg.youtube_api_url);
    let body = CreatePlaylistRequest {
        snippet: PlaylistSnippet {
            title: title.to_string(),
            description: description.to_string(),
        },
        status: PlaylistStatus {
            privacy_status: "public".to_string(),
        },
    };

    let response = client
        .post(&api_url)
        .query(&[("part", "snippet,status")])
        .bearer_auth(&credential.access_token)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::from_response("YouTube", response).await);
    }

    let json = response.json::<CreatePlaylistResponse>().await?;
    Ok(PlaylistRef { id: json.id })
}

/// Appends a video to the end of a playlist.
pub async fn insert_video(
    client: &Client,
    cfg: &Config,
    credential: &Credential,
    playlist_id: &str,
    video_id: &str,
) -> Result<()> {
    let api_url = format!("{uri}/playlistItems", uri = cfg.youtube_api_url);
    let body = PlaylistItemRequest {
        snippet: PlaylistItemSnippet {
            playlist_id: playlist_id.to_string(),
            resource_id: ResourceId {
                kind: "youtube#video".to_string(),
                video_id: Some(video_id.to_string()),
            },
        },
    };

    let response = client
        .post(&api_url)
        .query(&[("part", "snippet")])
        .bearer_auth(&credential.access_token)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::from_response("YouTube", response).await);
    }

    Ok(())
}
