use reqwest::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    types::SearchResponse,
};

/// Searches videos for a keyword query and returns the first hit's ID.
///
/// The call is authenticated with the API key, not the user's token, and
/// costs search quota on every invocation.
///
/// # Returns
///
/// - `Ok(Some(video_id))` - the top result
/// - `Ok(None)` - the search returned no videos
/// - `Err(_)` - the request failed
pub async fn first_video_id(client: &Client, cfg: &Config, query: &str) -> Result<Option<String>> {
    let api_url = format!("{uri}/search", uri = cfg.youtube_api_url);

    let response = client
        .get(&api_url)
        .query(&[
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("key", cfg.youtube_api_key.as_str()),
            ("maxResults", "1"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::from_response("YouTube", response).await);
    }

    let json = response.json::<SearchResponse>().await?;
    Ok(json.items.into_iter().find_map(|item| item.id.video_id))
}
