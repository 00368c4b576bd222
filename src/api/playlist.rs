use std::sync::Arc;

use axum::{Extension, Form, extract::rejection::FormRejection};

use crate::{
    builder::{self, PlaylistRequest, RequestContext},
    error::{Error, Result},
    server::AppState,
    types::CreatePlaylistForm,
    utils,
};

/// Converts the submitted Spotify playlist and answers with a text report.
///
/// The form is validated before the session is consulted so a malformed post
/// is always reported as invalid input.
pub async fn create_playlist(
    Extension(state): Extension<Arc<AppState>>,
    form: std::result::Result<Form<CreatePlaylistForm>, FormRejection>,
) -> Result<String> {
    let Form(form) = form.map_err(|e| Error::InvalidInput(e.body_text()))?;
    utils::playlist_id(&form.spotify_link)?;
    if form.playlist_name.trim().is_empty() {
        return Err(Error::InvalidInput("playlistName must not be empty".to_string()));
    }
    let credential = state.sessions.credential(&form.session).await?;

    let ctx = RequestContext {
        client: &state.client,
        cfg: &state.config,
        credential: &credential,
    };
    let req = PlaylistRequest {
        spotify_link: form.spotify_link,
        title: form.playlist_name,
        description: form.playlist_description,
    };

    let report = builder::convert(ctx, &req).await?;
    Ok(report.to_string())
}
