use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{error::Result, info, server::AppState, youtube};

/// Starts a session and sends the browser to Google's consent page.
pub async fn auth(Extension(state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let session = state.sessions.begin().await;
    let url = youtube::auth::authorize_url(&state.config, &session)?;
    info!("Redirecting session {} to authorization", session);
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
