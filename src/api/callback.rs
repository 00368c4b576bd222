use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    error::Error, server::AppState, success, types::CallbackParams, warning, youtube,
};

const FORM_PAGE: &str = include_str!("../../static/form.html");

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let (Some(code), Some(session)) = (params.code, params.state) else {
        return Error::InvalidInput("missing code or state".to_string()).into_response();
    };

    if !state.sessions.has(&session).await {
        warning!("OAuth callback for unknown session");
        return Error::UnknownSession.into_response();
    }

    let credential = match youtube::auth::exchange_code(&state.client, &state.config, &code).await {
        Ok(credential) => credential,
        Err(_) => {
            return (StatusCode::BAD_GATEWAY, "Error during OAuth callback").into_response();
        }
    };

    if let Err(e) = state.sessions.authorize(&session, credential).await {
        return e.into_response();
    }

    success!("Session {} authorized", session);
    Html(form_page(&session)).into_response()
}

/// Playlist form with the session ID filled into its hidden field.
pub fn form_page(session: &str) -> String {
    FORM_PAGE.replace("{{session}}", session)
}
