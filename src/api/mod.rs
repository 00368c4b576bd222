//! # API Module
//!
//! HTTP endpoints of the service.
//!
//! ## Endpoints
//!
//! - [`auth`] - `GET /auth`, starts a session and redirects to Google's
//!   consent page
//! - [`callback`] - `GET /oauthcb`, exchanges the authorization code and
//!   serves the playlist form for the session
//! - [`create_playlist`] - `POST /create-playlist`, runs a conversion and
//!   answers with a per-track text report
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! ## Sessions
//!
//! The OAuth `state` parameter is the session ID. The form page carries it in
//! a hidden field, so every conversion uses the credential its own browser
//! authorized.

mod auth;
mod callback;
mod health;
mod playlist;

pub use auth::auth;
pub use callback::{callback, form_page};
pub use health::health;
pub use playlist::create_playlist;
