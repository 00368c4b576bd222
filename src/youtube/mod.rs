//! # YouTube Integration Module
//!
//! Google OAuth and the parts of the YouTube Data API v3 the service needs.
//!
//! ## API Coverage
//!
//! - `GET  {GOOGLE_AUTH_URL}` - Authorization page the user is redirected to
//! - `POST {GOOGLE_TOKEN_URL}` - Authorization-code exchange
//! - `POST /playlists?part=snippet,status` - Create a playlist (user token)
//! - `GET  /search?type=video&maxResults=1` - Keyword search (API key)
//! - `POST /playlistItems?part=snippet` - Append a video (user token)
//!
//! Search results are ranked by YouTube; the service trusts the first hit.

pub mod auth;
pub mod playlist;
pub mod search;
