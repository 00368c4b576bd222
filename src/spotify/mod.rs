//! # Spotify Integration Module
//!
//! Read-only access to the Spotify Web API. The service never acts on behalf of
//! a Spotify user: an application token from the client-credentials grant is
//! enough to read public playlists.
//!
//! ## Architecture
//!
//! ```text
//! Playlist form (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     └── Playlist Operations (first page of items → Track)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token
//! - `GET /playlists/{playlist_id}/tracks` - First page of playlist items
//!
//! ## Usage
//!
//! ```rust
//! let client = reqwest::Client::new();
//! let tracks = spotify::playlist::scrape(&client, &cfg, "https://open.spotify.com/playlist/abc123").await?;
//! ```
//!
//! ## Error Types
//!
//! All functions return [`crate::error::Result`]; token failures are
//! [`crate::error::Error::SpotifyToken`] so callers can tell them apart from a
//! missing playlist.

pub mod auth;
pub mod playlist;
