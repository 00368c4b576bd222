use std::fmt;

use serde::{Deserialize, Serialize};

/// A source track reduced to what the search needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub artist: String,
    pub song: String,
}

impl Track {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
        }
    }

    /// Keyword query sent to the video search.
    pub fn search_query(&self) -> String {
        format!("{} {}", self.artist, self.song)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.song)
    }
}

/// OAuth token pair for the destination platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Credential {
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.obtained_at.saturating_add(self.expires_in)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    pub id: String,
}

/// Result of handling one source track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    Added { video_id: String },
    Unmatched,
    SearchFailed { reason: String },
    InsertionFailed { video_id: String, reason: String },
}

impl fmt::Display for TrackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackOutcome::Added { video_id } => write!(f, "added {video_id}"),
            TrackOutcome::Unmatched => write!(f, "no match"),
            TrackOutcome::SearchFailed { reason } => write!(f, "search failed: {reason}"),
            TrackOutcome::InsertionFailed { video_id, reason } => {
                write!(f, "insert of {video_id} failed: {reason}")
            }
        }
    }
}

/// Everything a conversion did, in source order.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub playlist: PlaylistRef,
    /// Set when the source playlist could not be read; the conversion then ran
    /// with zero tracks.
    pub source_error: Option<String>,
    pub items: Vec<(Track, TrackOutcome)>,
}

impl ConversionReport {
    pub fn added(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Added { .. }))
    }

    pub fn unmatched(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Unmatched))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                TrackOutcome::SearchFailed { .. } | TrackOutcome::InsertionFailed { .. }
            )
        })
    }

    fn count(&self, pred: impl Fn(&TrackOutcome) -> bool) -> usize {
        self.items.iter().filter(|(_, o)| pred(o)).count()
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Playlist created: {}", self.playlist.id)?;
        if let Some(e) = &self.source_error {
            writeln!(f, "Source playlist could not be read: {e}")?;
        }
        for (track, outcome) in &self.items {
            writeln!(f, "{track}: {outcome}")?;
        }
        write!(
            f,
            "{} added, {} unmatched, {} failed",
            self.added(),
            self.unmatched(),
            self.failed()
        )
    }
}

/// Fields posted by the playlist form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistForm {
    #[serde(default)]
    pub spotify_link: String,
    #[serde(default)]
    pub playlist_name: String,
    #[serde(default)]
    pub playlist_description: String,
    #[serde(default)]
    pub session: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

// Spotify wire types

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub name: String,
    pub artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

impl From<SpotifyTrack> for Track {
    fn from(t: SpotifyTrack) -> Track {
        let artist = t
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Track {
            artist,
            song: t.name,
        }
    }
}

// Google / YouTube wire types

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub snippet: PlaylistSnippet,
    pub status: PlaylistStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistSnippet {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    pub privacy_status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistItemRequest {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub playlist_id: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
}
