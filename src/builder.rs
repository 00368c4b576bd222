//! Destination playlist assembly.
//!
//! A conversion is a best-effort batch: the playlist is created first, then
//! every source track is searched and, if found, appended. Individual failures
//! are recorded per track and never roll back earlier work.

use futures::{StreamExt, stream};
use reqwest::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    info, spotify, success,
    types::{ConversionReport, Credential, PlaylistRef, Track, TrackOutcome},
    warning, youtube,
};

/// What the user asked for on the playlist form.
#[derive(Debug, Clone)]
pub struct PlaylistRequest {
    pub spotify_link: String,
    pub title: String,
    pub description: String,
}

/// Everything one conversion needs, owned by the request running it.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub client: &'a Client,
    pub cfg: &'a Config,
    pub credential: &'a Credential,
}

/// Copies a Spotify playlist into a new YouTube playlist.
///
/// # Behavior
///
/// 1. The source playlist is scraped. A malformed link aborts with
///    [`Error::InvalidInput`] before anything is created. Any other scrape
///    failure is logged and the conversion continues with zero tracks.
/// 2. The destination playlist is created; failure here aborts.
/// 3. Tracks are searched and inserted, see [`fill_playlist`].
///
/// # Returns
///
/// A [`ConversionReport`] with one outcome per source track, in source order.
pub async fn convert(ctx: RequestContext<'_>, req: &PlaylistRequest) -> Result<ConversionReport> {
    let (tracks, source_error) =
        match spotify::playlist::scrape(ctx.client, ctx.cfg, &req.spotify_link).await {
            Ok(tracks) => (tracks, None),
            Err(e @ Error::InvalidInput(_)) => return Err(e),
            Err(e) => {
                warning!("Continuing without source tracks: {}", e);
                (Vec::new(), Some(e.to_string()))
            }
        };

    let playlist = match youtube::playlist::create(
        ctx.client,
        ctx.cfg,
        ctx.credential,
        &req.title,
        &req.description,
    )
    .await
    {
        Ok(playlist) => playlist,
        Err(e) => {
            warning!("Error creating playlist: {}", e);
            return Err(e);
        }
    };
    success!("Playlist created: {}", playlist.id);

    let items = fill_playlist(ctx, &playlist, tracks).await;
    let report = ConversionReport {
        playlist,
        source_error,
        items,
    };

    info!(
        "Playlist {}: {} added, {} unmatched, {} failed",
        report.playlist.id,
        report.added(),
        report.unmatched(),
        report.failed()
    );
    Ok(report)
}

/// Searches a video for every track and appends the hits to `playlist`.
///
/// Searches run concurrently, at most `search_concurrency` at a time.
/// Insertions run one after another in source order so the destination keeps
/// the source ordering. A failed insertion does not stop the remaining ones.
pub async fn fill_playlist(
    ctx: RequestContext<'_>,
    playlist: &PlaylistRef,
    tracks: Vec<Track>,
) -> Vec<(Track, TrackOutcome)> {
    let searched: Vec<(Track, Result<Option<String>>)> = stream::iter(tracks)
        .map(|track| async move {
            let found =
                youtube::search::first_video_id(ctx.client, ctx.cfg, &track.search_query()).await;
            (track, found)
        })
        .buffered(ctx.cfg.search_concurrency.max(1))
        .collect()
        .await;

    let mut items = Vec::with_capacity(searched.len());
    for (track, found) in searched {
        let outcome = match found {
            Ok(Some(video_id)) => insert(ctx, playlist, video_id).await,
            Ok(None) => {
                info!("No video found for {}", track.search_query());
                TrackOutcome::Unmatched
            }
            Err(e) => {
                warning!("Error fetching video ID for {}: {}", track.search_query(), e);
                TrackOutcome::SearchFailed {
                    reason: e.to_string(),
                }
            }
        };
        items.push((track, outcome));
    }

    items
}

async fn insert(ctx: RequestContext<'_>, playlist: &PlaylistRef, video_id: String) -> TrackOutcome {
    match youtube::playlist::insert_video(
        ctx.client,
        ctx.cfg,
        ctx.credential,
        &playlist.id,
        &video_id,
    )
    .await
    {
        Ok(()) => {
            success!("Added video {} to playlist {}", video_id, playlist.id);
            TrackOutcome::Added { video_id }
        }
        Err(e) => {
            warning!("Failed to add video {}: {}", video_id, e);
            TrackOutcome::InsertionFailed {
                video_id,
                reason: e.to_string(),
            }
        }
    }
}
