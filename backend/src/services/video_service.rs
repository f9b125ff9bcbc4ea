use crate::error::PipelineError;
use crate::models::VideoRecord;
use crate::services::youtube::{VideoItem, YouTubeApi};
use crate::utils::{parse_count, parse_iso8601_duration};
use log::{info, warn};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MAX_VIDEOS: u32 = 20;

// Platform limits for playlistItems pages and videos id batches.
const PLAYLIST_PAGE_LIMIT: u32 = 50;
const VIDEO_BATCH_LIMIT: usize = 50;

/// Collects the most recent `max_results` videos of an uploads playlist,
/// in playlist order.
pub async fn collect_videos(
    api: &dyn YouTubeApi,
    uploads_playlist_id: &str,
    max_results: u32,
) -> Result<Vec<VideoRecord>, PipelineError> {
    if uploads_playlist_id.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "playlist id must not be empty".to_string(),
        ));
    }

    let video_ids = fetch_playlist_video_ids(api, uploads_playlist_id, max_results).await?;
    if video_ids.is_empty() {
        info!("Playlist {uploads_playlist_id} has no videos");
        return Ok(Vec::new());
    }

    let mut items_by_id: HashMap<String, VideoItem> = HashMap::with_capacity(video_ids.len());
    for batch in video_ids.chunks(VIDEO_BATCH_LIMIT) {
        let response = api.list_videos(batch).await?;
        for item in response.items {
            items_by_id.insert(item.id.clone(), item);
        }
    }

    // The batch call does not promise playlist order, so rebuild it.
    let mut videos = Vec::with_capacity(video_ids.len());
    for video_id in &video_ids {
        match items_by_id.remove(video_id) {
            Some(item) => videos.push(video_record(item)?),
            None => warn!(
                "Video {video_id} from playlist {uploads_playlist_id} returned no details, skipping"
            ),
        }
    }

    info!(
        "Collected {} videos from playlist {uploads_playlist_id}",
        videos.len()
    );
    Ok(videos)
}

// Returns list of unique video ids of a given playlist, capped at `max_results`.
async fn fetch_playlist_video_ids(
    api: &dyn YouTubeApi,
    playlist_id: &str,
    max_results: u32,
) -> Result<Vec<String>, PipelineError> {
    let wanted = max_results as usize;
    let mut video_ids = Vec::new();
    let mut seen = HashSet::new();
    let mut next_page_token: Option<String> = None;

    while video_ids.len() < wanted {
        let page_size = (wanted - video_ids.len()).min(PLAYLIST_PAGE_LIMIT as usize) as u32;
        let response = api
            .list_playlist_items(playlist_id, page_size, next_page_token.as_deref())
            .await?;

        if response.items.is_empty() {
            break;
        }

        for item in response.items {
            let video_id = item.content_details.video_id;
            if video_ids.len() < wanted && seen.insert(video_id.clone()) {
                video_ids.push(video_id);
            }
        }

        match response.next_page_token {
            Some(token) => next_page_token = Some(token),
            None => break,
        }
    }

    Ok(video_ids)
}

fn video_record(item: VideoItem) -> Result<VideoRecord, PipelineError> {
    let title = item
        .snippet
        .map(|s| s.title)
        .ok_or_else(|| PipelineError::MalformedData(format!("video {} has no snippet", item.id)))?;
    let duration = item
        .content_details
        .and_then(|d| d.duration)
        .ok_or_else(|| PipelineError::MalformedData(format!("video {} has no duration", item.id)))?;
    let duration_seconds = parse_iso8601_duration(&duration).map_err(|e| {
        PipelineError::MalformedData(format!("video {}: {e}", item.id))
    })?;
    let statistics = item.statistics.unwrap_or_default();

    Ok(VideoRecord {
        title,
        views: parse_count(statistics.view_count.as_deref(), "viewCount")?,
        likes: parse_count(statistics.like_count.as_deref(), "likeCount")?,
        comments: parse_count(statistics.comment_count.as_deref(), "commentCount")?,
        duration_seconds,
        video_id: item.id,
    })
}
