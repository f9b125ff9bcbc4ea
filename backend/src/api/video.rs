use crate::models::{CommentAnalysis, ErrorResponse, VideoRecord};
use crate::services::sentiment_service::{analyze_comments, sentiment_counts};
use crate::services::wordcloud_service::word_frequencies;
use crate::services::{comment_service, video_service};
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/<id>/videos?<max_results>")]
pub async fn list_playlist_videos(
    state: &State<AppState>,
    id: &str,
    max_results: Option<u32>,
) -> Result<Json<Vec<VideoRecord>>, ErrorResponse> {
    let max_results = max_results.unwrap_or(state.limits.max_videos);
    match video_service::collect_videos(state.youtube.as_ref(), id, max_results).await {
        Ok(videos) => {
            info!("Found {} videos in playlist {id}.", videos.len());
            Ok(Json(videos))
        }
        Err(e) => {
            error!("Failed to collect videos for playlist {id}: {e}");
            Err(e.into())
        }
    }
}

#[get("/<id>/comments?<max_comments>")]
pub async fn analyze_video_comments(
    state: &State<AppState>,
    id: &str,
    max_comments: Option<u32>,
) -> Result<Json<CommentAnalysis>, ErrorResponse> {
    let max_comments = max_comments.unwrap_or(state.limits.max_comments);
    let comments = comment_service::collect_comments(state.youtube.as_ref(), id, max_comments)
        .await
        .map_err(|e| {
            error!("Failed to collect comments for video {id}: {e}");
            ErrorResponse::from(e)
        })?;

    let word_cloud = word_frequencies(&comments, state.limits.word_cloud_size);
    let records = analyze_comments(comments);
    let counts = sentiment_counts(&records);

    Ok(Json(CommentAnalysis {
        comments: records,
        sentiment_counts: counts,
        word_cloud,
    }))
}
