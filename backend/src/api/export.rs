use crate::models::{CommentRecord, CsvDownload, ErrorResponse, VideoRecord};
use crate::services::export_service::{comments_to_csv, videos_to_csv};
use log::info;
use rocket::post;
use rocket::serde::json::Json;

/// Serialises the video records the caller is showing. Nothing is fetched
/// again, so the file matches the table on screen.
#[post("/videos.csv", format = "json", data = "<videos>")]
pub fn export_videos(videos: Json<Vec<VideoRecord>>) -> Result<CsvDownload, ErrorResponse> {
    let body = videos_to_csv(&videos)?;
    info!("Exported {} videos", videos.len());
    Ok(CsvDownload {
        filename: "videos.csv",
        body,
    })
}

/// Serialises already-classified comments without re-scoring them.
#[post("/sentiments.csv", format = "json", data = "<comments>")]
pub fn export_sentiments(
    comments: Json<Vec<CommentRecord>>,
) -> Result<CsvDownload, ErrorResponse> {
    let body = comments_to_csv(&comments)?;
    info!("Exported {} comments", comments.len());
    Ok(CsvDownload {
        filename: "sentiments.csv",
        body,
    })
}
