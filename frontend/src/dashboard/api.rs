use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ChannelSummary, CommentAnalysis, CommentRecord, ErrorResponse, VideoRecord};
use crate::utils::save_file;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;

    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"));
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(err) => Err(err.message),
        Err(_) => Err(format!("Request failed: HTTP {status}")),
    }
}

pub async fn fetch_channel(input: &str) -> Result<ChannelSummary, String> {
    let url = format!("{}/channel?id={}", &*BACKEND_URL, urlencoding::encode(input));
    get_json(&url).await
}

pub async fn fetch_videos(playlist_id: &str) -> Result<Vec<VideoRecord>, String> {
    let url = format!(
        "{}/playlist/{}/videos",
        &*BACKEND_URL,
        urlencoding::encode(playlist_id)
    );
    get_json(&url).await
}

pub async fn fetch_comment_analysis(video_id: &str) -> Result<CommentAnalysis, String> {
    let url = format!(
        "{}/video/{}/comments",
        &*BACKEND_URL,
        urlencoding::encode(video_id)
    );
    get_json(&url).await
}

/// Records currently on screen, sent back for CSV serialisation so the
/// download matches what the user sees.
#[derive(Clone, PartialEq)]
pub enum CsvExport {
    Videos(Vec<VideoRecord>),
    Sentiments(Vec<CommentRecord>),
}

impl CsvExport {
    pub fn filename(&self) -> &'static str {
        match self {
            CsvExport::Videos(_) => "videos.csv",
            CsvExport::Sentiments(_) => "sentiments.csv",
        }
    }

    fn url(&self) -> String {
        format!("{}/export/{}", &*BACKEND_URL, self.filename())
    }
}

pub async fn download_csv(export: &CsvExport) -> Result<(), String> {
    let request = match export {
        CsvExport::Videos(videos) => Request::post(&export.url()).json(videos),
        CsvExport::Sentiments(comments) => Request::post(&export.url()).json(comments),
    }
    .map_err(|e| format!("Failed to encode records: {e}"))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;
    if !response.ok() {
        return Err(format!("Export failed: HTTP {}", response.status()));
    }

    let csv = response
        .text()
        .await
        .map_err(|e| format!("Failed to read export: {e}"))?;
    save_file(export.filename(), "text/csv", &csv)
}
