use crate::error::PipelineError;
use crate::services::export_service::ExportError;
use crate::services::sentiment_service::Sentiment;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub name: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub uploads_playlist_id: String,
}

// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub title: String,
    pub video_id: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAnalysis {
    pub comments: Vec<CommentRecord>,
    pub sentiment_counts: Vec<SentimentCount>,
    pub word_cloud: Vec<WordWeight>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip)]
    pub status: Status,
}

impl From<PipelineError> for ErrorResponse {
    fn from(error: PipelineError) -> Self {
        let status = match &error {
            PipelineError::InvalidInput(_) => Status::BadRequest,
            PipelineError::ChannelNotFound(_) => Status::NotFound,
            PipelineError::Auth(_) => Status::Unauthorized,
            PipelineError::Transport(_)
            | PipelineError::Platform { .. }
            | PipelineError::MalformedData(_) => Status::BadGateway,
        };
        ErrorResponse {
            error: error.kind().to_string(),
            message: error.to_string(),
            status,
        }
    }
}

impl From<ExportError> for ErrorResponse {
    fn from(error: ExportError) -> Self {
        ErrorResponse {
            error: "export_failure".to_string(),
            message: error.to_string(),
            status: Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

/// CSV attachment served by the export routes.
pub struct CsvDownload {
    pub filename: &'static str,
    pub body: String,
}

impl<'r> Responder<'r, 'static> for CsvDownload {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::CSV)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.body.len(), Cursor::new(self.body))
            .ok()
    }
}
