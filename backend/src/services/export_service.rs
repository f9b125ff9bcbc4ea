use crate::models::{CommentRecord, VideoRecord};
use serde::Serialize;
use thiserror::Error;

pub const VIDEO_CSV_HEADER: [&str; 6] = [
    "title",
    "videoId",
    "views",
    "likes",
    "comments",
    "durationSeconds",
];
pub const COMMENT_CSV_HEADER: [&str; 2] = ["text", "sentiment"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV buffer: {0}")]
    Flush(String),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn videos_to_csv(records: &[VideoRecord]) -> Result<String, ExportError> {
    write_csv(&VIDEO_CSV_HEADER, records)
}

pub fn comments_to_csv(records: &[CommentRecord]) -> Result<String, ExportError> {
    write_csv(&COMMENT_CSV_HEADER, records)
}

// The header is written by hand so that an empty export still carries it.
fn write_csv<T: Serialize>(header: &[&str], records: &[T]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
