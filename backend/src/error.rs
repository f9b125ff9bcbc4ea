use crate::services::youtube::ApiError;
use thiserror::Error;

/// Failures surfaced by the collectors. Empty results are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    #[error("platform rejected the credentials: {0}")]
    Auth(String),

    #[error("could not reach the platform: {0}")]
    Transport(String),

    #[error("platform error {status}: {message}")]
    Platform { status: u16, message: String },

    #[error("malformed data: {0}")]
    MalformedData(String),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::InvalidInput(_) => "invalid_input",
            PipelineError::ChannelNotFound(_) => "not_found",
            PipelineError::Auth(_) => "auth_failure",
            PipelineError::Transport(_) => "transport_failure",
            PipelineError::Platform { .. } => "platform_error",
            PipelineError::MalformedData(_) => "malformed_data",
        }
    }
}

impl From<ApiError> for PipelineError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Transport(message) => PipelineError::Transport(message),
            ApiError::Unauthorized { message, .. } => PipelineError::Auth(message),
            ApiError::CommentsDisabled => PipelineError::Platform {
                status: 403,
                message: error.to_string(),
            },
            ApiError::Status { status, message } => PipelineError::Platform { status, message },
            ApiError::Decode(message) => PipelineError::MalformedData(message),
        }
    }
}
