use reqwest::{header::InvalidHeaderValue, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("token is not a valid header value")]
    InvalidToken(#[from] InvalidHeaderValue),
}

impl RequestError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
