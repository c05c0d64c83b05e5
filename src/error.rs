//! Load Errors
//!
//! Every way the task fetch can fail. The cause is kept for logging only;
//! the screen always shows the same message.

use thiserror::Error;

use crate::config::LOAD_FAILED_MESSAGE;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Network failure, timeout, or body read error
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of task records
    #[error("malformed task payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised by `error_for_status` carry the status; keep it.
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status {
                status: status.as_u16(),
            },
            None => LoadError::Request(err),
        }
    }
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}
