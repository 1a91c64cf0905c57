use shared::{domain::FetchStatus, error::UnknownFieldError};
use thiserror::Error;

/// Message stored when a failed retrieval carries no text of its own.
pub const FALLBACK_FETCH_ERROR: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("user source is unavailable")]
    Unavailable,
    #[error("{0}")]
    Message(String),
}

impl FetchError {
    pub fn message(message: impl Into<String>) -> Self {
        FetchError::Message(message.into())
    }

    /// Human-readable text recorded in the table's `error` slot.
    pub fn display_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            FALLBACK_FETCH_ERROR.to_string()
        } else {
            text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    #[error("load requires an idle table, current status is {status}")]
    NotIdle { status: FetchStatus },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("table command queue is full; retry")]
    QueueFull,
    #[error("table worker has stopped")]
    WorkerStopped,
}
