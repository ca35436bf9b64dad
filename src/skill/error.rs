//! Error types for the skill core

use thiserror::Error;

/// Failures raised while handling a single event.
///
/// Every variant is converted into the same spoken apology by the
/// dispatcher's error handler; the detail only reaches the operator log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    #[error("Language {0} not supported")]
    UnsupportedLanguage(String),

    #[error("Translation gateway error: {0}")]
    Gateway(String),

    #[error("No handler matched request: {0}")]
    NoHandlerMatched(String),

    #[error("Missing slot value: {0}")]
    MissingSlot(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Handler failed: {0}")]
    HandlerFailed(String),
}

pub type Result<T> = std::result::Result<T, SkillError>;
