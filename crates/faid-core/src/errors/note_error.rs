//! Note store errors.

use super::error_code::{self, FaidErrorCode};

/// Errors raised by note lookup and store construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("no fairness note for key: {key}")]
    KeyNotFound { key: String },

    #[error("fairness note {key} has an empty {field} field")]
    InvalidNote { key: String, field: &'static str },

    #[error("fairness note {key} has a non-http link: {link}")]
    InvalidLink { key: String, link: String },

    #[error("fairness note {key} is already defined")]
    DuplicateKey { key: String },
}

impl FaidErrorCode for NoteError {
    fn error_code(&self) -> &'static str {
        match self {
            NoteError::KeyNotFound { .. } => error_code::NOTE_NOT_FOUND,
            NoteError::InvalidNote { .. } | NoteError::InvalidLink { .. } => {
                error_code::INVALID_NOTE
            }
            NoteError::DuplicateKey { .. } => error_code::DUPLICATE_KEY,
        }
    }
}

pub type NoteResult<T> = Result<T, NoteError>;
