//! Error handling for faid.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod note_error;

pub use config_error::ConfigError;
pub use error_code::FaidErrorCode;
pub use note_error::{NoteError, NoteResult};

/// Umbrella error for callers that touch both config and notes.
#[derive(Debug, thiserror::Error)]
pub enum FaidError {
    #[error(transparent)]
    Note(#[from] NoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FaidErrorCode for FaidError {
    fn error_code(&self) -> &'static str {
        match self {
            FaidError::Note(e) => e.error_code(),
            FaidError::Config(e) => e.error_code(),
        }
    }
}

pub type FaidResult<T> = Result<T, FaidError>;
