//! FaidErrorCode trait for template and script consumers.

/// Stable error code strings so report front-ends can branch on the kind of
/// failure without parsing messages.
pub trait FaidErrorCode {
    /// Returns the code string (e.g., "NOTE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOTE_NOT_FOUND: &str = "NOTE_NOT_FOUND";
pub const INVALID_NOTE: &str = "INVALID_NOTE";
pub const DUPLICATE_KEY: &str = "DUPLICATE_KEY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
