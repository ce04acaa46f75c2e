use thiserror::Error;

/// Errors surfaced by the store gateway and the admin flows.
///
/// An absent single row is not an error: `fetch_college` and `fetch_profile`
/// return `Ok(None)` so screens can render a "not found" state instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store error {status}: {message}")]
    Store { status: u16, message: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
