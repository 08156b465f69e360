//! Error types for the dugout ecosystem.

use thiserror::Error;

/// Errors that can occur in dugout operations.
#[derive(Error, Debug)]
pub enum DugoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not signed in. Run `dugout auth login` first")]
    NotSignedIn,

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Backend API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for DugoutError {
    fn from(err: reqwest::Error) -> Self {
        DugoutError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for DugoutError {
    fn from(err: serde_json::Error) -> Self {
        DugoutError::Serialization(err.to_string())
    }
}

/// Result type alias for dugout operations.
pub type DugoutResult<T> = Result<T, DugoutError>;
