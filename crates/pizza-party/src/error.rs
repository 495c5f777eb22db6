use crate::book::BookError;
use thiserror::Error;

/// Errors surfaced by the party system and the demo binary.
#[derive(Debug, Error)]
pub enum PartyError {
    #[error(transparent)]
    Book(#[from] BookError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Book task failed: {0}")]
    Shutdown(String),

    #[error("Failed to read orders: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed orders file: {0}")]
    Json(#[from] serde_json::Error),
}
