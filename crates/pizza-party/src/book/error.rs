//! Errors raised while talking to the book.

use pizza_core::ValidationError;
use thiserror::Error;

/// Errors returned by [`BookClient`](super::BookClient) calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The submission was rejected before it reached the book.
    #[error("Invalid order: {0}")]
    Invalid(#[from] ValidationError),

    /// The book's task has stopped and no longer accepts requests.
    #[error("Book closed")]
    ActorClosed,

    /// The book dropped the response channel without replying.
    #[error("Book dropped response channel")]
    ActorDropped,

    /// Every order id has been handed out.
    #[error("No order ids left")]
    IdsExhausted,
}

/// A change listener failed. Logged by the book, never returned to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Listener error: {0}")]
pub struct ListenerError(pub String);
