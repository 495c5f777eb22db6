//! Error types for order validation.

use thiserror::Error;

/// Reasons an order submission is rejected before it reaches the allocator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is missing or only whitespace.
    #[error("Order name is required")]
    MissingName,

    /// A slice count was not supplied.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A slice count was below zero.
    #[error("Invalid {field}: {value} is negative")]
    NegativeSlices { field: &'static str, value: i64 },

    /// A slice count does not fit the order model.
    #[error("Invalid {field}: {value} is too large")]
    TooManySlices { field: &'static str, value: i64 },

    /// Both slice counts were zero.
    #[error("Order must include at least one slice")]
    NoSlices,
}
