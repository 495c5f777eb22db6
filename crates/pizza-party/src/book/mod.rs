//! # Order Book
//!
//! The book is the single writer over the party's order collection. It runs in
//! its own Tokio task and processes [`BookRequest`]s one at a time, so every
//! allocation it computes sees a consistent snapshot.
//!
//! - [`BookActor`] - the server half: owns the orders, the id counter and the title cache.
//! - [`BookClient`] - the cloneable, typed interface. Forms are validated here.
//! - [`ChangeListener`] - hooks injected at `run()` and awaited after each change.
//! - [`mock`] - an expectation-driven client for tests that don't need a real book.

pub mod actor;
pub mod client;
pub mod error;
pub mod listener;
pub mod message;
pub mod mock;

pub use actor::BookActor;
pub use client::BookClient;
pub use error::{BookError, ListenerError};
pub use listener::{ChangeListener, Listeners, LogListener};
pub use message::{BookChange, BookRequest, Mutation, Placed, Response};
