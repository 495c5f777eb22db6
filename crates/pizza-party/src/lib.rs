//! # Pizza Party
//!
//! The collaborator layer around [`pizza_core`]: it owns the order collection,
//! validates submissions, serializes every change through a single writer and
//! recomputes the allocation after each one.
//!
//! ## Why an actor?
//!
//! The allocator needs a consistent snapshot of every order on each call. Rather
//! than guard a shared `Vec<Order>` with a lock, the collection lives inside one
//! Tokio task (the **book**) that processes requests one at a time. Any number of
//! cloned [`BookClient`](book::BookClient)s can talk to it concurrently; their
//! mutations are linearized by the channel.
//!
//! ## Module Tour
//!
//! - [`book`] - the book actor, its messages, client, change listeners and a mock client for tests.
//! - [`view`] - [`PartyView`](view::PartyView), the priced snapshot returned after every change.
//! - [`lifecycle`] - [`PartySystem`](lifecycle::PartySystem) spins the book up and shuts it down;
//!   [`setup_tracing`](lifecycle::setup_tracing) initializes logging.
//! - [`config`] - [`PartyConfig`](config::PartyConfig), from CLI flags or environment.
//! - [`import`] - reading order forms from JSON.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p pizza-party
//! RUST_LOG=debug cargo run -p pizza-party -- --orders party.json
//! ```

pub mod book;
pub mod config;
pub mod error;
pub mod import;
pub mod lifecycle;
pub mod view;

pub use error::PartyError;
