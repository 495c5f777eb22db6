//! # System Lifecycle
//!
//! Starting and stopping the book.
//!
//! [`PartySystem`] creates the [`BookActor`](crate::book::BookActor), injects its
//! listeners at `run()` and keeps the task handle. Shutdown follows the usual
//! actor sequence:
//!
//! 1. **Drop the client** - closes the sender side of the channel.
//! 2. **The book drains** - `recv()` returns `None` once queued requests are done.
//! 3. **Await the task** - a panic inside the book surfaces as [`PartyError::Shutdown`](crate::PartyError::Shutdown).
//!
//! Clones of the client held elsewhere keep the book alive, so drop them before
//! calling [`PartySystem::shutdown`].
//!
//! [`setup_tracing`] initializes logging once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run -p pizza-party     # placements, removals, shutdown
//! RUST_LOG=debug cargo run -p pizza-party    # request payloads and reads too
//! ```

pub mod party_system;
pub mod tracing;

pub use self::party_system::*;
pub use self::tracing::*;
