//! # Change Listeners
//!
//! Listeners are the book's extension point. They are handed to
//! [`BookActor::run`](super::BookActor::run) rather than to the constructor, so a
//! listener may hold clients that were created after the book itself.

use super::error::ListenerError;
use super::message::BookChange;
use crate::view::PartyView;
use async_trait::async_trait;
use pizza_core::format_money;
use std::sync::Arc;
use tracing::info;

/// Reacts to a change in the order collection.
///
/// Called from inside the book's task after the change is applied. A failing
/// listener is logged and does not undo the change.
#[async_trait]
pub trait ChangeListener: Send + Sync {
    fn name(&self) -> &str;

    async fn on_change(&self, change: &BookChange, view: &PartyView) -> Result<(), ListenerError>;
}

/// The listener set a book runs with.
pub type Listeners = Vec<Arc<dyn ChangeListener>>;

/// Logs a one-line summary of the party after every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

#[async_trait]
impl ChangeListener for LogListener {
    fn name(&self) -> &str {
        "log"
    }

    async fn on_change(&self, change: &BookChange, view: &PartyView) -> Result<(), ListenerError> {
        let calc = &view.calculations;
        info!(
            ?change,
            orders = view.len(),
            total_pizzas = calc.total_pizzas,
            half_pizzas = calc.half_pizzas,
            leftover = calc.leftover_slices(),
            total_cost = %format_money(calc.total_cost),
            perfect = view.perfect,
            "Party updated"
        );
        Ok(())
    }
}
