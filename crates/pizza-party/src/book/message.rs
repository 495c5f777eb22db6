//! # Book Messages
//!
//! Requests sent from a [`BookClient`](super::BookClient) to the
//! [`BookActor`](super::BookActor), and the replies that come back.

use super::error::BookError;
use crate::view::PartyView;
use pizza_core::{Badge, Order, OrderDraft, OrderId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the book.
pub type Response<T> = oneshot::Sender<Result<T, BookError>>;

/// Internal message type sent to the book.
///
/// Mutations carry an already validated [`OrderDraft`]; raw forms are checked by
/// the client and never reach the actor.
#[derive(Debug)]
pub enum BookRequest {
    Place {
        draft: OrderDraft,
        respond_to: Response<Placed>,
    },
    Edit {
        id: OrderId,
        draft: OrderDraft,
        respond_to: Response<Mutation>,
    },
    MarkPaid {
        id: OrderId,
        paid: bool,
        respond_to: Response<Mutation>,
    },
    Remove {
        id: OrderId,
        respond_to: Response<Mutation>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    View {
        respond_to: Response<PartyView>,
    },
    Badges {
        respond_to: Response<Vec<Badge>>,
    },
    Clear {
        respond_to: Response<PartyView>,
    },
}

/// Reply to a placement: the new order and the recomputed view.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub order: Order,
    pub view: PartyView,
}

/// Reply to an edit, payment change or removal.
///
/// `order` is the edited or removed order, or `None` when the id was unknown, in
/// which case the collection is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub order: Option<Order>,
    pub view: PartyView,
}

impl Mutation {
    pub fn applied(&self) -> bool {
        self.order.is_some()
    }
}

/// What changed, as reported to [`ChangeListener`](super::ChangeListener)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookChange {
    Placed(OrderId),
    Edited(OrderId),
    PaidChanged { id: OrderId, paid: bool },
    Removed(OrderId),
    Cleared,
}
