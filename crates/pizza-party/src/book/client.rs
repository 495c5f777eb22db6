//! # Book Client
//!
//! Typed, cloneable access to a running [`BookActor`](super::BookActor).

use super::error::BookError;
use super::message::{BookRequest, Mutation, Placed, Response};
use crate::view::PartyView;
use pizza_core::{Badge, Order, OrderDraft, OrderForm, OrderId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the order book.
///
/// Holds only a sender, so clones are cheap and can be moved into other tasks.
/// The book shuts down once every clone is dropped.
#[derive(Clone)]
pub struct BookClient {
    sender: mpsc::Sender<BookRequest>,
}

impl BookClient {
    pub fn new(sender: mpsc::Sender<BookRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> BookRequest,
    ) -> Result<T, BookError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| BookError::ActorClosed)?;
        response.await.map_err(|_| BookError::ActorDropped)?
    }

    /// Validates `form` and places it. Invalid forms never reach the book.
    #[instrument(skip(self))]
    pub async fn place_order(&self, form: OrderForm) -> Result<Placed, BookError> {
        let draft = form.validate()?;
        self.place_draft(draft).await
    }

    #[instrument(skip(self))]
    pub async fn place_draft(&self, draft: OrderDraft) -> Result<Placed, BookError> {
        debug!("Sending request");
        self.request(|respond_to| BookRequest::Place { draft, respond_to })
            .await
    }

    /// Replaces every field of order `id` except the id itself.
    #[instrument(skip(self))]
    pub async fn edit_order(&self, id: OrderId, form: OrderForm) -> Result<Mutation, BookError> {
        let draft = form.validate()?;
        debug!("Sending request");
        self.request(|respond_to| BookRequest::Edit {
            id,
            draft,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn mark_paid(&self, id: OrderId, paid: bool) -> Result<Mutation, BookError> {
        debug!("Sending request");
        self.request(|respond_to| BookRequest::MarkPaid {
            id,
            paid,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&self, id: OrderId) -> Result<Mutation, BookError> {
        debug!("Sending request");
        self.request(|respond_to| BookRequest::Remove { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, BookError> {
        self.request(|respond_to| BookRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<PartyView, BookError> {
        self.request(|respond_to| BookRequest::View { respond_to })
            .await
    }

    /// Badges for the current top eaters. Titles are cached by the book.
    #[instrument(skip(self))]
    pub async fn badges(&self) -> Result<Vec<Badge>, BookError> {
        self.request(|respond_to| BookRequest::Badges { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<PartyView, BookError> {
        debug!("Sending request");
        self.request(|respond_to| BookRequest::Clear { respond_to })
            .await
    }
}
