//! # Mock Book
//!
//! [`MockBook`] hands out a real [`BookClient`] whose requests are answered from a
//! queue of expectations instead of a running book. Use it to test code that
//! talks to the book without caring how the book computes its replies.
//!
//! | | MockBook | Real BookActor |
//! |---|---|---|
//! | **State** | None, replies are scripted | Real orders and allocation |
//! | **Error injection** | `return_err` | Only by dropping the book |
//! | **Use case** | Logic *around* the client | The book itself, full system |
//!
//! ```rust
//! use pizza_party::book::mock::MockBook;
//! use pizza_party::book::BookError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockBook::new();
//!     mock.expect_view().return_err(BookError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.view().await, Err(BookError::ActorClosed));
//!     mock.verify();
//! }
//! ```
//!
//! For lower-level tests, [`create_mock_client`] returns the raw receiver and the
//! `expect_*` functions pull the next request off it.

use super::client::BookClient;
use super::error::BookError;
use super::message::{BookRequest, Mutation, Placed, Response};
use crate::view::PartyView;
use pizza_core::{Badge, Order, OrderDraft, OrderId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation {
    Place(Result<Placed, BookError>),
    Mutation(Result<Mutation, BookError>),
    Get(Result<Option<Order>, BookError>),
    View(Result<PartyView, BookError>),
    Badges(Result<Vec<Badge>, BookError>),
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A book stand-in that replays scripted responses in order.
pub struct MockBook {
    client: BookClient,
    expectations: Queue,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockBook {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBook {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<BookRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (BookRequest::Place { respond_to, .. }, Some(Expectation::Place(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        BookRequest::Edit { respond_to, .. }
                        | BookRequest::MarkPaid { respond_to, .. }
                        | BookRequest::Remove { respond_to, .. },
                        Some(Expectation::Mutation(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (BookRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        BookRequest::View { respond_to } | BookRequest::Clear { respond_to },
                        Some(Expectation::View(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (BookRequest::Badges { respond_to }, Some(Expectation::Badges(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: BookClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> BookClient {
        self.client.clone()
    }

    /// Expects a `place_order` or `place_draft` call.
    pub fn expect_place(&mut self) -> ExpectationBuilder<Placed> {
        ExpectationBuilder::new(&self.expectations, Expectation::Place)
    }

    /// Expects an `edit_order`, `mark_paid` or `remove_order` call.
    pub fn expect_mutation(&mut self) -> ExpectationBuilder<Mutation> {
        ExpectationBuilder::new(&self.expectations, Expectation::Mutation)
    }

    /// Expects a `get` call. Reply with `None` for an unknown id.
    pub fn expect_get(&mut self) -> ExpectationBuilder<Option<Order>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Get)
    }

    /// Expects a `view` or `clear` call.
    pub fn expect_view(&mut self) -> ExpectationBuilder<PartyView> {
        ExpectationBuilder::new(&self.expectations, Expectation::View)
    }

    pub fn expect_badges(&mut self) -> ExpectationBuilder<Vec<Badge>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Badges)
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Queues the response for one expected request.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    wrap: fn(Result<T, BookError>) -> Expectation,
}

impl<T> ExpectationBuilder<T> {
    fn new(expectations: &Queue, wrap: fn(Result<T, BookError>) -> Expectation) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap,
        }
    }

    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: BookError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, BookError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (BookClient, mpsc::Receiver<BookRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (BookClient::new(sender), receiver)
}

/// Takes the next request if it is a placement.
pub async fn expect_place(
    receiver: &mut mpsc::Receiver<BookRequest>,
) -> Option<(OrderDraft, Response<Placed>)> {
    match receiver.recv().await {
        Some(BookRequest::Place { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is a removal.
pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<BookRequest>,
) -> Option<(OrderId, Response<Mutation>)> {
    match receiver.recv().await {
        Some(BookRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is a view.
pub async fn expect_view(
    receiver: &mut mpsc::Receiver<BookRequest>,
) -> Option<Response<PartyView>> {
    match receiver.recv().await {
        Some(BookRequest::View { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::{allocate, OrderForm};

    #[tokio::test]
    async fn test_replays_expectations_in_order() {
        let mut mock = MockBook::new();
        let order = OrderDraft::new("Ada", 12, 0, false)
            .unwrap()
            .into_order(OrderId(1));
        let view = PartyView::new(std::slice::from_ref(&order), allocate([&order]));

        mock.expect_place().return_ok(Placed {
            order: order.clone(),
            view: view.clone(),
        });
        mock.expect_mutation().return_ok(Mutation {
            order: None,
            view: view.clone(),
        });
        mock.expect_view().return_ok(view.clone());

        let client = mock.client();
        let placed = client.place_order(OrderForm::new("Ada", 12, 0, false)).await.unwrap();
        assert_eq!(placed.order, order);

        let missing = client.remove_order(OrderId(7)).await.unwrap();
        assert!(!missing.applied());

        assert_eq!(client.view().await.unwrap(), view);
        mock.verify();
    }

    #[tokio::test]
    async fn test_scripted_errors() {
        let mut mock = MockBook::new();
        mock.expect_badges().return_err(BookError::ActorDropped);

        let client = mock.client();
        assert_eq!(client.badges().await, Err(BookError::ActorDropped));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_expectation() {
        let mut mock = MockBook::new();
        let order = OrderDraft::new("Grace", 0, 6, true)
            .unwrap()
            .into_order(OrderId(3));
        mock.expect_get().return_ok(Some(order.clone()));
        mock.expect_get().return_ok(None);

        let client = mock.client();
        assert_eq!(client.get(OrderId(3)).await, Ok(Some(order)));
        assert_eq!(client.get(OrderId(8)).await, Ok(None));
        mock.verify();
    }

    #[tokio::test]
    async fn test_expect_view_helper() {
        let (client, mut receiver) = create_mock_client(4);
        let handle = tokio::spawn(async move { client.view().await });

        let respond_to = expect_view(&mut receiver).await.unwrap();
        let _ = respond_to.send(Ok(PartyView::default()));

        assert!(handle.await.unwrap().unwrap().is_empty());
    }
}
