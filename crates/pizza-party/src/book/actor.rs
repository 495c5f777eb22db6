//! # Book Actor
//!
//! The server half of the book. It owns the order collection and processes
//! requests sequentially, so the collection needs no lock.

use super::client::BookClient;
use super::error::BookError;
use super::listener::Listeners;
use super::message::{BookChange, BookRequest, Mutation, Placed};
use crate::config::PartyConfig;
use crate::view::PartyView;
use pizza_core::{allocate_with_price, award_badges, Order, OrderId, TitleBook, TitleKey};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the orders of one party.
///
/// # Usage Pattern
///
/// 1. **Create**: [`BookActor::new`] returns the actor and its [`BookClient`].
/// 2. **Wire**: pass the [`Listeners`] into [`BookActor::run`].
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use pizza_party::book::BookActor;
/// use pizza_party::config::PartyConfig;
/// use pizza_core::OrderForm;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = BookActor::new(&PartyConfig::default());
///     tokio::spawn(actor.run(Vec::new()));
///
///     let placed = client.place_order(OrderForm::new("Ada", 12, 0, false)).await.unwrap();
///     assert_eq!(placed.view.calculations.cheese_pizzas, 1);
/// }
/// ```
///
/// Orders keep insertion order, which is also display order. Ids are handed out
/// from a counter that never reuses a value, even after removals.
pub struct BookActor {
    receiver: mpsc::Receiver<BookRequest>,
    orders: Vec<Order>,
    next_id: u64,
    titles: TitleBook,
    rng: StdRng,
    price_per_pizza: f64,
}

impl BookActor {
    /// Creates an empty book and its client.
    pub fn new(config: &PartyConfig) -> (Self, BookClient) {
        Self::with_orders(config, Vec::new())
    }

    /// Creates a book seeded with existing orders.
    ///
    /// The id counter resumes after the largest seeded id. A seeded order whose
    /// id is already taken, or is `u64::MAX`, is given a fresh one. If no fresh
    /// id is left the order is dropped.
    pub fn with_orders(config: &PartyConfig, seed: Vec<Order>) -> (Self, BookClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));

        let mut next_id = seed
            .iter()
            .map(|o| o.id.0)
            .filter(|&id| id != ID_EXHAUSTED)
            .max()
            .map_or(1, |max| max + 1);
        let mut seen = HashSet::with_capacity(seed.len());
        let mut orders = Vec::with_capacity(seed.len());
        for mut order in seed {
            if order.id.0 == ID_EXHAUSTED || !seen.insert(order.id) {
                let Some(id) = issue_id(&mut next_id) else {
                    warn!(old_id = %order.id, "No order ids left, seeded order dropped");
                    continue;
                };
                warn!(old_id = %order.id, new_id = %id, "Unusable seeded id, reassigned");
                order.id = id;
                seen.insert(id);
            }
            orders.push(order);
        }

        let actor = Self {
            receiver,
            orders,
            next_id,
            titles: TitleBook::new(),
            rng: StdRng::seed_from_u64(config.title_seed),
            price_per_pizza: config.price_per_pizza,
        };
        (actor, BookClient::new(sender))
    }

    fn view(&self) -> PartyView {
        PartyView::new(
            &self.orders,
            allocate_with_price(&self.orders, self.price_per_pizza),
        )
    }

    fn position(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|o| o.id == id)
    }

    /// Notifies every listener of `change` and returns the view they saw.
    async fn changed(&self, change: BookChange, listeners: &Listeners) -> PartyView {
        let view = self.view();
        for listener in listeners {
            if let Err(e) = listener.on_change(&change, &view).await {
                warn!(listener = listener.name(), ?change, error = %e, "Listener failed");
            }
        }
        view
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `listeners` are injected here instead of at construction, the same late
    /// binding the clients use.
    pub async fn run(mut self, listeners: Listeners) {
        info!(
            size = self.orders.len(),
            listeners = listeners.len(),
            price_per_pizza = self.price_per_pizza,
            "Book started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BookRequest::Place { draft, respond_to } => {
                    debug!(?draft, "Place");
                    let Some(id) = issue_id(&mut self.next_id) else {
                        warn!("Order ids exhausted");
                        let _ = respond_to.send(Err(BookError::IdsExhausted));
                        continue;
                    };

                    let order = draft.into_order(id);
                    self.orders.push(order.clone());
                    let view = self.changed(BookChange::Placed(id), &listeners).await;
                    info!(
                        %id,
                        size = self.orders.len(),
                        total_pizzas = view.calculations.total_pizzas,
                        "Placed"
                    );
                    let _ = respond_to.send(Ok(Placed { order, view }));
                }
                BookRequest::Edit {
                    id,
                    draft,
                    respond_to,
                } => {
                    debug!(%id, ?draft, "Edit");
                    let Some(index) = self.position(id) else {
                        warn!(%id, "Not found");
                        let view = self.view();
                        let _ = respond_to.send(Ok(Mutation { order: None, view }));
                        continue;
                    };
                    draft.apply_to(&mut self.orders[index]);
                    let order = self.orders[index].clone();
                    let view = self.changed(BookChange::Edited(id), &listeners).await;
                    info!(%id, total_pizzas = view.calculations.total_pizzas, "Edited");
                    let _ = respond_to.send(Ok(Mutation {
                        order: Some(order),
                        view,
                    }));
                }
                BookRequest::MarkPaid {
                    id,
                    paid,
                    respond_to,
                } => {
                    debug!(%id, paid, "MarkPaid");
                    let Some(index) = self.position(id) else {
                        warn!(%id, "Not found");
                        let view = self.view();
                        let _ = respond_to.send(Ok(Mutation { order: None, view }));
                        continue;
                    };
                    self.orders[index].paid = paid;
                    let order = self.orders[index].clone();
                    let view = self
                        .changed(BookChange::PaidChanged { id, paid }, &listeners)
                        .await;
                    info!(%id, paid, "Payment updated");
                    let _ = respond_to.send(Ok(Mutation {
                        order: Some(order),
                        view,
                    }));
                }
                BookRequest::Remove { id, respond_to } => {
                    debug!(%id, "Remove");
                    let Some(index) = self.position(id) else {
                        warn!(%id, "Not found");
                        let view = self.view();
                        let _ = respond_to.send(Ok(Mutation { order: None, view }));
                        continue;
                    };
                    let order = self.orders.remove(index);
                    self.titles.forget(TitleKey::Solo(id));
                    let view = self.changed(BookChange::Removed(id), &listeners).await;
                    info!(
                        %id,
                        size = self.orders.len(),
                        total_pizzas = view.calculations.total_pizzas,
                        "Removed"
                    );
                    let _ = respond_to.send(Ok(Mutation {
                        order: Some(order),
                        view,
                    }));
                }
                BookRequest::Get { id, respond_to } => {
                    let order = self.position(id).map(|i| self.orders[i].clone());
                    debug!(%id, found = order.is_some(), "Get");
                    let _ = respond_to.send(Ok(order));
                }
                BookRequest::View { respond_to } => {
                    debug!(size = self.orders.len(), "View");
                    let _ = respond_to.send(Ok(self.view()));
                }
                BookRequest::Badges { respond_to } => {
                    let badges = award_badges(&self.orders, &mut self.titles, &mut self.rng);
                    debug!(winners = badges.len(), cached = self.titles.len(), "Badges");
                    let _ = respond_to.send(Ok(badges));
                }
                BookRequest::Clear { respond_to } => {
                    let removed = self.orders.len();
                    self.orders.clear();
                    self.titles.clear();
                    let view = self.changed(BookChange::Cleared, &listeners).await;
                    info!(removed, "Cleared");
                    let _ = respond_to.send(Ok(view));
                }
            }
        }

        info!(size = self.orders.len(), "Book shutdown");
    }
}

/// Counter value meaning no ids are left. Never handed out.
const ID_EXHAUSTED: u64 = u64::MAX;

/// Takes the next id from `counter`, or `None` once it reaches [`ID_EXHAUSTED`].
fn issue_id(counter: &mut u64) -> Option<OrderId> {
    if *counter == ID_EXHAUSTED {
        return None;
    }
    let id = OrderId(*counter);
    *counter += 1;
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::OrderDraft;

    fn order(id: u64, name: &str) -> Order {
        OrderDraft::new(name, 3, 3, false)
            .unwrap()
            .into_order(OrderId(id))
    }

    #[tokio::test]
    async fn test_seeded_ids_resume_after_max() {
        let config = PartyConfig::default();
        let (actor, client) = BookActor::with_orders(&config, vec![order(4, "Ada"), order(9, "Grace")]);
        tokio::spawn(actor.run(Vec::new()));

        let placed = client.place_draft(OrderDraft::new("Linus", 1, 0, false).unwrap()).await.unwrap();
        assert_eq!(placed.order.id, OrderId(10));
        assert_eq!(placed.view.ids(), vec![OrderId(4), OrderId(9), OrderId(10)]);
    }

    #[tokio::test]
    async fn test_duplicate_seeded_ids_are_reassigned() {
        let config = PartyConfig::default();
        let (actor, client) = BookActor::with_orders(&config, vec![order(2, "Ada"), order(2, "Grace")]);
        tokio::spawn(actor.run(Vec::new()));

        let view = client.view().await.unwrap();
        assert_eq!(view.ids(), vec![OrderId(2), OrderId(3)]);
        assert_eq!(view.orders[1].order.name, "Grace");

        let placed = client.place_draft(OrderDraft::new("Linus", 1, 0, false).unwrap()).await.unwrap();
        assert_eq!(placed.order.id, OrderId(4));
    }

    #[tokio::test]
    async fn test_max_seeded_id_is_reassigned() {
        let config = PartyConfig::default();
        let (actor, client) = BookActor::with_orders(&config, vec![order(u64::MAX, "Ada")]);
        tokio::spawn(actor.run(Vec::new()));

        let view = client.view().await.unwrap();
        assert_eq!(view.ids(), vec![OrderId(1)]);
        assert_eq!(view.orders[0].order.name, "Ada");

        let placed = client.place_draft(OrderDraft::new("Grace", 1, 0, false).unwrap()).await.unwrap();
        assert_eq!(placed.order.id, OrderId(2));
    }

    #[tokio::test]
    async fn test_exhausted_ids_reject_placement() {
        let config = PartyConfig::default();
        let seed = vec![order(u64::MAX - 1, "Ada"), order(u64::MAX, "Grace")];
        let (actor, client) = BookActor::with_orders(&config, seed);
        tokio::spawn(actor.run(Vec::new()));

        // Grace has nowhere to go once Ada holds the last usable id.
        let view = client.view().await.unwrap();
        assert_eq!(view.ids(), vec![OrderId(u64::MAX - 1)]);

        let result = client.place_draft(OrderDraft::new("Linus", 1, 0, false).unwrap()).await;
        assert_eq!(result, Err(BookError::IdsExhausted));
        assert_eq!(client.view().await.unwrap().len(), 1);
    }

    #[test]
    fn test_issue_id_stops_before_max() {
        let mut counter = u64::MAX - 1;
        assert_eq!(issue_id(&mut counter), Some(OrderId(u64::MAX - 1)));
        assert_eq!(issue_id(&mut counter), None);
        assert_eq!(issue_id(&mut counter), None);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let (actor, client) = BookActor::new(&PartyConfig::default());
        tokio::spawn(actor.run(Vec::new()));

        let draft = || OrderDraft::new("Ada", 2, 2, false).unwrap();
        let first = client.place_draft(draft()).await.unwrap().order.id;
        client.remove_order(first).await.unwrap();
        let second = client.place_draft(draft()).await.unwrap().order.id;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_uses_configured_price() {
        let config = PartyConfig {
            price_per_pizza: 20.0,
            ..PartyConfig::default()
        };
        let (actor, client) = BookActor::new(&config);
        tokio::spawn(actor.run(Vec::new()));

        let placed = client.place_draft(OrderDraft::new("Ada", 12, 0, false).unwrap()).await.unwrap();
        assert_eq!(placed.view.calculations.total_cost, 20.0);
    }
}
