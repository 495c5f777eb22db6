use crate::book::{BookActor, BookClient, Listeners};
use crate::config::PartyConfig;
use crate::error::PartyError;
use pizza_core::Order;
use tracing::{error, info};

/// A running party: the book task and a client for it.
///
/// # Example
///
/// ```rust
/// use pizza_core::OrderForm;
/// use pizza_party::config::PartyConfig;
/// use pizza_party::lifecycle::PartySystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), pizza_party::PartyError> {
///     let system = PartySystem::new(&PartyConfig::default());
///
///     system.client.place_order(OrderForm::new("Ada", 10, 5, false)).await?;
///     let view = system.client.view().await?;
///     assert_eq!(view.calculations.total_pizzas, 2);
///
///     system.shutdown().await
/// }
/// ```
pub struct PartySystem {
    pub client: BookClient,
    handle: tokio::task::JoinHandle<()>,
}

impl PartySystem {
    /// Starts an empty book with no listeners.
    pub fn new(config: &PartyConfig) -> Self {
        Self::with_orders(config, Vec::new(), Vec::new())
    }

    /// Starts a book seeded with `orders`, notifying `listeners` of every change.
    pub fn with_orders(config: &PartyConfig, orders: Vec<Order>, listeners: Listeners) -> Self {
        let (actor, client) = BookActor::with_orders(config, orders);
        let handle = tokio::spawn(actor.run(listeners));
        Self { client, handle }
    }

    /// Drops the client and waits for the book to finish its queue.
    pub async fn shutdown(self) -> Result<(), PartyError> {
        info!("Shutting down party...");

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Book task failed");
            return Err(PartyError::Shutdown(e.to_string()));
        }

        info!("Party shutdown complete.");
        Ok(())
    }
}
