//! # Pizza Party
//!
//! Demo binary: places a handful of orders (or the ones in `--orders`), walks
//! through a payment, an edit and a removal, then prints the table, the badges
//! and the JSON view.

use clap::Parser;
use pizza_core::{format_money, OrderForm};
use pizza_party::book::{BookError, Listeners, LogListener};
use pizza_party::config::PartyConfig;
use pizza_party::import::load_forms;
use pizza_party::lifecycle::{setup_tracing, PartySystem};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

fn demo_forms() -> Vec<OrderForm> {
    vec![
        OrderForm::new("Ada", 10, 5, false),
        OrderForm::new("Grace", 5, 10, false),
        OrderForm::new("Linus", 3, 0, false),
        OrderForm::new("Barbara", 0, 4, true),
        OrderForm::new("", 2, 2, false),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = PartyConfig::parse();
    config.validate()?;

    setup_tracing();
    info!(?config, "Starting pizza party");

    let forms = match &config.orders {
        Some(path) => load_forms(path)?,
        None => demo_forms(),
    };

    let listeners: Listeners = vec![Arc::new(LogListener)];
    let system = PartySystem::with_orders(&config, Vec::new(), listeners);
    let client = system.client.clone();

    let span = tracing::info_span!("placing_orders", count = forms.len());
    let placed = async {
        let mut placed = Vec::new();
        for form in forms {
            match client.place_order(form).await {
                Ok(p) => placed.push(p.order),
                Err(BookError::Invalid(e)) => warn!(error = %e, "Order rejected"),
                Err(e) => return Err(e),
            }
        }
        Ok(placed)
    }
    .instrument(span)
    .await?;

    if let Some(first) = placed.first() {
        client.mark_paid(first.id, true).await?;
    }
    if let Some(second) = placed.get(1) {
        client
            .edit_order(second.id, OrderForm::new(second.name.clone(), 6, 6, false))
            .await?;
    }
    if let Some(last) = placed.last().filter(|_| placed.len() > 2) {
        let removed = client.remove_order(last.id).await?;
        info!(id = %last.id, applied = removed.applied(), "Removed last order");
    }

    let view = client.view().await?;
    println!("{view}");

    println!();
    for badge in client.badges().await? {
        println!(
            "{}: {} ({} slices)",
            badge.title, badge.name, badge.slices
        );
    }

    println!();
    for share in view.shares().iter().filter(|s| !s.paid) {
        println!("{} owes {}", share.name, format_money(share.cost));
    }

    println!();
    println!("{}", view.to_json()?);

    drop(client);
    system.shutdown().await?;

    info!("Party complete");
    Ok(())
}
