//! Splitting the bill.
//!
//! Every slice costs the same, so a person's share is just their slice count times
//! [`Allocation::cost_per_slice`]. Rounding to cents only happens for display.

use crate::model::{Allocation, Order, OrderId};
use serde::{Deserialize, Serialize};

/// Formats an amount with two decimals, e.g. `$10.53`.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// What one order owes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostShare {
    pub order_id: OrderId,
    pub name: String,
    pub slices: u64,
    pub cost: f64,
    pub paid: bool,
}

/// Prices each order at the allocation's per-slice cost, keeping input order.
pub fn cost_shares<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    allocation: &Allocation,
) -> Vec<CostShare> {
    orders
        .into_iter()
        .map(|order| CostShare {
            order_id: order.id,
            name: order.name.clone(),
            slices: order.total_slices(),
            cost: allocation.order_cost(order),
            paid: order.paid,
        })
        .collect()
}

/// Total still owed by people who have not paid.
pub fn outstanding(shares: &[CostShare]) -> f64 {
    shares.iter().filter(|s| !s.paid).map(|s| s.cost).sum()
}

/// Total already paid.
pub fn collected(shares: &[CostShare]) -> f64 {
    shares.iter().filter(|s| s.paid).map(|s| s.cost).sum()
}
