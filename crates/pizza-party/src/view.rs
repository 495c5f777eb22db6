//! # Party View
//!
//! The priced snapshot the book hands back after every request: each order with
//! what it owes, plus the allocation it was priced from. Serializes as
//! `{ "orders": [...], "calculations": {...}, "perfect": bool }`.

use pizza_core::{cost_shares, format_money, outstanding, Allocation, CostShare, Order, OrderId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An order together with its share of the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub total_slices: u64,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyView {
    pub orders: Vec<PricedOrder>,
    pub calculations: Allocation,
    pub perfect: bool,
}

impl PartyView {
    /// Prices `orders` against `calculations`, keeping their order.
    pub fn new(orders: &[Order], calculations: Allocation) -> Self {
        let orders = orders
            .iter()
            .map(|order| PricedOrder {
                order: order.clone(),
                total_slices: order.total_slices(),
                cost: calculations.order_cost(order),
            })
            .collect();
        Self {
            orders,
            perfect: calculations.is_perfect(),
            calculations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn ids(&self) -> Vec<OrderId> {
        self.orders.iter().map(|p| p.order.id).collect()
    }

    pub fn find(&self, id: OrderId) -> Option<&PricedOrder> {
        self.orders.iter().find(|p| p.order.id == id)
    }

    pub fn shares(&self) -> Vec<CostShare> {
        cost_shares(self.orders.iter().map(|p| &p.order), &self.calculations)
    }

    /// Amount still owed by people who have not paid.
    pub fn outstanding(&self) -> f64 {
        outstanding(&self.shares())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for PartyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<16} {:>6} {:>9} {:>6} {:>9}  {}",
            "Name", "Cheese", "Pepperoni", "Total", "Cost", "Paid"
        )?;
        for priced in &self.orders {
            let order = &priced.order;
            writeln!(
                f,
                "{:<16} {:>6} {:>9} {:>6} {:>9}  {}",
                order.name,
                order.cheese_slices,
                order.pepperoni_slices,
                priced.total_slices,
                format_money(priced.cost),
                if order.paid { "Yes" } else { "No" }
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.calculations)?;
        write!(f, "Outstanding: {}", format_money(self.outstanding()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::{allocate, OrderDraft};

    fn orders() -> Vec<Order> {
        vec![
            OrderDraft::new("Ada", 12, 0, true).unwrap().into_order(OrderId(1)),
            OrderDraft::new("Grace", 0, 6, false).unwrap().into_order(OrderId(2)),
            OrderDraft::new("Linus", 12, 6, false).unwrap().into_order(OrderId(3)),
        ]
    }

    #[test]
    fn test_view_prices_each_order() {
        let orders = orders();
        let view = PartyView::new(&orders, allocate(&orders));

        assert_eq!(view.ids(), vec![OrderId(1), OrderId(2), OrderId(3)]);
        assert_eq!(view.calculations.total_pizzas, 3);
        assert!(view.perfect);

        let per_slice = view.calculations.cost_per_slice;
        assert!((view.orders[0].cost - 12.0 * per_slice).abs() < 1e-9);
        assert!((view.outstanding() - 24.0 * per_slice).abs() < 1e-9);
        assert_eq!(view.find(OrderId(2)).unwrap().total_slices, 6);
        assert!(view.find(OrderId(9)).is_none());
    }

    #[test]
    fn test_view_json_uses_service_keys() {
        let orders = orders();
        let view = PartyView::new(&orders, allocate(&orders));
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert_eq!(json["orders"][0]["id"], 1);
        assert_eq!(json["orders"][0]["name"], "Ada");
        assert_eq!(json["orders"][0]["paid"], true);
        assert_eq!(json["orders"][1]["total_slices"], 6);
        assert_eq!(json["calculations"]["half_pizzas"], 0);
        assert_eq!(json["calculations"]["total_pizzas"], 3);
        assert_eq!(json["perfect"], true);
    }

    #[test]
    fn test_display_lists_orders_and_totals() {
        let orders = orders();
        let text = PartyView::new(&orders, allocate(&orders)).to_string();
        assert!(text.contains("Grace"));
        assert!(text.contains("Total pizzas: 3"));
        assert!(text.contains("Total cost: $31.59"));
        assert!(text.contains("Perfect order"));
    }

    #[test]
    fn test_empty_view() {
        let view = PartyView::new(&[], Allocation::default());
        assert!(view.is_empty());
        assert!(!view.perfect);
        assert_eq!(view.outstanding(), 0.0);
    }
}
