//! The result of running the allocator over a set of orders.

use crate::model::Order;
use crate::money::format_money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How many pizzas to buy and what they cost.
///
/// This is a pure derived value: it is recomputed from scratch whenever the order
/// collection changes and is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub total_cheese_slices: u64,
    pub total_pepperoni_slices: u64,
    pub cheese_pizzas: u64,
    pub pepperoni_pizzas: u64,
    /// Always 0 or 1.
    pub half_pizzas: u64,
    pub leftover_cheese_slices: u64,
    pub leftover_pepperoni_slices: u64,
    /// Half-and-half pizzas count as whole pizzas here.
    pub total_pizzas: u64,
    pub total_cost: f64,
    pub cost_per_slice: f64,
}

impl Allocation {
    /// Slices of both toppings, saturating at `u64::MAX`.
    pub fn total_slices(&self) -> u64 {
        self.total_cheese_slices
            .saturating_add(self.total_pepperoni_slices)
    }

    /// Unconsumed slice capacity across both toppings.
    pub fn leftover_slices(&self) -> u64 {
        self.leftover_cheese_slices + self.leftover_pepperoni_slices
    }

    /// True when every slice bought is eaten. An empty order is not perfect.
    pub fn is_perfect(&self) -> bool {
        self.total_slices() > 0 && self.leftover_slices() == 0
    }

    /// What `order` owes at this allocation's per-slice price.
    pub fn order_cost(&self, order: &Order) -> f64 {
        order.total_slices() as f64 * self.cost_per_slice
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Cheese:    {} slices -> {} pizzas ({} left over)",
            self.total_cheese_slices, self.cheese_pizzas, self.leftover_cheese_slices
        )?;
        writeln!(
            f,
            "Pepperoni: {} slices -> {} pizzas ({} left over)",
            self.total_pepperoni_slices, self.pepperoni_pizzas, self.leftover_pepperoni_slices
        )?;
        writeln!(f, "Half & half: {}", self.half_pizzas)?;
        writeln!(f, "Total pizzas: {}", self.total_pizzas)?;
        writeln!(f, "Total cost: {}", format_money(self.total_cost))?;
        write!(f, "Cost per slice: {}", format_money(self.cost_per_slice))?;
        if self.is_perfect() {
            write!(f, "\nPerfect order, nothing wasted!")?;
        }
        Ok(())
    }
}
