//! # Allocator
//!
//! Turns a set of orders into pizzas. Only the aggregate slice totals matter, so
//! [`allocate`] sums the orders and hands off to [`allocate_totals`].
//!
//! ## Algorithm
//!
//! 1. Fill whole pizzas of each topping by floor division.
//! 2. A remainder above six slices cannot share a half-and-half pizza without
//!    overflowing its side, so it becomes one more whole pizza.
//! 3. What is left is at most six slices per topping:
//!    - both non-zero: one half-and-half pizza takes both
//!    - only one non-zero: it becomes a whole pizza of its own
//!    - both zero: nothing to do
//! 4. Half-and-half pizzas are billed as full pizzas.

use crate::model::{Allocation, Order};
use crate::{HALF_PIZZA_SLICES, PRICE_PER_PIZZA, SLICES_PER_PIZZA};

/// Allocates pizzas for `orders` at the standard [`PRICE_PER_PIZZA`].
pub fn allocate<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Allocation {
    allocate_with_price(orders, PRICE_PER_PIZZA)
}

/// Allocates pizzas for `orders` at a custom price per pizza.
pub fn allocate_with_price<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    price_per_pizza: f64,
) -> Allocation {
    let (cheese, pepperoni) = orders.into_iter().fold((0u64, 0u64), |(c, p), order| {
        (
            c.saturating_add(u64::from(order.cheese_slices)),
            p.saturating_add(u64::from(order.pepperoni_slices)),
        )
    });
    allocate_totals(cheese, pepperoni, price_per_pizza)
}

/// Allocates pizzas for aggregate slice totals.
///
/// Total over the whole `u64` range: leftovers are derived from the remainders
/// rather than from capacity, so no intermediate value can overflow.
pub fn allocate_totals(total_cheese: u64, total_pepperoni: u64, price_per_pizza: f64) -> Allocation {
    let mut cheese = Side::split(total_cheese);
    let mut pepperoni = Side::split(total_pepperoni);

    let half_pizzas = match (cheese.open() > 0, pepperoni.open() > 0) {
        (true, true) => 1,
        (true, false) => {
            cheese.extra += 1;
            0
        }
        (false, true) => {
            pepperoni.extra += 1;
            0
        }
        (false, false) => 0,
    };

    let cheese_pizzas = cheese.whole + cheese.extra;
    let pepperoni_pizzas = pepperoni.whole + pepperoni.extra;
    let total_pizzas = cheese_pizzas + pepperoni_pizzas + half_pizzas;
    let total_cost = total_pizzas as f64 * price_per_pizza;
    let cost_per_slice = if total_cheese > 0 || total_pepperoni > 0 {
        total_cost / (total_cheese as f64 + total_pepperoni as f64)
    } else {
        0.0
    };

    Allocation {
        total_cheese_slices: total_cheese,
        total_pepperoni_slices: total_pepperoni,
        cheese_pizzas,
        pepperoni_pizzas,
        half_pizzas,
        leftover_cheese_slices: cheese.leftover(half_pizzas),
        leftover_pepperoni_slices: pepperoni.leftover(half_pizzas),
        total_pizzas,
        total_cost,
        cost_per_slice,
    }
}

/// One topping's slices as full pizzas plus what is left over.
struct Side {
    whole: u64,
    remainder: u64,
    /// Extra whole pizzas (0 or 1) bought to cover the remainder.
    extra: u64,
}

impl Side {
    fn split(slices: u64) -> Self {
        let remainder = slices % SLICES_PER_PIZZA;
        Self {
            whole: slices / SLICES_PER_PIZZA,
            remainder,
            extra: u64::from(remainder > HALF_PIZZA_SLICES),
        }
    }

    /// Slices still waiting for a pizza, at most six.
    fn open(&self) -> u64 {
        if self.extra > 0 {
            0
        } else {
            self.remainder
        }
    }

    /// Unused capacity of the extra pizza or this side of the half pizza.
    fn leftover(&self, half_pizzas: u64) -> u64 {
        self.extra * SLICES_PER_PIZZA + half_pizzas * HALF_PIZZA_SLICES - self.remainder
    }
}
