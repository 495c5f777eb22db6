//! # Pizza Core
//!
//! Pure domain logic for splitting a shared pizza order. Given the slice requests
//! of everyone at the table, this crate works out how many whole cheese, whole
//! pepperoni and half-and-half pizzas to buy, how many slices go to waste, and what
//! each person owes.
//!
//! Nothing in here does I/O or holds state between calls. The collaborator layer
//! (see the `pizza-party` crate) owns the order collection and calls into these
//! functions with a snapshot every time it changes.
//!
//! ## Layout
//!
//! 1. **Model** ([`model`]) - [`Order`], the untrusted [`OrderForm`] and the validated [`OrderDraft`],
//!    plus the derived [`Allocation`].
//! 2. **Allocator** ([`allocator`]) - [`allocate`], the floor/remainder algorithm.
//! 3. **Money** ([`money`]) - per-order cost shares and currency formatting.
//! 4. **Ranking** ([`ranking`]) - top eaters and their cosmetic titles.
//!
//! ## Example
//!
//! ```rust
//! use pizza_core::{allocate, OrderDraft, OrderId};
//!
//! let orders = vec![
//!     OrderDraft::new("Ada", 10, 5, false).unwrap().into_order(OrderId(1)),
//!     OrderDraft::new("Grace", 5, 10, true).unwrap().into_order(OrderId(2)),
//! ];
//!
//! let allocation = allocate(&orders);
//! assert_eq!(allocation.cheese_pizzas, 1);
//! assert_eq!(allocation.pepperoni_pizzas, 1);
//! assert_eq!(allocation.half_pizzas, 1);
//! assert_eq!(allocation.total_pizzas, 3);
//! assert_eq!(allocation.leftover_slices(), 6);
//! ```

pub mod allocator;
pub mod error;
pub mod model;
pub mod money;
pub mod ranking;

pub use allocator::{allocate, allocate_totals, allocate_with_price};
pub use error::ValidationError;
pub use model::*;
pub use money::{collected, cost_shares, format_money, outstanding, CostShare};
pub use ranking::{
    assign_title, award_badges, top_eaters, Badge, TiePool, Title, TitleBook, TitleKey, TopEaters,
};

/// Slices in a whole pizza.
pub const SLICES_PER_PIZZA: u64 = 12;

/// Slices on one side of a half-and-half pizza.
pub const HALF_PIZZA_SLICES: u64 = SLICES_PER_PIZZA / 2;

/// Price of one pizza, whole or half-and-half.
pub const PRICE_PER_PIZZA: f64 = 10.53;
