//! # Ranking
//!
//! Cosmetic badges for whoever ordered the most slices.
//!
//! Ties are allowed: everyone sharing the top slice count gets the same title, drawn
//! from a pool chosen by how many people tied. Randomness is injected by the caller
//! and titles are cached in a caller-owned [`TitleBook`], so the same seed and the
//! same orders always produce the same badges.

use crate::model::{Order, OrderId};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// A display title such as "Slice Sovereign".
pub type Title = &'static str;

const SOLO_TITLES: &[Title] = &[
    "Slice Sovereign",
    "Crust Conqueror",
    "Pizza Prodigy",
    "Big Cheese",
    "Topping Titan",
];

const TWO_WAY_TITLES: &[Title] = &[
    "Dynamic Dough Duo",
    "Pepperoni Partners",
    "Twin Crusts",
    "Double Trouble",
];

const THREE_WAY_TITLES: &[Title] = &[
    "Triple Threat",
    "Three Musketeers of Mozzarella",
    "Crust Trio",
];

const LARGE_GROUP_TITLES: &[Title] = &[
    "Pizza Posse",
    "Slice Squad",
    "The Whole Pie Gang",
];

/// Title pool for a given number of tied top eaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiePool {
    Solo,
    TwoWay,
    ThreeWay,
    LargeGroup,
}

impl TiePool {
    pub fn for_tie_count(count: usize) -> Self {
        match count {
            0 | 1 => TiePool::Solo,
            2 => TiePool::TwoWay,
            3 => TiePool::ThreeWay,
            _ => TiePool::LargeGroup,
        }
    }

    pub fn titles(self) -> &'static [Title] {
        match self {
            TiePool::Solo => SOLO_TITLES,
            TiePool::TwoWay => TWO_WAY_TITLES,
            TiePool::ThreeWay => THREE_WAY_TITLES,
            TiePool::LargeGroup => LARGE_GROUP_TITLES,
        }
    }
}

/// Draws a title from `pool`.
pub fn assign_title(pool: TiePool, rng: &mut impl Rng) -> Title {
    let titles = pool.titles();
    titles[rng.random_range(0..titles.len())]
}

/// Cache key for an assigned title.
///
/// A lone winner keeps their title for as long as they stay on top; tied winners
/// share one title per tie size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleKey {
    Solo(OrderId),
    Tie(usize),
}

/// The highest slice count and every order that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEaters {
    pub slices: u64,
    /// In input order.
    pub ids: Vec<OrderId>,
}

impl TopEaters {
    pub fn pool(&self) -> TiePool {
        TiePool::for_tie_count(self.ids.len())
    }

    pub fn key(&self) -> TitleKey {
        match self.ids.as_slice() {
            [only] => TitleKey::Solo(*only),
            ids => TitleKey::Tie(ids.len()),
        }
    }
}

/// Finds the orders with the most slices. `None` when there are no orders.
pub fn top_eaters<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Option<TopEaters> {
    let mut top: Option<TopEaters> = None;
    for order in orders {
        let slices = order.total_slices();
        if let Some(t) = top.as_mut() {
            if slices < t.slices {
                continue;
            }
            if slices == t.slices {
                t.ids.push(order.id);
                continue;
            }
        }
        top = Some(TopEaters {
            slices,
            ids: vec![order.id],
        });
    }
    top
}

/// Caller-owned cache of assigned titles.
#[derive(Debug, Default, Clone)]
pub struct TitleBook {
    titles: HashMap<TitleKey, Title>,
}

impl TitleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached title for `key`, drawing one on first use.
    pub fn title_for(&mut self, key: TitleKey, pool: TiePool, rng: &mut impl Rng) -> Title {
        *self
            .titles
            .entry(key)
            .or_insert_with(|| assign_title(pool, rng))
    }

    /// Drops the title for `key` so the next draw starts fresh.
    pub fn forget(&mut self, key: TitleKey) {
        self.titles.remove(&key);
    }

    pub fn clear(&mut self) {
        self.titles.clear();
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// A top eater and their title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub order_id: OrderId,
    pub name: String,
    pub slices: u64,
    pub title: Title,
}

/// One badge per top eater, all sharing the title of their tie group.
pub fn award_badges(orders: &[Order], titles: &mut TitleBook, rng: &mut impl Rng) -> Vec<Badge> {
    let Some(top) = top_eaters(orders) else {
        return Vec::new();
    };
    let title = titles.title_for(top.key(), top.pool(), rng);
    orders
        .iter()
        .filter(|order| top.ids.contains(&order.id))
        .map(|order| Badge {
            order_id: order.id,
            name: order.name.clone(),
            slices: top.slices,
            title,
        })
        .collect()
}
