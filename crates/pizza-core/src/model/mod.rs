//! Plain data: orders as submitted and placed, and the allocation derived from them.

pub mod allocation;
pub mod order;

pub use allocation::*;
pub use order::*;
