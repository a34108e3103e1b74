//! Shopping cart state: line items, derived totals, and persistence.
//!
//! The cart is an insertion-ordered sequence of product snapshots with a
//! mirrored copy in a persistence slot. Totals are derived on every
//! read; nothing about the cart is cached.

mod slot;
mod store;
mod totals;

pub use slot::{CartSlot, JsonFileSlot, MemorySlot, SlotError};
pub use store::{CartLineItem, CartStore, DEFAULT_CATEGORY_LABEL};
pub use totals::{CartTotals, FLAT_SHIPPING_RATE, TAX_RATE};
