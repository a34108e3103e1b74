//! Newtype wrappers and catalog models shared across VapeMart crates.

pub mod id;
pub mod money;
pub mod product;

pub use id::{CategoryId, ProductId};
pub use money::{format_usd, round2};
pub use product::{Category, CategoryRef, Product};
