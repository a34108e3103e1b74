//! Integration tests for VapeMart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vapemart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart slot round-trips through real files
//! - `catalog_pipeline` - Full filter/sort pipeline over a fixture catalog
//! - `context_boundary` - Quantity and checkout enforcement at the context
//!
//! This crate exposes small fixtures shared by the test binaries; no
//! external services are required.

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use vapemart_core::{CategoryId, CategoryRef, Product, ProductId};

static TRACING: Once = Once::new();

/// Initialize tracing once per test process (honors `RUST_LOG`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fixed catalog timestamp, offset by `day` for ordering tests.
///
/// # Panics
///
/// Panics if `day` is not a valid March date (test fixture misuse).
#[must_use]
pub fn created_on(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Build a fixture product with sensible defaults.
#[must_use]
pub fn product(id: &str, name: &str, price: Decimal, day: u32) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        description: String::new(),
        price,
        images: vec![format!("https://img.example/{id}.jpg")],
        category: None,
        created_at: created_on(day),
        popularity: 0,
    }
}

/// Build a fixture product belonging to a category.
#[must_use]
pub fn categorized(id: &str, name: &str, price: Decimal, day: u32, category: &str) -> Product {
    let mut p = product(id, name, price, day);
    p.category = Some(CategoryRef {
        id: CategoryId::from(category),
        name: category.to_owned(),
    });
    p
}
