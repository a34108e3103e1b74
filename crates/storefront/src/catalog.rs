//! Catalog filter/sort engine.
//!
//! Derives the display list for the products page from the full product
//! list and the current filter state. The stage order is fixed: search,
//! category, price, then sort - each stage narrows the set produced by
//! the previous one. The list is recomputed from scratch on every
//! change; catalogs are small (tens to low hundreds of items), so
//! incremental updates buy nothing.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use vapemart_core::{CategoryId, Product};

/// Default inclusive price bounds for the filter panel.
pub const DEFAULT_MIN_PRICE: Decimal = dec!(0);
pub const DEFAULT_MAX_PRICE: Decimal = dec!(1000);

/// Sort order for the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending creation timestamp.
    #[default]
    Newest,
    /// Ascending price.
    PriceAsc,
    /// Descending price.
    PriceDesc,
    /// Descending popularity score.
    Popularity,
}

impl SortKey {
    /// Query-parameter form of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Popularity => "popularity",
        }
    }

    /// Parse a query-parameter value. Unknown strings return `None` and
    /// callers fall back to the default.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(Self::Newest),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }
}

/// Filter and sort state for one catalog page visit.
///
/// Created fresh per visit, mutated by user interaction, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilterState {
    /// Free-text search, matched case-insensitively against product
    /// name and description. Empty means no restriction.
    pub search_query: String,
    /// Selected category ids, inclusive-OR. Empty means all categories,
    /// not none.
    pub categories: HashSet<CategoryId>,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub sort_key: SortKey,
}

impl Default for ProductFilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            categories: HashSet::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            sort_key: SortKey::default(),
        }
    }
}

impl ProductFilterState {
    /// Toggle a category in or out of the selection (checkbox panel).
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.categories.remove(&id) {
            self.categories.insert(id);
        }
    }

    /// Reset all filters to the defaults (the clear-all affordance).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any filter deviates from the defaults (drives the
    /// "clear filters" badge).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty()
            || !self.categories.is_empty()
            || self.min_price > DEFAULT_MIN_PRICE
            || self.max_price < DEFAULT_MAX_PRICE
    }
}

/// Derive the display list for the current filter state.
#[must_use]
pub fn apply(products: &[Product], filters: &ProductFilterState) -> Vec<Product> {
    let query = filters.search_query.to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|product| matches_search(product, &query))
        .filter(|product| matches_categories(product, &filters.categories))
        .filter(|product| {
            product.price >= filters.min_price && product.price <= filters.max_price
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable: equal keys keep their incoming order.
    match filters.sort_key {
        SortKey::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Popularity => result.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
    }

    result
}

fn matches_search(product: &Product, query: &str) -> bool {
    query.is_empty()
        || product.name.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
}

fn matches_categories(product: &Product, selected: &HashSet<CategoryId>) -> bool {
    selected.is_empty()
        || product
            .category
            .as_ref()
            .is_some_and(|category| selected.contains(&category.id))
}
