//! VapeMart Storefront - client-side state layer.
//!
//! This crate owns the state the storefront pages render from:
//!
//! - [`cart`] - the shopping cart store, its derived totals, and the
//!   persistence slot that survives page reloads
//! - [`catalog`] - the filter/sort engine deriving the product display
//!   list from the full catalog and the current filter state
//! - [`api`] - the REST client used to fetch catalog data and create
//!   checkout sessions
//! - [`context`] - the application context tying the pieces together;
//!   all cart mutation is routed through its named operations
//!
//! The rendering layer, authentication, and the backend REST API are
//! external collaborators and live elsewhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;

pub use context::AppContext;
pub use error::{AppError, Result};
