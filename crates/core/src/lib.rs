//! VapeMart Core - Shared types library.
//!
//! This crate provides common types used across all VapeMart components:
//! - `storefront` - Client-side state layer (cart, catalog, API client)
//! - `integration-tests` - Cross-crate test harness
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no storage access. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money helpers, and catalog models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
