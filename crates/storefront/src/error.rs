//! Unified error handling for the storefront state layer.
//!
//! Nothing here is fatal: persistence failures are swallowed inside the
//! cart store (see [`crate::cart`]), fetch failures degrade to empty
//! lists plus a user-visible notification owned by the rendering layer,
//! and the two boundary rejections below are ordinary recoverable
//! errors.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type for the storefront state layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A cart operation was given a per-line quantity outside [1, 10].
    #[error("Quantity {0} is outside the allowed range 1-10")]
    QuantityOutOfRange(u32),

    /// Checkout was requested with no items in the cart.
    #[error("Cart is empty")]
    EmptyCart,
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
