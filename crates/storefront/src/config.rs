//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VAPEMART_API_URL` - Base URL of the VapeMart REST API
//!
//! ## Optional
//! - `VAPEMART_CART_PATH` - Cart persistence slot location (default: `cart.json`)
//! - `VAPEMART_STRIPE_PUBLISHABLE_KEY` - Stripe publishable key handed to the
//!   checkout redirect layer; not used by this crate directly

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_CART_PATH: &str = "cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the backend REST API
    pub api_url: Url,
    /// Path of the cart persistence slot
    pub cart_path: PathBuf,
    /// Stripe publishable key for the checkout redirect
    pub stripe_publishable_key: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = required("VAPEMART_API_URL")?;
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("VAPEMART_API_URL".into(), e.to_string()))?;

        let cart_path = env::var("VAPEMART_CART_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);

        let stripe_publishable_key = env::var("VAPEMART_STRIPE_PUBLISHABLE_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(Self {
            api_url,
            cart_path,
            stripe_publishable_key,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_url_is_rejected() {
        // set_var is unsafe on edition 2024; tests run this serially enough
        // for a single process-local variable.
        unsafe {
            env::set_var("VAPEMART_API_URL", "not a url");
        }
        let err = StorefrontConfig::from_env().expect_err("should reject invalid url");
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "VAPEMART_API_URL"));
        unsafe {
            env::remove_var("VAPEMART_API_URL");
        }
    }
}
