//! REST API client for the VapeMart backend.
//!
//! The storefront never talks to the database or the payment provider
//! directly; it fetches catalog data and creates checkout sessions
//! through the backend's JSON endpoints. A failed fetch degrades to an
//! empty list at the call site, with the rendering layer owning the
//! user-visible notification.

mod types;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;
use vapemart_core::{Category, Product};

pub use types::{CheckoutRequest, CheckoutSession, ShippingContact};

/// Errors from backend API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Unexpected status {status} from {endpoint}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the VapeMart REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, a non-success status, or
    /// a body that does not decode as a product list.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products").await
    }

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, a non-success status, or
    /// a body that does not decode as a category list.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories").await
    }

    /// Create a checkout session for the given cart contents.
    ///
    /// The items are forwarded verbatim; the backend owns line-level
    /// validation and the payment-provider handshake.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, a non-success status, or
    /// a body without a session id.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, ApiError> {
        let url = self.base_url.join("/api/checkout")?;
        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: "/api/checkout",
                status,
            });
        }
        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(endpoint)?;
        debug!(%url, "fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        Ok(response.json().await?)
    }
}
