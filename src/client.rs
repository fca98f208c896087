//! HTTP client for the storefront API.
//!
//! Used by the terminal front-end (`storefront products`, `storefront cart`).
//! The base URL comes from `STOREFRONT_URL` (default:
//! `http://localhost:17020/api/v1`).

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:17020/api/v1";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Debug, Clone)]
pub struct StorefrontClient {
    base_url: String,
    client: Client,
}

impl StorefrontClient {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STOREFRONT_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&CartItem>,
    ) -> Result<T, ClientError> {
        let mut request = self.client.request(method, self.url(segments)?);
        if let Some(item) = body {
            request = request.json(item);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    pub async fn landing(&self) -> Result<LandingView, ClientError> {
        self.send(Method::GET, &[], None).await
    }

    pub async fn list_products(&self) -> Result<Vec<ListingEntry>, ClientError> {
        self.send(Method::GET, &["product", "list"], None).await
    }

    /// Add one of a catalog product to the cart.
    pub async fn add_product(&self, name: &str) -> Result<CartView, ClientError> {
        self.send(Method::POST, &["product", "list", name, "add"], None)
            .await
    }

    pub async fn get_cart(&self) -> Result<CartView, ClientError> {
        self.send(Method::GET, &["product", "cart"], None).await
    }

    pub async fn add_item(&self, item: &CartItem) -> Result<CartView, ClientError> {
        self.send(Method::POST, &["product", "cart", "items"], Some(item))
            .await
    }

    pub async fn remove_item(&self, name: &str) -> Result<CartView, ClientError> {
        self.send(
            Method::POST,
            &["product", "cart", "items", name, "remove"],
            None,
        )
        .await
    }

    pub async fn delete_item(&self, name: &str) -> Result<CartView, ClientError> {
        self.send(Method::DELETE, &["product", "cart", "items", name], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_segments_to_base_path() {
        let client = StorefrontClient::new("http://localhost:17020/api/v1");
        let url = client.url(&["product", "cart"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:17020/api/v1/product/cart");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let client = StorefrontClient::new("http://localhost:17020/api/v1/");
        let url = client.url(&["product", "list"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:17020/api/v1/product/list");
    }

    #[test]
    fn url_encodes_item_names() {
        let client = StorefrontClient::new("http://localhost:17020/api/v1");
        let url = client
            .url(&["product", "cart", "items", "Running Shoe/XL"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:17020/api/v1/product/cart/items/Running%20Shoe%2FXL"
        );
    }

    #[test]
    fn url_rejects_garbage_base() {
        let client = StorefrontClient::new("not a url");
        assert!(matches!(
            client.url(&["product"]),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
