//! Products offered on the listing page.
//!
//! The catalog is read-only for the lifetime of the process. It comes either
//! from a JSON file (an array of [`Product`]) or from the built-in demo set.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate names and bad prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            product
                .to_cart_item()
                .validate()
                .map_err(|e| CatalogError::Invalid(e.to_string()))?;
            if !seen.insert(product.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate product name '{}'",
                    product.name
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        let catalog = Self::new(products)?;
        tracing::info!(
            "Loaded {} products from {}",
            catalog.products.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn demo() -> Self {
        let product = |name: &str, price: f64, image: &str, description: &str| Product {
            name: name.to_string(),
            price,
            image: image.to_string(),
            description: Some(description.to_string()),
        };

        Self {
            products: vec![
                product("Shoe", 50.0, "images/shoe.png", "Everyday running shoe"),
                product("Hat", 15.0, "images/hat.png", "Wool beanie"),
                product("Jacket", 120.0, "images/jacket.png", "Waterproof shell"),
                product("Socks", 8.5, "images/socks.png", "Pack of three"),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}
