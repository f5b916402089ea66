//! Seed catalog loading from catalog.toml
//!
//! The catalog file lists products that should exist in the database. It is
//! read once at start-up and handed to [`crate::core::seed::seed_products`].

use crate::entities::Category;
use crate::errors::{Error, Result};
use sea_orm::prelude::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Default location of the seed catalog.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    /// Products to seed
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

/// Configuration for a single product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, written either as a number or a string (`"12.50"`)
    pub price: Decimal,
    /// Whether the product is available, defaults to true
    #[serde(default = "default_available")]
    pub available: bool,
    /// Category, defaults to `UNKNOWN`
    #[serde(default)]
    pub category: Category,
}

const fn default_available() -> bool {
    true
}

/// Parses a catalog from TOML text.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog: {e}"),
    })
}

/// Loads the seed catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing or a category is not recognized
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    tracing::debug!("Loading catalog from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.display()),
    })?;

    parse_catalog(&contents)
}

/// Resolves the catalog path from `CATALOG_PATH`, falling back to
/// [`DEFAULT_CATALOG_PATH`] when that file exists.
#[must_use]
pub fn catalog_path() -> Option<String> {
    std::env::var("CATALOG_PATH").ok().or_else(|| {
        Path::new(DEFAULT_CATALOG_PATH)
            .exists()
            .then(|| DEFAULT_CATALOG_PATH.to_string())
    })
}
