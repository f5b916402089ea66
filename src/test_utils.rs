//! Shared test utilities for the product catalog.
//!
//! This module provides helpers for setting up an in-memory test database and a
//! [`ProductFactory`] that builds products with random but realistic values.

use crate::{core::product::Product, entities::Category, errors::Result};
use rand::{Rng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, prelude::Decimal};

const NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

const CATEGORIES: [Category; 6] = [
    Category::Unknown,
    Category::Cloths,
    Category::Food,
    Category::Housewares,
    Category::Automotive,
    Category::Tools,
];

/// Creates an in-memory `SQLite` database with the products table initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds unsaved products with random field values.
///
/// # Defaults
/// * `name`: one of a small fixed set, so name collisions are common
/// * `description`: a short sentence mentioning the name
/// * `price`: between 0.50 and 2000.00, two decimal places
/// * `available`: random
/// * `category`: random
pub struct ProductFactory;

impl ProductFactory {
    /// Builds one random product with no id.
    pub fn build() -> Product {
        let mut rng = rand::thread_rng();
        let name = NAMES.choose(&mut rng).copied().unwrap_or("Hat");
        let category = CATEGORIES.choose(&mut rng).copied().unwrap_or_default();
        let cents: i64 = rng.gen_range(50..=200_000);

        Product::new(
            name,
            format!("A very nice {} for everyday use", name.to_lowercase()),
            Decimal::new(cents, 2),
            rng.gen_bool(0.5),
            category,
        )
    }

    /// Builds `count` random products.
    pub fn build_batch(count: usize) -> Vec<Product> {
        (0..count).map(|_| Self::build()).collect()
    }
}

/// Creates and persists one random product.
pub async fn create_test_product(db: &DatabaseConnection) -> Result<Product> {
    let mut product = ProductFactory::build();
    product.create(db).await?;
    Ok(product)
}

/// Creates and persists `count` random products.
pub async fn create_test_products(db: &DatabaseConnection, count: usize) -> Result<Vec<Product>> {
    let mut products = ProductFactory::build_batch(count);
    for product in &mut products {
        product.create(db).await?;
    }
    Ok(products)
}
