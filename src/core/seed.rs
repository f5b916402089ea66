//! Catalog seeding - makes sure the products listed in catalog.toml exist.

use crate::{
    config::catalog::{Catalog, ProductConfig},
    core::product::Product,
    errors::Result,
};
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

impl From<&ProductConfig> for Product {
    fn from(config: &ProductConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.description.clone(),
            config.price,
            config.available,
            config.category,
        )
    }
}

/// Creates every catalog product whose name is not already in the database.
///
/// Returns the number of products inserted, so a second run over the same
/// catalog returns zero.
///
/// # Errors
/// Returns an error if a lookup or insert fails.
pub async fn seed_products<C>(db: &C, catalog: &Catalog) -> Result<usize>
where
    C: ConnectionTrait,
{
    let mut inserted = 0;
    for config in &catalog.products {
        if Product::find_by_name(&config.name).count(db).await? > 0 {
            debug!("Product '{}' already present, skipping", config.name);
            continue;
        }
        Product::from(config).create(db).await?;
        inserted += 1;
    }
    info!(
        "Seeded {} of {} catalog products",
        inserted,
        catalog.products.len()
    );
    Ok(inserted)
}
