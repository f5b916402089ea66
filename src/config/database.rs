//! Database configuration module.
//!
//! Resolves the connection string, opens the connection and creates the `products`
//! table from the entity definition using `SeaORM`'s `Schema::create_table_from_entity`,
//! so the schema always matches the Rust struct without hand-written SQL.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or returns
/// the default local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    resolve_database_url(std::env::var("DATABASE_URL").ok())
}

fn resolve_database_url(configured: Option<String>) -> String {
    configured
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Opens a connection to the given database URL.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Establishes a connection using [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    connect(&get_database_url()).await
}

/// Creates the `products` table if it does not already exist.
///
/// Safe to call on every start-up.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    info!("Product table ready");

    Ok(())
}

/// Connects to `database_url` and makes sure the schema exists.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = connect(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ProductModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[test]
    fn test_resolve_database_url() {
        assert_eq!(resolve_database_url(None), "sqlite://products.sqlite?mode=rwc");
        assert_eq!(resolve_database_url(Some("  ".to_string())), DEFAULT_DATABASE_URL);
        assert_eq!(
            resolve_database_url(Some("postgres://localhost/products".to_string())),
            "postgres://localhost/products"
        );
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_init_db() -> Result<()> {
        let db = init_db("sqlite::memory:").await?;
        let products: Vec<ProductModel> = Product::find().all(&db).await?;
        assert!(products.is_empty());
        Ok(())
    }
}
