use dotenvy::dotenv;
use product_catalog::{
    Product, Result,
    config::{catalog, database},
    core::seed,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Connect and make sure the schema exists
    let database_url = database::get_database_url();
    let db = database::init_db(&database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 4. Seed from the catalog file, if one is configured
    if let Some(path) = catalog::catalog_path() {
        let catalog = catalog::load_catalog(&path)
            .inspect_err(|e| error!("Failed to load catalog {}: {}", path, e))?;
        seed::seed_products(&db, &catalog).await?;
    }

    // 5. Report what is in the catalog
    let products = Product::all(&db).await?;
    for product in &products {
        info!(
            "{} {} ({}, {}) {}",
            product,
            product.price,
            product.category,
            if product.available {
                "available"
            } else {
                "unavailable"
            },
            product.description
        );
    }
    info!("{} product(s) in catalog", products.len());

    Ok(())
}
