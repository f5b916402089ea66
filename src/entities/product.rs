//! Product entity - Represents a catalog item stored in the `products` table.
//!
//! The row id is generated by the database on insert. Price is stored as a
//! fixed-point decimal and category as its upper-case name.

use super::category::Category;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier assigned by the database
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name of the product (e.g., "Fedora", "Hammer")
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    /// Free-text description
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub description: String,
    /// Unit price
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    /// Whether the product can currently be ordered
    pub available: bool,
    /// Catalog category
    pub category: Category,
}

/// Products have no relations to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
