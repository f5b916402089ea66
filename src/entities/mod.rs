//! Entity module - Contains the `SeaORM` entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{Entity as Product, Model as ProductModel};
