//! Core business logic - the product model and catalog seeding.

pub mod product;
pub mod seed;

pub use product::{Product, ProductQuery};
