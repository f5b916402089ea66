//! Unified error type for the product catalog.
//!
//! Database failures are carried through unchanged inside [`Error::Database`];
//! the remaining variants cover bad input and configuration problems.

use thiserror::Error;

/// Errors raised by the product model, configuration loading and seeding.
#[derive(Debug, Error)]
pub enum Error {
    /// Any error reported by `SeaORM` or the underlying database engine
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Input that cannot be turned into a valid product
    #[error("{message}")]
    DataValidation {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// An update targeted a product id that has no row
    #[error("Product with id [{id}] was not found")]
    ProductNotFound {
        /// The id that was looked up
        id: i32,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Shorthand for building a [`Error::DataValidation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
