//! Category column - the fixed set of catalog categories.
//!
//! Stored as the upper-case variant name so the table stays readable from a SQL shell.

use crate::errors::Error;
use sea_orm::{Iterable, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Not yet categorized
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    /// Clothing and accessories
    #[sea_orm(string_value = "CLOTHS")]
    Cloths,
    /// Groceries
    #[sea_orm(string_value = "FOOD")]
    Food,
    /// Kitchen and household goods
    #[sea_orm(string_value = "HOUSEWARES")]
    Housewares,
    /// Cars and car parts
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    /// Hand and power tools
    #[sea_orm(string_value = "TOOLS")]
    Tools,
}

impl Category {
    /// The stored (upper-case) name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Cloths => "CLOTHS",
            Self::Food => "FOOD",
            Self::Housewares => "HOUSEWARES",
            Self::Automotive => "AUTOMOTIVE",
            Self::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::validation(format!("Invalid attribute: {s}")))
    }
}
