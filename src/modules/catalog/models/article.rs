// A catalog article is a duty-bearing item type the operation knows how to
// charge for. Phones and laptops/tablets have dynamic duty rates depending on
// customer tier and destination; everything else carries a fixed duty amount
// stored on the catalog entry itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Article category; determines how the unit customs duty is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleType {
    /// Cell phones: duty from the rate table
    #[serde(rename = "phone")]
    Phone,

    /// Laptops and tablets: duty from the rate table
    #[serde(rename = "laptop_tablet")]
    LaptopTablet,

    /// Anything else: fixed duty stored on the catalog entry
    #[serde(rename = "other")]
    Other,
}

impl Default for ArticleType {
    fn default() -> Self {
        ArticleType::Other
    }
}

impl std::fmt::Display for ArticleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleType::Phone => write!(f, "phone"),
            ArticleType::LaptopTablet => write!(f, "laptop_tablet"),
            ArticleType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ArticleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "phone" => Ok(ArticleType::Phone),
            "laptop_tablet" => Ok(ArticleType::LaptopTablet),
            "other" => Ok(ArticleType::Other),
            _ => Err(format!("Invalid article type: {}", s)),
        }
    }
}

/// Catalog entry for a billable article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,

    /// Display name (e.g. "iPhone 15", "PS5 controller")
    pub name: String,

    pub article_type: ArticleType,

    /// Fixed customs duty, only consulted when `article_type` is `Other`
    pub fixed_duty: Decimal,

    /// Inactive articles stay resolvable for existing line items but are not
    /// offered for new ones
    pub active: bool,
}

impl Article {
    pub fn new(name: String, article_type: ArticleType, fixed_duty: Decimal) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Article name cannot be empty"));
        }

        if fixed_duty < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Fixed duty must be non-negative, got: {}",
                fixed_duty
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            article_type,
            fixed_duty,
            active: true,
        })
    }
}
