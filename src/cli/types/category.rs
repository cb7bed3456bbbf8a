//! Lottery category tokens.

use crate::error::LotoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four fixed lottery categories.
///
/// Each category is an independent statistical universe: draws, frequency
/// tables, and occurrence analyses never mix categories.
///
/// # Examples
///
/// ```rust
/// use loto90::Category;
///
/// let gh: Category = "gh18".parse().unwrap();
/// assert_eq!(gh, Category::Gh18);
/// assert_eq!(gh.to_string(), "GH18");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "GH18")]
    Gh18,
    #[serde(rename = "CIV10")]
    Civ10,
    #[serde(rename = "CIV13")]
    Civ13,
    #[serde(rename = "CIV16")]
    Civ16,
}

impl Category {
    /// All recognized categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Gh18,
        Category::Civ10,
        Category::Civ13,
        Category::Civ16,
    ];

    /// The category token as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gh18 => "GH18",
            Category::Civ10 => "CIV10",
            Category::Civ13 => "CIV13",
            Category::Civ16 => "CIV16",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = LotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GH18" => Ok(Category::Gh18),
            "CIV10" => Ok(Category::Civ10),
            "CIV13" => Ok(Category::Civ13),
            "CIV16" => Ok(Category::Civ16),
            _ => Err(LotoError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}
