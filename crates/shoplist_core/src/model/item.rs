//! Item value type.
//!
//! # Invariants
//! - Item text is never empty and carries no surrounding whitespace.
//! - Equality is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Text is empty or whitespace-only.
    Empty,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "item text cannot be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// A single user-entered list entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Item(String);

impl Item {
    /// Builds an item from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - Returns [`ItemValidationError::Empty`] when nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, ItemValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Case-insensitive substring match used by the filter control.
    ///
    /// An empty needle matches every item.
    pub fn matches_query(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.to_lowercase())
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Item {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Item> for String {
    fn from(value: Item) -> Self {
        value.0
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let item = Item::parse("  milk \n").expect("non-blank input should parse");
        assert_eq!(item.as_str(), "milk");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(Item::parse(""), Err(ItemValidationError::Empty));
        assert_eq!(Item::parse(" \t "), Err(ItemValidationError::Empty));
    }

    #[test]
    fn deserialize_applies_the_same_validation_as_parse() {
        let item: Item = serde_json::from_str("\" milk \"").unwrap();
        assert_eq!(item.as_str(), "milk");
        assert!(serde_json::from_str::<Item>("\"   \"").is_err());
        assert!(serde_json::from_str::<Item>("\"\"").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let item = Item::parse("eggs").unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"eggs\"");
    }

    #[test]
    fn matches_query_ignores_case() {
        let item = Item::parse("Milkshake").unwrap();
        assert!(item.matches_query("milk"));
        assert!(item.matches_query("SHAKE"));
        assert!(item.matches_query(""));
        assert!(!item.matches_query("bread"));
    }
}
