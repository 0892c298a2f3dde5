//! Owner name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pet_name::{NAME_CONSTRAINTS, is_valid_name};
use crate::errors::DomainError;

/// Name of the pet's owner
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerName {
    value: String,
}

impl OwnerName {
    /// Create a new owner name, same rule as a pet name
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        if !is_valid_name(&value) {
            return Err(DomainError::InvalidOwnerName(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self { value })
    }

    /// Get the owner name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check whether the owner name contains `keyword` as a whole word, ignoring case
    pub fn contains_word_ignore_case(&self, keyword: &str) -> bool {
        self.value
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for OwnerName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for OwnerName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OwnerName> for String {
    fn from(name: OwnerName) -> Self {
        name.value
    }
}
