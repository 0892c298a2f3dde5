//! Diet value object

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// Dietary requirements of a pet; an empty diet means none was recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct Diet {
    #[validate(length(max = 100))]
    value: String,
}

impl Diet {
    /// Create a new diet description; surrounding whitespace is trimmed
    pub fn new(diet: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: diet.into().trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidDiet(e.to_string()))?;
        Ok(candidate)
    }

    /// The "no diet recorded" value
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether a diet was recorded
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the diet as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Diet {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Diet> for String {
    fn from(diet: Diet) -> Self {
        diet.value
    }
}
