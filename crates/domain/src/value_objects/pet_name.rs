//! Pet name value object
//!
//! # Examples
//!
//! ```
//! use domain::Name;
//!
//! let name = Name::new("Rex").unwrap();
//! assert_eq!(name.as_str(), "Rex");
//!
//! assert!(Name::new("").is_err());
//! assert!(Name::new("R*x").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Constraint shared by pet names and owner names
pub(crate) const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

/// Check the name rule: alphanumeric characters and spaces, first character
/// must not be a space
pub(crate) fn is_valid_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(char::is_alphanumeric)
        && chars.all(|c| c.is_alphanumeric() || c == ' ')
}

/// Name of a boarded pet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    /// Create a new pet name
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        if !is_valid_name(&value) {
            return Err(DomainError::InvalidName(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self { value })
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check whether the name contains `keyword` as a whole word, ignoring case
    pub fn contains_word_ignore_case(&self, keyword: &str) -> bool {
        self.value
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.value
    }
}
