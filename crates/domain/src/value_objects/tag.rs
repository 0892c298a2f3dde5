//! Tag value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A single-word label attached to a pet (breed, temperament, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Create a new tag; only alphanumeric characters are allowed
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(char::is_alphanumeric) {
            return Err(DomainError::InvalidTag(
                "Tags names should be alphanumeric".to_string(),
            ));
        }
        Ok(Self { name })
    }

    /// Get the tag name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Tag {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_tag_is_accepted() {
        assert_eq!(Tag::new("Poodle").unwrap().name(), "Poodle");
    }

    #[test]
    fn multi_word_tag_is_rejected() {
        assert!(Tag::new("golden retriever").is_err());
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn display_wraps_in_brackets() {
        assert_eq!(Tag::new("friendly").unwrap().to_string(), "[friendly]");
    }
}
