//! Display index value object
//!
//! Users refer to pets by their 1-based position in the currently shown
//! list. Whether the position resolves is checked when a command runs, since
//! the shown list can change between parsing and execution.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A 1-based position in the filtered pet list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Index(NonZeroUsize);

impl Index {
    /// Create an index from a 1-based position
    pub fn from_one_based(position: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(position).map(Self).ok_or_else(|| {
            DomainError::InvalidIndex("Index must be a positive integer".to_string())
        })
    }

    /// Create an index from a 0-based offset
    pub fn from_zero_based(offset: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(offset))
    }

    /// Parse an index from user text
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let position: usize = input.trim().parse().map_err(|_| {
            DomainError::InvalidIndex(format!("Index must be a positive integer, got `{input}`"))
        })?;
        Self::from_one_based(position)
    }

    /// The 1-based position
    pub const fn one_based(self) -> usize {
        self.0.get()
    }

    /// The 0-based offset
    pub const fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Index {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_one_based(value)
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> Self {
        index.one_based()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_and_zero_based_agree() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(Index::from_zero_based(2), index);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(Index::from_one_based(0).is_err());
        assert!(Index::parse("0").is_err());
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(Index::parse("-1").is_err());
        assert!(Index::parse("one").is_err());
        assert_eq!(Index::parse(" 7 ").unwrap().one_based(), 7);
    }

    #[test]
    fn deserialization_rejects_zero() {
        assert!(serde_json::from_str::<Index>("0").is_err());
        assert_eq!(serde_json::from_str::<Index>("1").unwrap().zero_based(), 0);
    }
}
