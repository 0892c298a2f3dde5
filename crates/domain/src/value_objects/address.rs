//! Owner address value object

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// Owner's home address, used for transport arrangements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    #[validate(length(min = 1, max = 200))]
    value: String,
}

impl Address {
    /// Create a new address
    ///
    /// Any text is accepted as long as it is not blank and does not start
    /// with whitespace.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: address.into(),
        };

        if candidate.value.starts_with(char::is_whitespace) {
            return Err(DomainError::InvalidAddress(
                "Addresses can take any values, and it should not be blank".to_string(),
            ));
        }

        candidate
            .validate()
            .map_err(|e| DomainError::InvalidAddress(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Address {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.value
    }
}
