//! Owner contact phone number

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Minimum number of digits in a phone number
const MIN_DIGITS: usize = 3;

/// A validated contact phone number (digits only, at least 3 long)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Create a new phone number
    ///
    /// Spaces and dashes are stripped before validation.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let value = number.into().trim().replace([' ', '-'], "");

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone numbers should only contain numbers".to_string(),
            ));
        }

        if value.len() < MIN_DIGITS {
            return Err(DomainError::InvalidPhoneNumber(format!(
                "Phone numbers should be at least {MIN_DIGITS} digits long"
            )));
        }

        Ok(Self { value })
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_number_is_accepted() {
        let phone = Phone::new("85355255").unwrap();
        assert_eq!(phone.as_str(), "85355255");
    }

    #[test]
    fn separators_are_stripped() {
        let phone = Phone::new("8535-5255").unwrap();
        assert_eq!(phone.as_str(), "85355255");

        let phone = Phone::new(" 853 552 55 ").unwrap();
        assert_eq!(phone.as_str(), "85355255");
    }

    #[test]
    fn short_number_is_rejected() {
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("911").is_ok());
    }

    #[test]
    fn letters_are_rejected() {
        assert!(Phone::new("9011p041").is_err());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn serialization() {
        let phone = Phone::new("85355255").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"85355255\"");
        let parsed: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(phone, parsed);
    }
}
