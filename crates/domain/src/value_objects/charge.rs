//! Charge rate value object
//!
//! A charge is the amount billed for each day a pet is confirmed present.
//! It is supplied per charge computation and never stored on a pet.
//!
//! # Examples
//!
//! ```
//! use domain::Charge;
//!
//! let rate = Charge::parse("200").unwrap();
//! assert!((rate.amount() - 200.0).abs() < f64::EPSILON);
//!
//! assert!(Charge::parse("-5").is_err());
//! assert!(Charge::parse("abc").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-negative, finite per-day rate
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Charge(f64);

impl Charge {
    /// Create a new charge rate
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidCharge(format!(
                "Charge should be a non-negative number, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Parse a charge rate from a decimal string
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let amount: f64 = input.trim().parse().map_err(|_| {
            DomainError::InvalidCharge(format!("Charge should be a number, got `{input}`"))
        })?;
        Self::new(amount)
    }

    /// The rate as a plain amount
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<f64> for Charge {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Charge> for f64 {
    fn from(charge: Charge) -> Self {
        charge.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_accepted() {
        assert!(Charge::new(0.0).is_ok());
    }

    #[test]
    fn negative_is_rejected() {
        assert!(Charge::new(-0.01).is_err());
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Charge::new(f64::NAN).is_err());
        assert!(Charge::new(f64::INFINITY).is_err());
    }

    #[test]
    fn parse_decimal() {
        let charge = Charge::parse(" 12.5 ").unwrap();
        assert!((charge.amount() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn display_has_two_decimals() {
        assert_eq!(Charge::new(7.0).unwrap().to_string(), "$7.00");
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<Charge>("-1.0").is_err());
        assert!(serde_json::from_str::<Charge>("200").is_ok());
    }
}
