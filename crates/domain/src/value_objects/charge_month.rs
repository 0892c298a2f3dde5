//! Billing month value object
//!
//! Identifies one calendar month of a 4-digit year, written `MM-yyyy`.

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A calendar month to compute charges for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChargeMonth {
    first_day: NaiveDate,
}

impl ChargeMonth {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1000..=9999).contains(&year) {
            return Err(DomainError::InvalidDateTime(format!(
                "Charge year should have 4 digits, got {year}"
            )));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DomainError::InvalidDateTime(format!("Charge month should be 01-12, got {month}"))
        })?;
        Ok(Self { first_day })
    }

    /// Parse a month written as `MM-yyyy`
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = || {
            DomainError::InvalidDateTime(format!(
                "Charge date should be formatted as MM-yyyy, got `{input}`"
            ))
        };

        let (month, year) = input.trim().split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || year.len() != 4 {
            return Err(invalid());
        }
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    /// The first day of the month
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first_day)
    }

    /// Every day of the month, in ascending order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last_day();
        self.first_day.iter_days().take_while(move |day| *day <= last)
    }

    /// Number of days in the month
    pub fn length(&self) -> u32 {
        self.last_day().day()
    }

    /// English month name, e.g. "March"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.first_day.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }

    /// Year of the month
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }
}

impl fmt::Display for ChargeMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%m-%Y"))
    }
}

impl TryFrom<String> for ChargeMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChargeMonth> for String {
    fn from(month: ChargeMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_month() {
        let month = ChargeMonth::parse("03-2022").unwrap();
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2022, 3, 31).unwrap());
        assert_eq!(month.month_name(), "March");
        assert_eq!(month.to_string(), "03-2022");
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(ChargeMonth::parse("02-2024").unwrap().length(), 29);
        assert_eq!(ChargeMonth::parse("02-2022").unwrap().length(), 28);
    }

    #[test]
    fn december_ends_on_31st() {
        let month = ChargeMonth::new(2022, 12).unwrap();
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        assert_eq!(month.days().count(), 31);
    }

    #[test]
    fn days_are_ascending_and_inclusive() {
        let days: Vec<_> = ChargeMonth::parse("04-2022").unwrap().days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2022, 4, 1).unwrap());
        assert_eq!(days[29], NaiveDate::from_ymd_opt(2022, 4, 30).unwrap());
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn malformed_months_are_rejected() {
        assert!(ChargeMonth::parse("13-2022").is_err());
        assert!(ChargeMonth::parse("00-2022").is_err());
        assert!(ChargeMonth::parse("3-2022").is_err());
        assert!(ChargeMonth::parse("03-22").is_err());
        assert!(ChargeMonth::parse("2022-03").is_err());
        assert!(ChargeMonth::parse("March").is_err());
    }

    #[test]
    fn serializes_as_text() {
        let month = ChargeMonth::parse("11-2021").unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"11-2021\"");
        assert_eq!(serde_json::from_str::<ChargeMonth>(&json).unwrap(), month);
    }
}
