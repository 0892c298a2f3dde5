//! Appointment value object
//!
//! An appointment is a date-time (minute precision) at a named location,
//! e.g. a vet visit. A pet holds at most one.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Input and display format for appointment date-times
pub const APPOINTMENT_DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A scheduled appointment for a pet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AppointmentRecord")]
pub struct Appointment {
    date_time: NaiveDateTime,
    location: String,
}

/// Unvalidated wire shape of an appointment
#[derive(Deserialize)]
struct AppointmentRecord {
    date_time: NaiveDateTime,
    location: String,
}

impl TryFrom<AppointmentRecord> for Appointment {
    type Error = DomainError;

    fn try_from(record: AppointmentRecord) -> Result<Self, Self::Error> {
        Self::new(record.date_time, record.location)
    }
}

impl Appointment {
    /// Create a new appointment
    ///
    /// Seconds are dropped from `date_time`; the location must not be blank.
    pub fn new(date_time: NaiveDateTime, location: impl Into<String>) -> Result<Self, DomainError> {
        let location = location.into().trim().to_string();
        if location.is_empty() {
            return Err(DomainError::InvalidAppointment(
                "Appointment location should not be blank".to_string(),
            ));
        }

        let date_time = date_time
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(date_time);

        Ok(Self {
            date_time,
            location,
        })
    }

    /// Parse an appointment from `dd-MM-yyyy HH:mm` and a location
    pub fn parse(date_time: &str, location: impl Into<String>) -> Result<Self, DomainError> {
        let parsed = NaiveDateTime::parse_from_str(date_time.trim(), APPOINTMENT_DATE_TIME_FORMAT)
            .map_err(|_| {
                DomainError::InvalidDateTime(format!(
                    "Appointment should be formatted as dd-MM-yyyy HH:mm, got `{date_time}`"
                ))
            })?;
        Self::new(parsed, location)
    }

    /// When the appointment takes place
    pub const fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    /// Where the appointment takes place
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}",
            self.date_time.format(APPOINTMENT_DATE_TIME_FORMAT),
            self.location
        )
    }
}
