//! Pet entity - a boarded animal together with its owner's contact details

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attendance::{AttendanceCalendar, AttendanceEntry};
use crate::value_objects::{Address, Appointment, Diet, Name, OwnerName, Phone, Tag};

/// A pet record
///
/// Pets are never edited in place: every change builds a new `Pet` that
/// replaces the old one in the pet book, so a stored pet is always fully
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    name: Name,
    phone: Phone,
    owner_name: OwnerName,
    address: Address,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    diet: Diet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    appointment: Option<Appointment>,
    #[serde(default)]
    attendance: AttendanceCalendar,
}

impl Pet {
    /// Create a new pet with no diet, appointment or attendance
    #[must_use]
    pub fn new(
        name: Name,
        phone: Phone,
        owner_name: OwnerName,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            owner_name,
            address,
            tags: tags.into_iter().collect(),
            diet: Diet::empty(),
            appointment: None,
            attendance: AttendanceCalendar::new(),
        }
    }

    /// Set the diet
    #[must_use]
    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Set or clear the appointment
    #[must_use]
    pub fn with_appointment(mut self, appointment: Option<Appointment>) -> Self {
        self.appointment = appointment;
        self
    }

    /// Replace the attendance calendar
    #[must_use]
    pub fn with_attendance_calendar(mut self, attendance: AttendanceCalendar) -> Self {
        self.attendance = attendance;
        self
    }

    /// Record attendance for one day, overwriting any earlier record
    #[must_use]
    pub fn with_attendance(mut self, date: NaiveDate, entry: AttendanceEntry) -> Self {
        self.attendance = self.attendance.with_attendance(date, entry);
        self
    }

    /// Pet name
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Owner's phone number
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Owner's name
    pub const fn owner_name(&self) -> &OwnerName {
        &self.owner_name
    }

    /// Owner's address
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Tags, sorted by name
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Diet, possibly empty
    pub const fn diet(&self) -> &Diet {
        &self.diet
    }

    /// Upcoming appointment, if any
    pub const fn appointment(&self) -> Option<&Appointment> {
        self.appointment.as_ref()
    }

    /// Attendance calendar
    pub const fn attendance(&self) -> &AttendanceCalendar {
        &self.attendance
    }

    /// Duplicate-detection identity: same name and same owner
    ///
    /// Two pets may share a name as long as they belong to different owners.
    /// Every other field is ignored.
    pub fn is_same_pet(&self, other: &Self) -> bool {
        self.name == other.name && self.owner_name == other.owner_name
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Owner Name: {}; Address: {}",
            self.name, self.phone, self.owner_name, self.address
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        if !self.diet.is_empty() {
            write!(f, "; Diet: {}", self.diet)?;
        }
        if let Some(appointment) = &self.appointment {
            write!(f, "; Appointment: {appointment}")?;
        }
        Ok(())
    }
}
