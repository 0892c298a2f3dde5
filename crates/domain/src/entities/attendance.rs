//! Attendance entries and the per-pet attendance calendar
//!
//! Three states are kept apart for every day:
//! - no entry at all (nothing was recorded),
//! - an entry whose presence is unknown,
//! - an entry whose presence is known (present or absent).
//!
//! Billing only counts days with an entry whose presence is known to be true.
//! Present days may also carry a transport arrangement.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeBounds;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Display format for attendance dates
pub const ATTENDANCE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Transport arrangement for a present day
///
/// The pet is picked up from the owner and dropped off back home later the
/// same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TransportRecord")]
pub struct Transport {
    pick_up_time: NaiveTime,
    drop_off_time: NaiveTime,
}

/// Unvalidated wire shape of a transport arrangement
#[derive(Deserialize)]
struct TransportRecord {
    pick_up_time: NaiveTime,
    drop_off_time: NaiveTime,
}

impl TryFrom<TransportRecord> for Transport {
    type Error = DomainError;

    fn try_from(record: TransportRecord) -> Result<Self, Self::Error> {
        Self::new(record.pick_up_time, record.drop_off_time)
    }
}

impl Transport {
    /// Create a transport arrangement; pick-up must precede drop-off
    pub fn new(pick_up_time: NaiveTime, drop_off_time: NaiveTime) -> Result<Self, DomainError> {
        if pick_up_time >= drop_off_time {
            return Err(DomainError::InvalidAttendance(
                "Pick-up time should be earlier than drop-off time".to_string(),
            ));
        }
        Ok(Self {
            pick_up_time,
            drop_off_time,
        })
    }

    /// Parse `HH:mm` pick-up and drop-off times
    pub fn parse(pick_up_time: &str, drop_off_time: &str) -> Result<Self, DomainError> {
        let parse = |value: &str| {
            NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
                DomainError::InvalidDateTime(format!(
                    "Time should be formatted as HH:mm, got `{value}`"
                ))
            })
        };
        Self::new(parse(pick_up_time)?, parse(drop_off_time)?)
    }

    /// Time the pet is picked up from the owner
    pub const fn pick_up_time(&self) -> NaiveTime {
        self.pick_up_time
    }

    /// Time the pet is dropped off back home
    pub const fn drop_off_time(&self) -> NaiveTime {
        self.drop_off_time
    }
}

/// One day's attendance record for one pet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AttendanceRecord")]
pub struct AttendanceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    is_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transport: Option<Transport>,
}

/// Unvalidated wire shape of an attendance entry
#[derive(Deserialize)]
struct AttendanceRecord {
    #[serde(default)]
    is_present: Option<bool>,
    #[serde(default)]
    transport: Option<Transport>,
}

impl TryFrom<AttendanceRecord> for AttendanceEntry {
    type Error = DomainError;

    fn try_from(record: AttendanceRecord) -> Result<Self, Self::Error> {
        match (record.is_present, record.transport) {
            (Some(true), transport) => Ok(Self::present(transport)),
            (_, Some(_)) => Err(DomainError::InvalidAttendance(
                "Transport is only arranged on present days".to_string(),
            )),
            (Some(false), None) => Ok(Self::absent()),
            (None, None) => Ok(Self::unknown()),
        }
    }
}

impl AttendanceEntry {
    /// An entry whose presence has not been determined
    pub const fn unknown() -> Self {
        Self {
            is_present: None,
            transport: None,
        }
    }

    /// An entry recording that the pet did not attend
    pub const fn absent() -> Self {
        Self {
            is_present: Some(false),
            transport: None,
        }
    }

    /// An entry recording that the pet attended, optionally with transport
    pub const fn present(transport: Option<Transport>) -> Self {
        Self {
            is_present: Some(true),
            transport,
        }
    }

    /// Presence flag; `None` means unknown
    pub const fn is_present(&self) -> Option<bool> {
        self.is_present
    }

    /// True only when presence is known and positive
    pub const fn is_confirmed_present(&self) -> bool {
        matches!(self.is_present, Some(true))
    }

    /// Transport arrangement, if any
    pub const fn transport(&self) -> Option<Transport> {
        self.transport
    }
}

impl fmt::Display for AttendanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_present, self.transport) {
            (None, _) => write!(f, "unknown"),
            (Some(false), _) => write!(f, "absent"),
            (Some(true), Some(transport)) => write!(
                f,
                "present (pick-up {}, drop-off {})",
                transport.pick_up_time.format("%H:%M"),
                transport.drop_off_time.format("%H:%M")
            ),
            (Some(true), None) => write!(f, "present"),
        }
    }
}

/// Date-keyed attendance records of a single pet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceCalendar {
    entries: BTreeMap<NaiveDate, AttendanceEntry>,
}

impl AttendanceCalendar {
    /// An empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record exists for `date`
    pub fn has_attendance(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// The record for `date`, if any
    pub fn attendance(&self, date: NaiveDate) -> Option<&AttendanceEntry> {
        self.entries.get(&date)
    }

    /// Record attendance for `date`, returning the calendar with the entry
    /// replaced
    #[must_use]
    pub fn with_attendance(mut self, date: NaiveDate, entry: AttendanceEntry) -> Self {
        self.entries.insert(date, entry);
        self
    }

    /// Records within `range`, in ascending date order
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = (NaiveDate, &AttendanceEntry)>
    where
        R: RangeBounds<NaiveDate>,
    {
        self.entries.range(range).map(|(date, entry)| (*date, entry))
    }

    /// Number of days with a record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no day has a record
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NaiveDate, AttendanceEntry)> for AttendanceCalendar {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, AttendanceEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
