//! Filter and sort keys for the displayed pet list

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::Pet;
use crate::errors::DomainError;

/// Predicate selecting which pets are displayed
///
/// Keyword filters match whole words, ignoring case, and succeed when any
/// keyword matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum PetFilter {
    /// Show every pet
    #[default]
    All,
    /// Pet name contains any keyword
    Name(Vec<String>),
    /// Owner name contains any keyword
    Owner(Vec<String>),
    /// Pet carries any of the tags
    Tag(Vec<String>),
    /// Pet has an appointment on the date
    AppointmentOn(NaiveDate),
}

impl PetFilter {
    /// Whether `pet` passes the filter
    pub fn matches(&self, pet: &Pet) -> bool {
        match self {
            Self::All => true,
            Self::Name(keywords) => keywords
                .iter()
                .any(|k| pet.name().contains_word_ignore_case(k)),
            Self::Owner(keywords) => keywords
                .iter()
                .any(|k| pet.owner_name().contains_word_ignore_case(k)),
            Self::Tag(keywords) => keywords.iter().any(|k| {
                pet.tags()
                    .iter()
                    .any(|tag| tag.name().eq_ignore_ascii_case(k))
            }),
            Self::AppointmentOn(date) => pet
                .appointment()
                .is_some_and(|a| a.date_time().date() == *date),
        }
    }

    /// Whether this is the show-all filter
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all pets"),
            Self::Name(keywords) => write!(f, "name matching {}", keywords.join(" ")),
            Self::Owner(keywords) => write!(f, "owner matching {}", keywords.join(" ")),
            Self::Tag(keywords) => write!(f, "tag matching {}", keywords.join(" ")),
            Self::AppointmentOn(date) => {
                write!(f, "appointment on {}", date.format("%d-%m-%Y"))
            },
        }
    }
}

/// Field the displayed list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Pet name, case-insensitive
    Name,
    /// Owner name, case-insensitive
    Owner,
    /// Appointment date-time, pets without one last
    Appointment,
}

impl SortField {
    /// Keyword users type to select this field
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Owner => "owner",
            Self::Appointment => "app",
        }
    }

    /// Compare two pets by this field
    pub fn compare(self, a: &Pet, b: &Pet) -> Ordering {
        match self {
            Self::Name => a
                .name()
                .as_str()
                .to_lowercase()
                .cmp(&b.name().as_str().to_lowercase()),
            Self::Owner => a
                .owner_name()
                .as_str()
                .to_lowercase()
                .cmp(&b.owner_name().as_str().to_lowercase()),
            Self::Appointment => match (a.appointment(), b.appointment()) {
                (Some(x), Some(y)) => x.date_time().cmp(&y.date_time()),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "owner" => Ok(Self::Owner),
            "app" | "appointment" => Ok(Self::Appointment),
            other => Err(DomainError::not_found("Sort field", other)),
        }
    }
}
