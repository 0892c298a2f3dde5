//! Pet commands - Strongly typed representations of user intents
//!
//! Every variant carries arguments that were validated when they were
//! built. Whether an index resolves against the displayed list is decided
//! only when the command runs.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{ATTENDANCE_DATE_FORMAT, Pet, Transport};
use crate::value_objects::{
    Address, Appointment, Charge, ChargeMonth, Diet, Index, Name, OwnerName, Phone, Tag,
};
use crate::view::PetFilter;

/// All commands that can run against the pet model
///
/// Two commands are equal when they carry equal arguments, so a parsed
/// command can be compared with an expected one without running it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PetCommand {
    /// Add a new pet
    Add {
        /// The pet to add
        pet: Pet,
    },

    /// Replace fields of the pet at `index`
    Edit {
        /// Position in the displayed list
        index: Index,
        /// Fields to change
        descriptor: EditPetDescriptor,
    },

    /// Remove the pet at `index`
    Delete {
        /// Position in the displayed list
        index: Index,
    },

    /// Show only pets passing `filter`
    Find {
        /// Display predicate
        filter: PetFilter,
    },

    /// Show every pet
    List,

    /// Sort the displayed list by a named field
    Sort {
        /// Field keyword, checked when the command runs
        field: String,
    },

    /// Revert the most recent change to the pet book
    Undo,

    /// Remove every pet
    Clear,

    /// Compute what the owner owes for one month
    Charge {
        /// Position in the displayed list
        index: Index,
        /// Month to bill
        month: ChargeMonth,
        /// Per-day rate; the command fails when it runs without one
        #[serde(default)]
        rate: Option<Charge>,
    },

    /// Mark the pet as present on a day
    Present {
        /// Position in the displayed list
        index: Index,
        /// Day of attendance
        date: NaiveDate,
        /// Optional pick-up and drop-off
        #[serde(default)]
        transport: Option<Transport>,
    },

    /// Mark the pet as absent on a day
    Absent {
        /// Position in the displayed list
        index: Index,
        /// Day of absence
        date: NaiveDate,
    },

    /// Replace the pet's diet; an empty diet removes it
    Diet {
        /// Position in the displayed list
        index: Index,
        /// New diet
        #[serde(default)]
        diet: Diet,
    },

    /// Set or clear the pet's appointment
    Appointment {
        /// Position in the displayed list
        index: Index,
        /// New appointment, `None` clears it
        #[serde(default)]
        appointment: Option<Appointment>,
    },

    /// Show help
    Help,

    /// Leave the application
    Exit,
}

impl PetCommand {
    /// The keyword users type for this command
    pub const fn word(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::Find { .. } => "find",
            Self::List => "list",
            Self::Sort { .. } => "sort",
            Self::Undo => "undo",
            Self::Clear => "clear",
            Self::Charge { .. } => "charge",
            Self::Present { .. } => "present",
            Self::Absent { .. } => "absent",
            Self::Diet { .. } => "diet",
            Self::Appointment { .. } => "app",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Whether a successful run may change the pet book
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Edit { .. }
                | Self::Delete { .. }
                | Self::Clear
                | Self::Present { .. }
                | Self::Absent { .. }
                | Self::Diet { .. }
                | Self::Appointment { .. }
        )
    }

    /// Short human-readable description, used in logs
    pub fn description(&self) -> String {
        match self {
            Self::Add { pet } => format!("Add pet {}", pet.name()),
            Self::Edit { index, .. } => format!("Edit pet #{index}"),
            Self::Delete { index } => format!("Delete pet #{index}"),
            Self::Find { filter } => format!("Find pets by {filter}"),
            Self::List => "List all pets".to_string(),
            Self::Sort { field } => format!("Sort pets by {field}"),
            Self::Undo => "Undo last change".to_string(),
            Self::Clear => "Clear all pets".to_string(),
            Self::Charge { index, month, .. } => format!("Charge pet #{index} for {month}"),
            Self::Present { index, date, .. } => format!(
                "Mark pet #{index} present on {}",
                date.format(ATTENDANCE_DATE_FORMAT)
            ),
            Self::Absent { index, date } => format!(
                "Mark pet #{index} absent on {}",
                date.format(ATTENDANCE_DATE_FORMAT)
            ),
            Self::Diet { index, .. } => format!("Set diet of pet #{index}"),
            Self::Appointment { index, appointment } => match appointment {
                Some(_) => format!("Set appointment of pet #{index}"),
                None => format!("Clear appointment of pet #{index}"),
            },
            Self::Help => "Show help".to_string(),
            Self::Exit => "Exit".to_string(),
        }
    }
}

/// Fields an edit replaces; fields left `None` keep the original value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPetDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<OwnerName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Replaces the whole tag set; an empty set removes all tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPetDescriptor {
    /// Whether at least one field is set
    pub const fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.owner_name.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Build the edited pet
    ///
    /// Diet, appointment and attendance always carry over from `original`.
    #[must_use]
    pub fn apply(&self, original: &Pet) -> Pet {
        let tags = self.tags.as_ref().unwrap_or_else(|| original.tags()).clone();
        Pet::new(
            self.name.clone().unwrap_or_else(|| original.name().clone()),
            self.phone.clone().unwrap_or_else(|| original.phone().clone()),
            self.owner_name
                .clone()
                .unwrap_or_else(|| original.owner_name().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| original.address().clone()),
            tags,
        )
        .with_diet(original.diet().clone())
        .with_appointment(original.appointment().cloned())
        .with_attendance_calendar(original.attendance().clone())
    }
}

/// Usage text for each command keyword
pub mod usage {
    pub const ADD: &str = "add: Adds a pet to the pet book.\n\
         Parameters: n/NAME o/OWNER_NAME p/PHONE a/ADDRESS [t/TAG]...\n\
         Example: add n/Woofie o/Alice Tan p/98765432 a/311, Clementi Ave 2, #02-25 t/Poodle";
    pub const EDIT: &str = "edit: Edits the details of the pet identified by the index number \
         used in the displayed pet list. Existing values will be overwritten by the input values.\n\
         Parameters: INDEX (must be a positive integer) [n/NAME] [o/OWNER_NAME] [p/PHONE] \
         [a/ADDRESS] [t/TAG]...\n\
         Example: edit 1 p/91234567";
    pub const DELETE: &str = "delete: Deletes the pet identified by the index number used in \
         the displayed pet list.\n\
         Parameters: INDEX (must be a positive integer)\n\
         Example: delete 1";
    pub const FIND: &str = "find: Finds all pets whose names contain any of the specified \
         keywords (case-insensitive) and displays them as a list with index numbers.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find woofie bruce";
    pub const LIST: &str = "list: Lists all pets.";
    pub const SORT: &str = "sort: Sorts the displayed pet list by the given field.\n\
         Parameters: name | owner | app\n\
         Example: sort owner";
    pub const UNDO: &str = "undo: Reverts the most recent change to the pet book.";
    pub const CLEAR: &str = "clear: Removes every pet from the pet book.";
    pub const CHARGE: &str = "charge: Computes a month's charge of the pet identified by the \
         index number used in the last pet listing.\n\
         Parameters: INDEX (must be a positive integer) m/[MM-yyyy] c/[COST]\n\
         Example: charge 1 m/03-2022 c/200";
    pub const PRESENT: &str = "present: Marks the pet as present on a date.\n\
         Parameters: INDEX (must be a positive integer) d/dd-MM-yyyy [pu/HH:mm do/HH:mm]\n\
         Example: present 1 d/01-03-2022 pu/08:00 do/17:00";
    pub const ABSENT: &str = "absent: Marks the pet as absent on a date.\n\
         Parameters: INDEX (must be a positive integer) d/dd-MM-yyyy\n\
         Example: absent 1 d/02-03-2022";
    pub const DIET: &str = "diet: Sets the diet of the pet; an empty diet removes it.\n\
         Parameters: INDEX (must be a positive integer) d/[DIET]\n\
         Example: diet 1 d/Vegetarian";
    pub const APPOINTMENT: &str = "app: Sets or clears the appointment of the pet.\n\
         Parameters: INDEX (must be a positive integer) dt/dd-MM-yyyy HH:mm at/LOCATION | clear\n\
         Example: app 1 dt/05-05-2022 09:00 at/NUS Vet Clinic";
    pub const HELP: &str = "help: Shows program usage instructions.";
    pub const EXIT: &str = "exit: Exits the program.";

    /// Every command keyword with its usage, in display order
    pub const ALL: &[(&str, &str)] = &[
        ("add", ADD),
        ("edit", EDIT),
        ("delete", DELETE),
        ("find", FIND),
        ("list", LIST),
        ("sort", SORT),
        ("undo", UNDO),
        ("clear", CLEAR),
        ("charge", CHARGE),
        ("present", PRESENT),
        ("absent", ABSENT),
        ("diet", DIET),
        ("app", APPOINTMENT),
        ("help", HELP),
        ("exit", EXIT),
    ];

    /// Usage text for a keyword
    pub fn for_word(word: &str) -> Option<&'static str> {
        ALL.iter()
            .find(|(candidate, _)| *candidate == word)
            .map(|(_, text)| *text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet() -> Pet {
        Pet::new(
            Name::new("Amy Bee").unwrap(),
            Phone::new("85355255").unwrap(),
            OwnerName::new("Emma Lee").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            [Tag::new("Poodle").unwrap()],
        )
    }

    #[test]
    fn commands_with_equal_arguments_are_equal() {
        let month = ChargeMonth::parse("03-2022").unwrap();
        let a = PetCommand::Charge {
            index: Index::from_one_based(1).unwrap(),
            month,
            rate: Some(Charge::new(200.0).unwrap()),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let different_rate = PetCommand::Charge {
            index: Index::from_one_based(1).unwrap(),
            month,
            rate: None,
        };
        assert_ne!(a, different_rate);
        assert_ne!(a, PetCommand::List);
    }

    #[test]
    fn command_serializes_to_tagged_json() {
        let json = serde_json::to_string(&PetCommand::Undo).unwrap();
        assert_eq!(json, r#"{"type":"undo"}"#);
    }

    #[test]
    fn charge_rate_defaults_to_none() {
        let cmd: PetCommand =
            serde_json::from_str(r#"{"type":"charge","index":1,"month":"03-2022"}"#).unwrap();
        assert!(matches!(cmd, PetCommand::Charge { rate: None, .. }));
    }

    #[test]
    fn missing_required_argument_fails_to_build() {
        let result = serde_json::from_str::<PetCommand>(r#"{"type":"delete"}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<PetCommand>(r#"{"type":"charge","index":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_argument_fails_to_build() {
        let result = serde_json::from_str::<PetCommand>(r#"{"type":"delete","index":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn mutating_commands_are_flagged() {
        assert!(PetCommand::Clear.is_mutating());
        assert!(!PetCommand::Undo.is_mutating());
        assert!(!PetCommand::List.is_mutating());
    }

    #[test]
    fn empty_descriptor_edits_nothing() {
        assert!(!EditPetDescriptor::default().is_any_field_edited());
    }

    #[test]
    fn descriptor_keeps_unnamed_fields() {
        let original = pet().with_diet(Diet::new("Raw").unwrap());
        let descriptor = EditPetDescriptor {
            phone: Some(Phone::new("91234567").unwrap()),
            ..EditPetDescriptor::default()
        };

        let edited = descriptor.apply(&original);
        assert_eq!(edited.phone().as_str(), "91234567");
        assert_eq!(edited.name(), original.name());
        assert_eq!(edited.owner_name(), original.owner_name());
        assert_eq!(edited.address(), original.address());
        assert_eq!(edited.tags(), original.tags());
        assert_eq!(edited.diet(), original.diet());
    }

    #[test]
    fn empty_tag_set_clears_tags() {
        let descriptor = EditPetDescriptor {
            tags: Some(BTreeSet::new()),
            ..EditPetDescriptor::default()
        };
        assert!(descriptor.apply(&pet()).tags().is_empty());
    }

    #[test]
    fn every_command_word_has_usage() {
        for cmd in [PetCommand::List, PetCommand::Undo, PetCommand::Help, PetCommand::Exit] {
            assert!(usage::for_word(cmd.word()).is_some());
        }
        assert!(usage::for_word("charge").unwrap().contains("m/[MM-yyyy]"));
        assert!(usage::for_word("bogus").is_none());
    }
}
