//! Display handlers: find and sort

use domain::{PetFilter, SortField};

use super::CommandResult;
use crate::{error::CommandError, ports::ModelPort};

pub(super) fn handle_find(model: &mut dyn ModelPort, filter: &PetFilter) -> CommandResult {
    model.update_filter(filter.clone());
    let shown = model.filtered_pets().len();
    CommandResult::new(format!("{shown} pets listed!"))
}

pub(super) fn handle_sort(
    model: &mut dyn ModelPort,
    field: &str,
) -> Result<CommandResult, CommandError> {
    let field: SortField = field
        .parse()
        .map_err(|_| CommandError::UnknownSortField(field.to_string()))?;
    model.sort_pets(field);
    Ok(CommandResult::new(format!("Sorted pets by {field}.")))
}

#[cfg(test)]
mod tests {
    use domain::{Appointment, PetCommand};

    use super::super::{Executable, test_support::*};
    use super::*;

    #[test]
    fn find_reports_matches() {
        let mut model = model_with([pet("Rex", "Alice"), pet("Bolt", "Bob"), pet("Max", "Bob")]);
        let result = PetCommand::Find {
            filter: PetFilter::Owner(vec!["bob".to_string()]),
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(result.feedback, "2 pets listed!");
        assert_eq!(model.filtered_pets().len(), 2);
        assert_eq!(model.pet_book().len(), 3);
    }

    #[test]
    fn find_with_no_match_shows_nothing() {
        let mut model = model_with([pet("Rex", "Alice")]);
        let result = PetCommand::Find {
            filter: PetFilter::Name(vec!["bolt".to_string()]),
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(result.feedback, "0 pets listed!");
    }

    #[test]
    fn sort_by_appointment_puts_unscheduled_last() {
        let scheduled = pet("Rex", "Alice").with_appointment(Some(
            Appointment::parse("05-05-2022 09:00", "NUS Vet Clinic").unwrap(),
        ));
        let mut model = model_with([pet("Bolt", "Bob"), scheduled.clone()]);

        let result = PetCommand::Sort {
            field: "app".to_string(),
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(result.feedback, "Sorted pets by app.");
        assert_eq!(model.filtered_pets()[0], scheduled);
        assert!(!model.can_undo());
    }

    #[test]
    fn sort_applies_to_later_listings() {
        let mut model = model_with([pet("Rex", "Zoe"), pet("Bolt", "Amy")]);
        PetCommand::Sort {
            field: "owner".to_string(),
        }
        .execute(&mut model)
        .unwrap();
        PetCommand::List.execute(&mut model).unwrap();

        let names: Vec<_> = model
            .filtered_pets()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bolt", "Rex"]);
    }

    #[test]
    fn unknown_sort_field_fails() {
        let mut model = model_with([pet("Rex", "Alice")]);
        let err = PetCommand::Sort {
            field: "phone".to_string(),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(err, CommandError::UnknownSortField("phone".to_string()));
        assert!(model.current_sort().is_none());
    }
}
