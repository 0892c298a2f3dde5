//! Care handlers: diet and appointment

use domain::{Appointment, Diet, Index};

use super::{CommandResult, pet_at};
use crate::{error::CommandError, ports::ModelPort};

pub(super) fn handle_diet(
    model: &mut dyn ModelPort,
    index: Index,
    diet: &Diet,
) -> Result<CommandResult, CommandError> {
    let target = pet_at(model, index)?;
    let edited = target.clone().with_diet(diet.clone());
    model.set_pet(&target, edited.clone())?;

    let feedback = if diet.is_empty() {
        format!("Removed diet from Pet: {edited}")
    } else {
        format!("Added diet to Pet: {edited}")
    };
    Ok(CommandResult::new(feedback))
}

pub(super) fn handle_appointment(
    model: &mut dyn ModelPort,
    index: Index,
    appointment: Option<&Appointment>,
) -> Result<CommandResult, CommandError> {
    let target = pet_at(model, index)?;
    let edited = target.clone().with_appointment(appointment.cloned());
    model.set_pet(&target, edited.clone())?;

    let feedback = match appointment {
        Some(_) => format!("Added appointment to Pet: {edited}"),
        None => format!("Removed appointment from Pet: {edited}"),
    };
    Ok(CommandResult::new(feedback))
}

#[cfg(test)]
mod tests {
    use domain::PetCommand;

    use super::super::{Executable, test_support::*};
    use super::*;

    #[test]
    fn diet_is_added_then_removed() {
        let mut model = model_with([pet("Rex", "Alice")]);

        let added = PetCommand::Diet {
            index: index(1),
            diet: Diet::new("Vegetarian").unwrap(),
        }
        .execute(&mut model)
        .unwrap();
        assert!(added.feedback.starts_with("Added diet to Pet: Rex"));
        assert!(added.feedback.ends_with("; Diet: Vegetarian"));

        let removed = PetCommand::Diet {
            index: index(1),
            diet: Diet::empty(),
        }
        .execute(&mut model)
        .unwrap();
        assert!(removed.feedback.starts_with("Removed diet from Pet: Rex"));
        assert!(model.pet_book().pets()[0].diet().is_empty());
    }

    #[test]
    fn appointment_is_set_and_cleared() {
        let mut model = model_with([pet("Rex", "Alice")]);
        let appointment = Appointment::parse("05-05-2022 09:00", "NUS Vet Clinic").unwrap();

        let added = PetCommand::Appointment {
            index: index(1),
            appointment: Some(appointment.clone()),
        }
        .execute(&mut model)
        .unwrap();
        assert!(added.feedback.starts_with("Added appointment to Pet: Rex"));
        assert_eq!(model.pet_book().pets()[0].appointment(), Some(&appointment));

        let removed = PetCommand::Appointment {
            index: index(1),
            appointment: None,
        }
        .execute(&mut model)
        .unwrap();
        assert!(removed.feedback.starts_with("Removed appointment from Pet: Rex"));
        assert!(model.pet_book().pets()[0].appointment().is_none());
        assert_eq!(model.history_len(), 2);
    }
}
