//! Undo handler

use super::CommandResult;
use crate::{error::CommandError, ports::ModelPort};

pub(super) fn handle_undo(model: &mut dyn ModelPort) -> Result<CommandResult, CommandError> {
    model.undo()?;
    model.show_all();
    Ok(CommandResult::new("Undo success!"))
}

#[cfg(test)]
mod tests {
    use domain::PetCommand;

    use super::super::{Executable, test_support::*};
    use super::*;
    use crate::ports::MockModelPort;

    #[test]
    fn undo_with_empty_history_fails_unchanged() {
        let mut model = model_with([pet("Rex", "Alice")]);
        let before = model.pet_book().clone();

        let err = PetCommand::Undo.execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), "There is nothing to undo!");
        assert_eq!(model.pet_book(), &before);
    }

    #[test]
    fn failed_undo_keeps_filter() {
        let mut model = MockModelPort::new();
        model
            .expect_undo()
            .returning(|| Err(CommandError::NothingToUndo));
        model.expect_show_all().never();

        assert!(PetCommand::Undo.execute(&mut model).is_err());
    }

    #[test]
    fn undo_reverts_one_change_at_a_time() {
        let mut model = model_with(Vec::new());
        for name in ["A", "B"] {
            PetCommand::Add {
                pet: pet(name, "X"),
            }
            .execute(&mut model)
            .unwrap();
        }

        PetCommand::Undo.execute(&mut model).unwrap();
        assert_eq!(model.pet_book().pets(), &[pet("A", "X")]);
        PetCommand::Undo.execute(&mut model).unwrap();
        assert!(model.pet_book().is_empty());
        assert!(PetCommand::Undo.execute(&mut model).is_err());
    }
}
