//! Pet book handlers: add, edit, delete, clear and list

use domain::{EditPetDescriptor, Index, Pet, PetBook};

use super::{CommandResult, pet_at};
use crate::{error::CommandError, ports::ModelPort};

pub(super) fn handle_add(model: &mut dyn ModelPort, pet: &Pet) -> Result<CommandResult, CommandError> {
    if model.has_pet(pet) {
        return Err(CommandError::DuplicatePet);
    }
    model.add_pet(pet.clone())?;
    Ok(CommandResult::new(format!("New pet added: {pet}")))
}

pub(super) fn handle_edit(
    model: &mut dyn ModelPort,
    index: Index,
    descriptor: &EditPetDescriptor,
) -> Result<CommandResult, CommandError> {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NoFieldsEdited);
    }
    let target = pet_at(model, index)?;
    let edited = descriptor.apply(&target);

    if !target.is_same_pet(&edited) && model.has_pet(&edited) {
        return Err(CommandError::DuplicatePet);
    }
    model.set_pet(&target, edited.clone())?;
    model.show_all();
    Ok(CommandResult::new(format!("Edited Pet: {edited}")))
}

pub(super) fn handle_delete(
    model: &mut dyn ModelPort,
    index: Index,
) -> Result<CommandResult, CommandError> {
    let target = pet_at(model, index)?;
    model.delete_pet(&target)?;
    Ok(CommandResult::new(format!("Deleted Pet: {target}")))
}

pub(super) fn handle_clear(model: &mut dyn ModelPort) -> CommandResult {
    model.set_pet_book(PetBook::new());
    CommandResult::new("Pet book has been cleared!")
}

pub(super) fn handle_list(model: &mut dyn ModelPort) -> CommandResult {
    model.show_all();
    CommandResult::new("Listed all pets")
}
