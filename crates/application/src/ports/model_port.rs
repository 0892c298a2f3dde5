//! Model port
//!
//! The contract every command runs against. The in-memory implementation
//! lives in [`crate::services::ModelManager`].

use domain::{Pet, PetBook, PetFilter, SortField, UserPrefs};
#[cfg(test)]
use mockall::automock;

use crate::error::CommandError;

/// Mutable store of pets, the displayed view of them and the undo history
///
/// Operations that change the pet book record the previous book for
/// [`ModelPort::undo`], but only when the change is accepted. A rejected
/// change leaves both the book and the history as they were.
#[cfg_attr(test, automock)]
pub trait ModelPort {
    /// Preferences carried for the front end
    fn user_prefs(&self) -> &UserPrefs;

    /// Replace the preferences
    fn set_user_prefs(&mut self, prefs: UserPrefs);

    /// Whether a pet with the same identity is stored
    fn has_pet(&self, pet: &Pet) -> bool;

    /// Append a pet and reset the display filter to show every pet
    fn add_pet(&mut self, pet: Pet) -> Result<(), CommandError>;

    /// Remove a stored pet
    fn delete_pet(&mut self, target: &Pet) -> Result<(), CommandError>;

    /// Replace a stored pet with an edited version
    fn set_pet(&mut self, target: &Pet, edited: Pet) -> Result<(), CommandError>;

    /// Replace the whole pet book
    fn set_pet_book(&mut self, book: PetBook);

    /// The authoritative pet book
    fn pet_book(&self) -> &PetBook;

    /// The displayed pets: filtered, then sorted by the current sort field
    fn filtered_pets(&self) -> Vec<Pet>;

    /// Replace the display filter
    fn update_filter(&mut self, filter: PetFilter);

    /// Reset the display filter to show every pet
    fn show_all(&mut self);

    /// The display filter in effect
    fn current_filter(&self) -> &PetFilter;

    /// Sort the displayed pets by `field`
    fn sort_pets(&mut self, field: SortField);

    /// Restore the pet book saved before the latest change
    fn undo(&mut self) -> Result<(), CommandError>;

    /// Whether there is a change to undo
    fn can_undo(&self) -> bool;
}
