//! In-memory model
//!
//! Holds the authoritative pet book, the display filter and sort field, the
//! user preferences and the undo history for the lifetime of a session.

use domain::{DomainError, Pet, PetBook, PetFilter, SortField, UserPrefs};
use tracing::debug;

use crate::error::CommandError;
use crate::ports::ModelPort;

/// The model every command of a session runs against
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    pet_book: PetBook,
    user_prefs: UserPrefs,
    filter: PetFilter,
    sort: Option<SortField>,
    history: Vec<PetBook>,
}

impl ModelManager {
    /// Create a model over an existing pet book, showing every pet
    pub fn new(pet_book: PetBook, user_prefs: UserPrefs) -> Self {
        Self {
            pet_book,
            user_prefs,
            filter: PetFilter::All,
            sort: None,
            history: Vec::new(),
        }
    }

    /// The sort field in effect, if any
    pub const fn current_sort(&self) -> Option<SortField> {
        self.sort
    }

    /// Number of changes that can be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply `change` to a copy of the book and keep it only if it succeeds
    fn commit<F>(&mut self, change: F) -> Result<(), CommandError>
    where
        F: FnOnce(&mut PetBook) -> Result<(), DomainError>,
    {
        let mut next = self.pet_book.clone();
        change(&mut next).map_err(CommandError::rejected)?;
        let previous = std::mem::replace(&mut self.pet_book, next);
        self.history.push(previous);
        debug!(history = self.history.len(), "Pet book changed");
        Ok(())
    }
}

impl ModelPort for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn set_user_prefs(&mut self, prefs: UserPrefs) {
        self.user_prefs = prefs;
    }

    fn has_pet(&self, pet: &Pet) -> bool {
        self.pet_book.contains(pet)
    }

    fn add_pet(&mut self, pet: Pet) -> Result<(), CommandError> {
        self.commit(|book| book.add(pet))?;
        self.filter = PetFilter::All;
        Ok(())
    }

    fn delete_pet(&mut self, target: &Pet) -> Result<(), CommandError> {
        self.commit(|book| book.remove(target).map(drop))
    }

    fn set_pet(&mut self, target: &Pet, edited: Pet) -> Result<(), CommandError> {
        self.commit(|book| book.replace(target, edited))
    }

    fn set_pet_book(&mut self, book: PetBook) {
        let previous = std::mem::replace(&mut self.pet_book, book);
        self.history.push(previous);
    }

    fn pet_book(&self) -> &PetBook {
        &self.pet_book
    }

    fn filtered_pets(&self) -> Vec<Pet> {
        let mut pets: Vec<Pet> = self
            .pet_book
            .pets()
            .iter()
            .filter(|pet| self.filter.matches(pet))
            .cloned()
            .collect();
        if let Some(field) = self.sort {
            pets.sort_by(|a, b| field.compare(a, b));
        }
        pets
    }

    fn update_filter(&mut self, filter: PetFilter) {
        self.filter = filter;
    }

    fn show_all(&mut self) {
        self.filter = PetFilter::All;
    }

    fn current_filter(&self) -> &PetFilter {
        &self.filter
    }

    fn sort_pets(&mut self, field: SortField) {
        self.sort = Some(field);
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        let previous = self.history.pop().ok_or(CommandError::NothingToUndo)?;
        self.pet_book = previous;
        Ok(())
    }

    fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}
