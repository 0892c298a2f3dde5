//! Pet book - the authoritative ordered list of pets
//!
//! # Invariants
//! - No two pets in the book are the "same pet" (see [`Pet::is_same_pet`]).
//! - Insertion order is kept; sorting only reorders the displayed view.

use serde::{Deserialize, Serialize};

use super::pet::Pet;
use crate::errors::DomainError;

/// The full set of pets, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PetBook {
    pets: Vec<Pet>,
}

impl<'de> Deserialize<'de> for PetBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Record {
            #[serde(default)]
            pets: Vec<Pet>,
        }

        let record = Record::deserialize(deserializer)?;
        Self::from_pets(record.pets).map_err(serde::de::Error::custom)
    }
}

impl PetBook {
    /// An empty pet book
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pet book, rejecting duplicate pets
    pub fn from_pets(pets: impl IntoIterator<Item = Pet>) -> Result<Self, DomainError> {
        let mut book = Self::new();
        for pet in pets {
            book.add(pet)?;
        }
        Ok(book)
    }

    /// Whether a pet with the same identity is already in the book
    pub fn contains(&self, pet: &Pet) -> bool {
        self.pets.iter().any(|existing| existing.is_same_pet(pet))
    }

    /// Append a pet
    pub fn add(&mut self, pet: Pet) -> Result<(), DomainError> {
        if self.contains(&pet) {
            return Err(DomainError::DuplicatePet(pet.name().to_string()));
        }
        self.pets.push(pet);
        Ok(())
    }

    /// Remove a pet equal to `target`
    pub fn remove(&mut self, target: &Pet) -> Result<Pet, DomainError> {
        let position = self.position_of(target)?;
        Ok(self.pets.remove(position))
    }

    /// Replace `target` with `edited` at the same position
    ///
    /// `edited` may be the same pet as `target` but must not be the same pet
    /// as any other entry.
    pub fn replace(&mut self, target: &Pet, edited: Pet) -> Result<(), DomainError> {
        let position = self.position_of(target)?;
        let clashes = self
            .pets
            .iter()
            .enumerate()
            .any(|(i, existing)| i != position && existing.is_same_pet(&edited));
        if clashes {
            return Err(DomainError::DuplicatePet(edited.name().to_string()));
        }
        self.pets[position] = edited;
        Ok(())
    }

    /// Pets in order
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Number of pets
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the book is empty
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    fn position_of(&self, target: &Pet) -> Result<usize, DomainError> {
        self.pets
            .iter()
            .position(|pet| pet == target)
            .ok_or_else(|| DomainError::not_found("Pet", target.name().as_str()))
    }
}
