//! Domain-level errors

use thiserror::Error;

/// Errors raised while constructing or combining domain values
///
/// These are validation failures: a command is never built from a value
/// that produced one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid pet name
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Invalid owner name
    #[error("Invalid owner name: {0}")]
    InvalidOwnerName(String),

    /// Invalid phone number format
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Invalid address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid tag
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    /// Invalid diet description
    #[error("Invalid diet: {0}")]
    InvalidDiet(String),

    /// Invalid appointment
    #[error("Invalid appointment: {0}")]
    InvalidAppointment(String),

    /// Invalid charge rate
    #[error("Invalid charge: {0}")]
    InvalidCharge(String),

    /// Invalid display index
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    /// Invalid attendance entry
    #[error("Invalid attendance: {0}")]
    InvalidAttendance(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Two pets with the same identity in one pet book
    #[error("Duplicate pet: {0}")]
    DuplicatePet(String),

    /// Referenced pet is not in the pet book
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Pet", "Rex");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Pet");
                assert_eq!(id, "Rex");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Pet", "Rex");
        assert_eq!(err.to_string(), "Pet not found: Rex");
    }

    #[test]
    fn invalid_phone_error_message() {
        let err = DomainError::InvalidPhoneNumber("12".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: 12");
    }

    #[test]
    fn invalid_charge_error_message() {
        let err = DomainError::InvalidCharge("-1".to_string());
        assert_eq!(err.to_string(), "Invalid charge: -1");
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("13-2022".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: 13-2022");
    }
}
