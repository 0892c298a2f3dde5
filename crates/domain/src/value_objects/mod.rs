//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod appointment;
mod charge;
mod charge_month;
mod diet;
mod display_index;
mod owner_name;
mod pet_name;
mod phone_number;
mod tag;

pub use address::Address;
pub use appointment::{APPOINTMENT_DATE_TIME_FORMAT, Appointment};
pub use charge::Charge;
pub use charge_month::ChargeMonth;
pub use diet::Diet;
pub use display_index::Index;
pub use owner_name::OwnerName;
pub use pet_name::Name;
pub use phone_number::Phone;
pub use tag::Tag;
