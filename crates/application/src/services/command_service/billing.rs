//! Monthly charge computation
//!
//! A pet is billed the daily rate for every day of the month on which its
//! attendance is recorded as present. Days recorded absent, days whose
//! presence is unknown and days with no record cost nothing.

use domain::{AttendanceCalendar, AttendanceEntry, Charge, ChargeMonth, Index};

use super::{CommandResult, pet_at};
use crate::{error::CommandError, ports::ModelPort};

/// Total owed for `month` at `rate` per confirmed present day
///
/// Walks the month from its first to its last day. Reads `calendar` only.
pub fn monthly_charge(calendar: &AttendanceCalendar, month: ChargeMonth, rate: Charge) -> f64 {
    month
        .days()
        .filter(|day| {
            calendar
                .attendance(*day)
                .is_some_and(AttendanceEntry::is_confirmed_present)
        })
        .fold(0.0, |total, _| total + rate.amount())
}

/// Round to whole cents, halves away from zero
///
/// `{:.2}` alone rounds exact halves to even, so 0.125 would print as 0.12.
fn round_to_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        amount
    }
}

pub(super) fn handle_charge(
    model: &mut dyn ModelPort,
    index: Index,
    month: ChargeMonth,
    rate: Option<Charge>,
) -> Result<CommandResult, CommandError> {
    let pet = pet_at(model, index)?;
    let rate = rate.ok_or(CommandError::NoChargeSet)?;

    let total = monthly_charge(pet.attendance(), month, rate);
    if !total.is_finite() {
        return Err(CommandError::ChargeTooLarge {
            month: month.to_string(),
        });
    }
    let total = round_to_cents(total);
    Ok(CommandResult::new(format!(
        "{} should be charged ${total:.2} for the month of {}.",
        pet.name(),
        month.month_name()
    )))
}
