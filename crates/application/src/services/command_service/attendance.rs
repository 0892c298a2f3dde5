//! Attendance handlers: present and absent

use chrono::NaiveDate;
use domain::{ATTENDANCE_DATE_FORMAT, AttendanceEntry, Index, Transport};

use super::{CommandResult, pet_at};
use crate::{error::CommandError, ports::ModelPort};

pub(super) fn handle_present(
    model: &mut dyn ModelPort,
    index: Index,
    date: NaiveDate,
    transport: Option<Transport>,
) -> Result<CommandResult, CommandError> {
    mark(model, index, date, AttendanceEntry::present(transport), "present")
}

pub(super) fn handle_absent(
    model: &mut dyn ModelPort,
    index: Index,
    date: NaiveDate,
) -> Result<CommandResult, CommandError> {
    mark(model, index, date, AttendanceEntry::absent(), "absent")
}

fn mark(
    model: &mut dyn ModelPort,
    index: Index,
    date: NaiveDate,
    entry: AttendanceEntry,
    label: &str,
) -> Result<CommandResult, CommandError> {
    let target = pet_at(model, index)?;
    let edited = target.clone().with_attendance(date, entry);
    model.set_pet(&target, edited)?;
    Ok(CommandResult::new(format!(
        "Marked {} as {label} on {}.",
        target.name(),
        date.format(ATTENDANCE_DATE_FORMAT)
    )))
}

#[cfg(test)]
mod tests {
    use domain::PetCommand;

    use super::super::{Executable, test_support::*};
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, d).unwrap()
    }

    #[test]
    fn present_records_entry() {
        let mut model = model_with([pet("Rex", "Alice")]);
        let transport = Transport::parse("08:00", "17:30").unwrap();

        let result = PetCommand::Present {
            index: index(1),
            date: day(1),
            transport: Some(transport),
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(result.feedback, "Marked Rex as present on 01-03-2022.");
        let entry = *model.pet_book().pets()[0].attendance().attendance(day(1)).unwrap();
        assert!(entry.is_confirmed_present());
        assert_eq!(entry.transport(), Some(transport));
    }

    #[test]
    fn absent_overwrites_present() {
        let mut model =
            model_with([pet("Rex", "Alice").with_attendance(day(2), AttendanceEntry::present(None))]);

        let result = PetCommand::Absent {
            index: index(1),
            date: day(2),
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(result.feedback, "Marked Rex as absent on 02-03-2022.");
        let calendar = model.pet_book().pets()[0].attendance();
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.attendance(day(2)).unwrap().is_present(), Some(false));
    }

    #[test]
    fn marking_is_undoable() {
        let mut model = model_with([pet("Rex", "Alice")]);
        PetCommand::Present {
            index: index(1),
            date: day(3),
            transport: None,
        }
        .execute(&mut model)
        .unwrap();

        PetCommand::Undo.execute(&mut model).unwrap();
        assert!(model.pet_book().pets()[0].attendance().is_empty());
    }
}
