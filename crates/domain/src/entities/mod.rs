//! Domain entities - Objects with identity and lifecycle

mod attendance;
mod pet;
mod pet_book;
mod user_prefs;

pub use attendance::{ATTENDANCE_DATE_FORMAT, AttendanceCalendar, AttendanceEntry, Transport};
pub use pet::Pet;
pub use pet_book::PetBook;
pub use user_prefs::{DEFAULT_PET_BOOK_FILE, GuiSettings, UserPrefs};
