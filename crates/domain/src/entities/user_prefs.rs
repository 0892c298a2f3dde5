//! User preferences
//!
//! Window geometry and the pet book location. The core only stores these for
//! the front end; nothing in command execution reads them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default pet book location
pub const DEFAULT_PET_BOOK_FILE: &str = "data/petbook.json";

/// Window size and position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Window position, `None` lets the platform decide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740,
            window_height: 600,
            window_position: None,
        }
    }
}

/// Preferences carried by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    gui_settings: GuiSettings,
    #[serde(default = "default_pet_book_file_path")]
    pet_book_file_path: PathBuf,
}

fn default_pet_book_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_PET_BOOK_FILE)
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            pet_book_file_path: default_pet_book_file_path(),
        }
    }
}

impl UserPrefs {
    /// Create preferences from explicit values
    pub fn new(gui_settings: GuiSettings, pet_book_file_path: impl Into<PathBuf>) -> Self {
        Self {
            gui_settings,
            pet_book_file_path: pet_book_file_path.into(),
        }
    }

    /// Window geometry
    pub const fn gui_settings(&self) -> GuiSettings {
        self.gui_settings
    }

    /// Replace the window geometry
    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    /// Where the pet book is stored
    pub fn pet_book_file_path(&self) -> &Path {
        &self.pet_book_file_path
    }

    /// Change where the pet book is stored
    pub fn set_pet_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.pet_book_file_path = path.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_data_dir() {
        let prefs = UserPrefs::default();
        assert_eq!(prefs.pet_book_file_path(), Path::new(DEFAULT_PET_BOOK_FILE));
        assert_eq!(prefs.gui_settings(), GuiSettings::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: UserPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, UserPrefs::default());
    }

    #[test]
    fn setters_replace_values() {
        let mut prefs = UserPrefs::default();
        prefs.set_pet_book_file_path("other.json");
        prefs.set_gui_settings(GuiSettings {
            window_width: 1,
            window_height: 2,
            window_position: Some((3, 4)),
        });
        assert_eq!(prefs.pet_book_file_path(), Path::new("other.json"));
        assert_eq!(prefs.gui_settings().window_position, Some((3, 4)));
    }
}
