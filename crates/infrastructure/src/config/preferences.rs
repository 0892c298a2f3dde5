//! Preferences configuration

use std::path::PathBuf;

use domain::{DEFAULT_PET_BOOK_FILE, GuiSettings, UserPrefs};
use serde::{Deserialize, Serialize};

/// Startup preferences, mapped onto [`UserPrefs`]
///
/// The window position is used only when both coordinates are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_x: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_y: Option<i32>,

    /// Where the pet book is stored
    #[serde(default = "default_pet_book_file_path")]
    pub pet_book_file_path: PathBuf,
}

fn default_window_width() -> u32 {
    GuiSettings::default().window_width
}

fn default_window_height() -> u32 {
    GuiSettings::default().window_height
}

fn default_pet_book_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_PET_BOOK_FILE)
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_x: None,
            window_y: None,
            pet_book_file_path: default_pet_book_file_path(),
        }
    }
}

impl PreferencesConfig {
    /// Build the preferences the model carries
    pub fn to_user_prefs(&self) -> UserPrefs {
        let gui_settings = GuiSettings {
            window_width: self.window_width,
            window_height: self.window_height,
            window_position: self.window_x.zip(self.window_y),
        };
        UserPrefs::new(gui_settings, self.pet_book_file_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_user_prefs_defaults() {
        assert_eq!(
            PreferencesConfig::default().to_user_prefs(),
            UserPrefs::default()
        );
    }

    #[test]
    fn half_a_position_is_ignored() {
        let config = PreferencesConfig {
            window_x: Some(5),
            ..PreferencesConfig::default()
        };
        assert_eq!(config.to_user_prefs().gui_settings().window_position, None);
    }
}
