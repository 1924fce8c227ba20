use crate::error::{CalendarError, Result};
use crate::models::settings::CalendarSettings;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores `CalendarSettings` as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `settings.toml` in the platform config directory
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "TastiCalendar", "TastiCalendar")
            .ok_or(CalendarError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<CalendarSettings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(CalendarSettings::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| CalendarError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings = toml::from_str(&content)?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Like `load`, but logs failures and falls back to the defaults
    pub fn load_or_default(&self) -> CalendarSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                CalendarSettings::default()
            }
        }
    }

    /// Write the settings, creating the parent directory if needed
    pub fn save(&self, settings: &CalendarSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CalendarError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, content).map_err(|source| CalendarError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appearance::{Appearance, PopupAnchor, SundayHighlight, WeekStart};
    use crate::models::settings::HeaderPrefix;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nope.toml"));
        assert_eq!(service.load().unwrap(), CalendarSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));

        let settings = CalendarSettings {
            week_start: Some(WeekStart::Sunday),
            hide_week_days: true,
            sunday_highlight: SundayHighlight::BoldColored,
            show_popups: false,
            popup_duration_ms: 1500,
            popup_anchor: PopupAnchor::Screen,
            header_prefix: HeaderPrefix::Text("Events:".to_string()),
            appearance: Appearance::ExtraLarge,
            ..Default::default()
        };

        service.save(&settings).unwrap();
        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "appearance = 42").unwrap();

        let service = SettingsService::new(&path);
        assert!(matches!(service.load(), Err(CalendarError::ConfigParse(_))));
        assert_eq!(service.load_or_default(), CalendarSettings::default());
    }
}
