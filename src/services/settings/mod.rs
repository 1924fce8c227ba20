mod service;

pub use service::{SettingsService, SETTINGS_FILE};
