// Settings module
// Widget configuration options, persisted as TOML

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::appearance::{Appearance, PopupAnchor, SundayHighlight, WeekStart};

/// Default popup duration, in milliseconds
pub const DEFAULT_POPUP_DURATION_MS: u64 = 3000;

/// Which colour preset the widgets use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    /// Follow the operating system light/dark mode
    #[default]
    System,
    Light,
    Dark,
}

/// Text shown before the event count when the month header is tapped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPrefix {
    /// Just an arrow and the count
    #[default]
    None,
    /// "<prefix> <count>"
    Text(String),
    /// Singular and plural forms, `{}` is replaced by the count
    Plural { one: String, other: String },
}

/// Optional hex colour overrides for the theme roles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub on_background: Option<String>,
    pub on_surface: Option<String>,
    pub on_surface_inverse: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
}

/// Configuration shared by the month and year widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Explicit first day of the week; `None` follows the locale
    pub week_start: Option<WeekStart>,
    pub hide_week_days: bool,
    pub sunday_highlight: SundayHighlight,
    pub show_popups: bool,
    pub popup_duration_ms: u64,
    pub popup_anchor: PopupAnchor,
    pub header_prefix: HeaderPrefix,
    pub appearance: Appearance,
    pub theme: ThemeChoice,
    pub colors: ColorOverrides,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_start: None,
            hide_week_days: false,
            sunday_highlight: SundayHighlight::Normal,
            show_popups: true,
            popup_duration_ms: DEFAULT_POPUP_DURATION_MS,
            popup_anchor: PopupAnchor::Widget,
            header_prefix: HeaderPrefix::None,
            appearance: Appearance::Small,
            theme: ThemeChoice::System,
            colors: ColorOverrides::default(),
        }
    }
}

impl CalendarSettings {
    /// The configured week start, falling back to the locale
    pub fn effective_week_start(&self) -> WeekStart {
        self.week_start.unwrap_or_else(WeekStart::from_env)
    }

    pub fn popup_duration(&self) -> Duration {
        Duration::from_millis(self.popup_duration_ms)
    }
}
