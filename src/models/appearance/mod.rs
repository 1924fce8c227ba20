//! Discrete appearance options for the calendar widgets.
//!
//! These are the knobs a host application can turn: density level,
//! Sunday styling, first day of the week and where popups appear.

use serde::{Deserialize, Serialize};

/// Visual density of a month, from compact to extra large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Appearance {
    pub const ALL: [Appearance; 4] = [
        Appearance::Small,
        Appearance::Medium,
        Appearance::Large,
        Appearance::ExtraLarge,
    ];

    /// Level from its index (0 small ... 3 extra large). Other values are rejected.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The following level, wrapping back to `Small`.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Font size for day numbers and weekday letters
    pub fn cell_text_size(self) -> f32 {
        match self {
            Appearance::Small => 12.0,
            Appearance::Medium => 14.0,
            Appearance::Large => 16.0,
            Appearance::ExtraLarge => 28.0,
        }
    }

    /// Font size for the month title
    pub fn title_text_size(self) -> f32 {
        match self {
            Appearance::Small => 14.0,
            Appearance::Medium => 16.0,
            Appearance::Large => 24.0,
            Appearance::ExtraLarge => 32.0,
        }
    }

    /// Padding around each day cell
    pub fn cell_padding(self) -> f32 {
        match self {
            Appearance::Small => 3.0,
            Appearance::Medium => 8.0,
            Appearance::Large => 12.0,
            Appearance::ExtraLarge => 16.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Appearance::Small => "Small",
            Appearance::Medium => "Medium",
            Appearance::Large => "Large",
            Appearance::ExtraLarge => "Extra large",
        }
    }
}

/// How the Sunday column of the weekday row is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SundayHighlight {
    #[default]
    Normal,
    Bold,
    Colored,
    BoldColored,
}

impl SundayHighlight {
    pub fn is_bold(self) -> bool {
        matches!(self, SundayHighlight::Bold | SundayHighlight::BoldColored)
    }

    pub fn is_colored(self) -> bool {
        matches!(self, SundayHighlight::Colored | SundayHighlight::BoldColored)
    }
}

/// First day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

/// Regions whose calendars conventionally start on Sunday
const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "US", "CA", "MX", "BR", "JP", "KR", "TW", "HK", "PH", "IL", "IN", "ZA", "SA", "PE", "CO",
    "VE", "GT", "DO", "PR", "PA", "NI", "SV", "HN",
];

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

impl WeekStart {
    pub fn is_sunday_first(self) -> bool {
        self == WeekStart::Sunday
    }

    /// Week start for a POSIX locale tag such as `en_US.UTF-8` or `pt-BR`.
    ///
    /// Tags without a region, and the `C`/`POSIX` locales, start on Monday.
    pub fn from_locale_tag(tag: &str) -> Self {
        let base = tag.split(['.', '@']).next().unwrap_or("");
        let region = base.split(['_', '-']).nth(1).unwrap_or("");
        if SUNDAY_FIRST_REGIONS
            .iter()
            .any(|r| r.eq_ignore_ascii_case(region))
        {
            WeekStart::Sunday
        } else {
            WeekStart::Monday
        }
    }

    /// Week start derived from the process locale environment.
    pub fn from_env() -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|tag| Self::from_locale_tag(&tag))
            .unwrap_or_default()
    }
}

/// Where info popups are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupAnchor {
    /// Just below the widget that triggered the popup
    #[default]
    Widget,
    /// Bottom centre of the window
    Screen,
}
