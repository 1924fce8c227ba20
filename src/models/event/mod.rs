// Event module
// A date with an optional label, used to highlight calendar days

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A date paired with an optional label shown when the day is tapped.
///
/// Events carry no identity beyond their date and text, so several events
/// may share the same day.
///
/// # Examples
/// ```
/// use tasti_calendar::models::event::CalendarEvent;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let event = CalendarEvent::new(date, "Team lunch");
/// assert_eq!(event.label(), "Team lunch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    #[serde(default)]
    pub display_text: Option<String>,
}

impl CalendarEvent {
    /// Create an event with a label
    pub fn new(date: NaiveDate, display_text: impl Into<String>) -> Self {
        Self {
            date,
            display_text: Some(display_text.into()),
        }
    }

    /// Create an unlabeled event for a plain date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            display_text: None,
        }
    }

    /// The label, or an empty string when there is none
    pub fn label(&self) -> &str {
        self.display_text.as_deref().unwrap_or("")
    }

    /// Whether the label is missing or only whitespace
    pub fn has_blank_label(&self) -> bool {
        self.label().trim().is_empty()
    }

    /// Month and day, ignoring the year.
    pub fn day_key(&self) -> (u32, u32) {
        (self.date.month(), self.date.day())
    }
}

impl From<NaiveDate> for CalendarEvent {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
