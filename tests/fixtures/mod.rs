// Test fixtures - reusable test data
// Provides consistent dates, events and settings across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use tasti_calendar::models::appearance::WeekStart;
use tasti_calendar::models::event::CalendarEvent;
use tasti_calendar::models::settings::CalendarSettings;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Returns a date in the middle of 2024, used as "today"
    pub fn mid_2024() -> NaiveDate {
        ymd(2024, 6, 15)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Birthdays from several years, two of them sharing March 4
    pub fn birthdays() -> Vec<CalendarEvent> {
        vec![
            CalendarEvent::new(dates::ymd(1990, 3, 4), "anna"),
            CalendarEvent::new(dates::ymd(1985, 12, 25), "Noel"),
            CalendarEvent::new(dates::ymd(2001, 3, 4), "Luca"),
            CalendarEvent::new(dates::ymd(1996, 2, 29), "Leap"),
            CalendarEvent::from_date(dates::ymd(1999, 3, 4)),
        ]
    }

    /// An event far in the future
    pub fn future_event() -> CalendarEvent {
        CalendarEvent::new(dates::ymd(2100, 1, 1), "Later")
    }
}

/// Settings with a fixed week start so layouts do not depend on the locale
pub fn settings(week_start: WeekStart) -> CalendarSettings {
    CalendarSettings {
        week_start: Some(week_start),
        ..Default::default()
    }
}
