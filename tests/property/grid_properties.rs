// Property-based tests for the month grid, event grouping and opacity stepping

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use tasti_calendar::models::appearance::WeekStart;
use tasti_calendar::models::event::CalendarEvent;
use tasti_calendar::services::grouping::group_by_day;
use tasti_calendar::utils::color::stepped_alpha;
use tasti_calendar::utils::date::{days_in_month, MonthLayout, GRID_CELLS};

fn gregorian_days(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (next - first).num_days() as u32
}

fn event_strategy() -> impl Strategy<Value = CalendarEvent> {
    (1900..2100i32, 1..=12u32, 1..=28u32, "[a-z ]{0,6}").prop_map(|(y, m, d, text)| {
        CalendarEvent::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), text)
    })
}

proptest! {
    /// Property: visible cells always equal the Gregorian length of the month
    #[test]
    fn prop_visible_cells_match_month_length(
        year in 1600..2400i32,
        month in 1..=12u32,
        sunday_first in any::<bool>(),
    ) {
        let week_start = if sunday_first { WeekStart::Sunday } else { WeekStart::Monday };
        let layout = MonthLayout::new(year, month, week_start).unwrap();
        let expected = gregorian_days(year, month);

        prop_assert_eq!(days_in_month(year, month), expected);
        prop_assert_eq!(layout.visible_cells() as u32, expected);
        prop_assert!(layout.leading_blanks() + expected as usize <= GRID_CELLS);
    }

    /// Property: Sunday-first shifts day 1 one column right, wrapping Sunday to column 0
    #[test]
    fn prop_sunday_first_shifts_leading_blanks(
        year in 1600..2400i32,
        month in 1..=12u32,
    ) {
        let monday = MonthLayout::new(year, month, WeekStart::Monday).unwrap();
        let sunday = MonthLayout::new(year, month, WeekStart::Sunday).unwrap();

        prop_assert_eq!(sunday.leading_blanks(), (monday.leading_blanks() + 1) % 7);
        prop_assert_eq!(monday.cell_of_day(1), Some(monday.leading_blanks()));
    }

    /// Property: every cell date belongs to the month and lands on its day number
    #[test]
    fn prop_cell_dates_are_in_month(
        year in 1900..2100i32,
        month in 1..=12u32,
        index in 0..GRID_CELLS,
    ) {
        let layout = MonthLayout::new(year, month, WeekStart::Monday).unwrap();
        match (layout.cell_day(index), layout.cell_date(index)) {
            (Some(day), Some(date)) => {
                prop_assert_eq!(date.year(), year);
                prop_assert_eq!(date.month(), month);
                prop_assert_eq!(date.day(), day);
            }
            (None, None) => {}
            other => prop_assert!(false, "cell day and date disagree: {:?}", other),
        }
    }

    /// Property: grouping emits one group per distinct (month, day)
    #[test]
    fn prop_one_group_per_day(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut days: Vec<(u32, u32)> = events.iter().map(CalendarEvent::day_key).collect();
        days.sort_unstable();
        days.dedup();

        let total = events.len();
        let groups = group_by_day(events);

        prop_assert_eq!(groups.len(), days.len());
        prop_assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), total);
        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(!group.label().contains(", ,"));
            prop_assert!(!group.label().ends_with(", "));
        }
    }

    /// Property: opacity stepping never decreases and stops at 255
    #[test]
    fn prop_alpha_is_monotonic(start in any::<u8>(), steps in 0..20u32) {
        let next = stepped_alpha(start, steps);
        prop_assert!(next >= start);
        prop_assert!(stepped_alpha(next, 1) >= next);
        if steps >= 4 {
            prop_assert_eq!(next, 255);
        }
    }
}
