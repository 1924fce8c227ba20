// Date utility functions
// Month lengths and the fixed 37-cell month grid

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::models::appearance::WeekStart;

/// Number of day slots in a month grid (five full weeks plus two).
pub const GRID_CELLS: usize = 37;

/// Inclusive range of grid cells that may hold days of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: usize,
    pub end: usize,
}

/// Candidate day ranges, indexed by the column of the first day of the month.
const DAY_RANGES: [CellRange; 7] = [
    CellRange { start: 0, end: 30 },
    CellRange { start: 1, end: 31 },
    CellRange { start: 2, end: 32 },
    CellRange { start: 3, end: 33 },
    CellRange { start: 4, end: 34 },
    CellRange { start: 5, end: 35 },
    CellRange { start: 6, end: 36 },
];

const NARROW_WEEKDAYS_MONDAY_FIRST: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];
const NARROW_WEEKDAYS_SUNDAY_FIRST: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in the given month, or 0 when `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Cells available to a month whose first day falls on `first_weekday`.
pub fn day_range(first_weekday: Weekday, week_start: WeekStart) -> CellRange {
    let column = match week_start {
        WeekStart::Monday => first_weekday.num_days_from_monday(),
        WeekStart::Sunday => first_weekday.num_days_from_sunday(),
    };
    DAY_RANGES[column as usize]
}

/// Narrow weekday letters in display order
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Monday => NARROW_WEEKDAYS_MONDAY_FIRST,
        WeekStart::Sunday => NARROW_WEEKDAYS_SUNDAY_FIRST,
    }
}

/// Column holding Sunday in the weekday row
pub fn sunday_column(week_start: WeekStart) -> usize {
    match week_start {
        WeekStart::Monday => 6,
        WeekStart::Sunday => 0,
    }
}

/// English month name, or an empty string for an invalid month
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Full date text used as the accessible label of a day cell.
///
/// Dates that do not exist produce an empty string.
pub fn accessible_date(year: i32, month: u32, day: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Day number as shown in a cell, single digits padded to two columns
pub fn day_cell_text(day: u32) -> String {
    format!("{:>2}", day)
}

/// Placement of one month's days in the 37-cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    first_day: NaiveDate,
    week_start: WeekStart,
    range: CellRange,
    day_count: u32,
}

impl MonthLayout {
    /// Layout for the month containing `date`.
    pub fn for_date(date: NaiveDate, week_start: WeekStart) -> Self {
        let first_day = date.with_day(1).unwrap_or(date);
        Self {
            first_day,
            week_start,
            range: day_range(first_day.weekday(), week_start),
            day_count: days_in_month(first_day.year(), first_day.month()),
        }
    }

    /// Layout for a year and month, `None` if the month does not exist
    pub fn new(year: i32, month: u32, week_start: WeekStart) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|date| Self::for_date(date, week_start))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn range(&self) -> CellRange {
        self.range
    }

    /// Hidden cells before day 1
    pub fn leading_blanks(&self) -> usize {
        self.range.start
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn contains_day(&self, day: u32) -> bool {
        day >= 1 && day <= self.day_count
    }

    /// Day shown in the cell at `index`, or `None` if the cell is hidden.
    pub fn cell_day(&self, index: usize) -> Option<u32> {
        let last = self.range.start + self.day_count as usize;
        if index >= self.range.start && index < last && index <= self.range.end {
            Some((index - self.range.start + 1) as u32)
        } else {
            None
        }
    }

    /// Grid cell holding `day`
    pub fn cell_of_day(&self, day: u32) -> Option<usize> {
        self.contains_day(day)
            .then(|| self.range.start + day as usize - 1)
    }

    pub fn visible_cells(&self) -> usize {
        (0..GRID_CELLS)
            .filter(|&i| self.cell_day(i).is_some())
            .count()
    }

    /// Full date of the day in the cell at `index`
    pub fn cell_date(&self, index: usize) -> Option<NaiveDate> {
        self.cell_day(index)
            .and_then(|day| self.first_day.with_day(day))
    }
}
