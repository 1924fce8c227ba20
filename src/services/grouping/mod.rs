//! Grouping of calendar events by day.
//!
//! Events are sorted by month and day (the year is ignored, so yearly
//! recurring dates such as birthdays land on the same cell) and then
//! scanned once, closing a group whenever the day changes. Each group
//! becomes exactly one highlight with one joined label.

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::utils::text::{format_event_list, DEFAULT_SEPARATOR};

/// Consecutive events falling on the same month and day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub month: u32,
    pub day: u32,
    pub events: Vec<CalendarEvent>,
}

impl DayGroup {
    fn start(event: CalendarEvent) -> Self {
        let (month, day) = event.day_key();
        Self {
            month,
            day,
            events: vec![event],
        }
    }

    /// Non-blank labels joined with ", "
    pub fn label(&self) -> String {
        format_event_list(&self.events, DEFAULT_SEPARATOR)
    }

    /// Number of events in the group, used as highlight weight
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Date of the first event in the group
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.events.first().map(|event| event.date)
    }
}

/// Merge the two render inputs into one event list.
///
/// A non-empty `events` list wins; otherwise `dates` become unlabeled
/// events; otherwise the result is empty.
pub fn unify(events: Option<&[CalendarEvent]>, dates: Option<&[NaiveDate]>) -> Vec<CalendarEvent> {
    match (events, dates) {
        (Some(events), _) if !events.is_empty() => events.to_vec(),
        (_, Some(dates)) => dates.iter().copied().map(CalendarEvent::from_date).collect(),
        _ => Vec::new(),
    }
}

/// Group `events` per (month, day), in calendar order.
///
/// The sort is stable, so labels inside a group keep the caller's order.
pub fn group_by_day(mut events: Vec<CalendarEvent>) -> Vec<DayGroup> {
    events.sort_by_key(CalendarEvent::day_key);

    let mut groups: Vec<DayGroup> = Vec::new();
    for event in events {
        match groups.last_mut() {
            Some(group) if (group.month, group.day) == event.day_key() => group.events.push(event),
            _ => groups.push(DayGroup::start(event)),
        }
    }
    groups
}
