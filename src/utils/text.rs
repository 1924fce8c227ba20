//! Label formatting for popups and the month header.

use crate::models::event::CalendarEvent;
use crate::models::settings::HeaderPrefix;

pub const DEFAULT_SEPARATOR: &str = ",";

/// Join the non-blank labels of `events` with `separator` and a space.
pub fn format_event_list(events: &[CalendarEvent], separator: &str) -> String {
    events
        .iter()
        .filter(|event| !event.has_blank_label())
        .map(|event| event.label().trim())
        .collect::<Vec<_>>()
        .join(&format!("{} ", separator))
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Message shown when a month header is tapped.
pub fn header_message(prefix: &HeaderPrefix, count: u32) -> String {
    let message = match prefix {
        HeaderPrefix::None => format!("-> {}", count),
        HeaderPrefix::Text(text) if text.trim().is_empty() => format!("-> {}", count),
        HeaderPrefix::Text(text) => format!("{} {}", text, count),
        HeaderPrefix::Plural { one, other } => {
            let form = if count == 1 { one } else { other };
            form.replace("{}", &count.to_string())
        }
    };
    capitalize_first(&message)
}
