// TastiCalendar library
// Month and year calendar widgets for egui

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use error::{CalendarError, Result};
pub use models::event::CalendarEvent;
pub use models::settings::CalendarSettings;
