//! Calendar widgets: a single month and a twelve-month year.
//!
//! Both keep their highlight state between frames and are painted with
//! `show`, which takes the theme and the popup manager owned by the host.

mod highlight;
mod month_day_cell;
mod month_view;
mod year_view;

pub use highlight::{DayHighlight, HighlightColor, HighlightOptions, Marker, MarkerLayer, TextColor};
pub use month_view::{MonthViewResult, TastiMonth};
pub use year_view::{TastiYear, YearViewResult};
