mod app;
pub mod popup;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
pub use popup::PopupManager;
pub use theme::{CalendarTheme, ThemeRole};
pub use views::{HighlightOptions, Marker, TastiMonth, TastiYear};
