// TastiCalendar demo
// Shows a year of months with events loaded from an optional JSON file

use anyhow::{Context, Result};
use std::path::Path;

use tasti_calendar::models::event::CalendarEvent;
use tasti_calendar::services::settings::{SettingsService, SETTINGS_FILE};
use tasti_calendar::ui_egui::CalendarApp;
use tasti_calendar::CalendarError;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting TastiCalendar demo");

    let events = match std::env::args().nth(1) {
        Some(path) => load_events(Path::new(&path))?,
        None => Vec::new(),
    };
    log::info!("Loaded {} events", events.len());

    let settings_service = match SettingsService::from_project_dirs() {
        Ok(service) => service,
        Err(CalendarError::NoConfigDir) => {
            log::warn!("No config directory, using ./{}", SETTINGS_FILE);
            SettingsService::new(SETTINGS_FILE)
        }
        Err(err) => return Err(err).context("Failed to locate settings"),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TastiCalendar")
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TastiCalendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings_service, events)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run the calendar window: {}", err))
}

fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events in {}", path.display()))
}
