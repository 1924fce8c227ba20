use chrono::{Datelike, Local, NaiveDate};
use std::time::Duration;

use super::highlight::{HighlightColor, HighlightOptions, Marker};
use super::month_view::TastiMonth;
use crate::models::appearance::{Appearance, PopupAnchor, SundayHighlight, WeekStart};
use crate::models::event::CalendarEvent;
use crate::models::settings::{CalendarSettings, HeaderPrefix};
use crate::services::grouping::{group_by_day, unify};
use crate::ui_egui::popup::PopupManager;
use crate::ui_egui::theme::{CalendarTheme, ThemeRole};

/// Months per row in the year grid
const DEFAULT_COLUMNS: usize = 3;

/// Result returned from showing a year
#[derive(Debug, Default)]
pub struct YearViewResult {
    /// Day whose cell was clicked this frame
    pub clicked_day: Option<NaiveDate>,
    /// Month (1-12) whose header was clicked this frame
    pub header_clicked: Option<u32>,
}

/// Twelve months of one year.
///
/// Every per-day operation is forwarded to the month owning the date.
#[derive(Debug, Clone)]
pub struct TastiYear {
    year: i32,
    months: Vec<TastiMonth>,
    today: NaiveDate,
    show_popups: bool,
    appearance: Appearance,
    columns: usize,
    /// Last rendered input, replayed when an option needs a re-render
    events: Vec<CalendarEvent>,
}

impl TastiYear {
    /// Current year, configured from `settings`. Nothing is highlighted
    /// until [`TastiYear::render_year`] is called.
    pub fn new(settings: &CalendarSettings) -> Self {
        let today = Local::now().date_naive();
        let year = today.year();
        let months = (1..=12)
            .filter_map(|month| TastiMonth::for_month(year, month, settings))
            .collect();

        Self {
            year,
            months,
            today,
            show_popups: settings.show_popups,
            appearance: settings.appearance,
            columns: DEFAULT_COLUMNS,
            events: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn months(&self) -> &[TastiMonth] {
        &self.months
    }

    /// Month `month` (1-12)
    pub fn month(&self, month: u32) -> Option<&TastiMonth> {
        month
            .checked_sub(1)
            .and_then(|index| self.months.get(index as usize))
    }

    fn month_mut(&mut self, month: u32) -> Option<&mut TastiMonth> {
        month
            .checked_sub(1)
            .and_then(|index| self.months.get_mut(index as usize))
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn show_popups(&self) -> bool {
        self.show_popups
    }

    /// Events used by the last render
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Override the date treated as today, for this year and its months
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        for month in &mut self.months {
            month.set_today(today);
        }
    }

    /// Months per row when shown
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.clamp(1, 12);
    }

    /// Ring today's date, if it falls in the displayed year.
    ///
    /// `marker` and `color` replace the default tertiary ring.
    pub fn highlight_current_date(&mut self, marker: Option<Marker>, color: Option<egui::Color32>) {
        let today = self.today;
        if today.year() != self.year {
            return;
        }

        let color = color.map_or(HighlightColor::Theme(ThemeRole::Tertiary), HighlightColor::Custom);
        let options = HighlightOptions::new(color)
            .marker(marker.unwrap_or(Marker::Ring))
            .as_foreground(true);

        // Today's ring is decoration, not an event for the header count
        if let Some(month) = self.month_mut(today.month()) {
            month.mark_day(today.day(), &options);
        }
    }

    /// Lay out `year` and highlight the given events or dates.
    ///
    /// Events dated after the displayed year are skipped; earlier ones
    /// are shown on their month and day, so yearly dates such as
    /// birthdays recur.
    pub fn render_year(
        &mut self,
        year: i32,
        events: Option<&[CalendarEvent]>,
        dates: Option<&[NaiveDate]>,
    ) {
        self.year = year;
        for month in &mut self.months {
            month.set_year(year);
            month.reset_highlighting();
            month.reset_event_count();
        }

        self.highlight_current_date(None, None);

        self.events = unify(events, dates);
        let list: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|event| event.date.year() <= year)
            .cloned()
            .collect();

        log::debug!("Rendering year {} with {} events", year, list.len());

        for group in group_by_day(list) {
            let date = group.first_date();
            let options = TastiMonth::event_highlight(&group, self.show_popups);
            self.highlight_date(date, options);
        }
    }

    /// Highlight the month and day of `date` in the displayed year.
    ///
    /// `None` and dates after the displayed year are ignored.
    pub fn highlight_date(&mut self, date: Option<NaiveDate>, options: HighlightOptions) {
        let Some(date) = date else {
            return;
        };
        if date.year() > self.year {
            return;
        }
        if let Some(month) = self.month_mut(date.month()) {
            month.highlight_day(date.day(), options);
        }
    }

    fn rerender(&mut self) {
        let events = std::mem::take(&mut self.events);
        self.render_year(self.year, Some(events.as_slice()), None);
    }

    pub fn set_header_prefix(&mut self, prefix: HeaderPrefix, refresh: bool) {
        for month in &mut self.months {
            month.set_header_prefix(prefix.clone(), refresh);
        }
    }

    pub fn set_popup_duration(&mut self, duration: Duration, refresh: bool) {
        for month in &mut self.months {
            month.set_popup_duration(duration, refresh);
        }
    }

    pub fn set_popup_anchor(&mut self, anchor: PopupAnchor, refresh: bool) {
        for month in &mut self.months {
            month.set_popup_anchor(anchor, refresh);
        }
    }

    /// Enable or disable popups; with `refresh` the last events are rendered again
    pub fn set_show_popups(&mut self, enabled: bool, refresh: bool) {
        self.show_popups = enabled;
        for month in &mut self.months {
            month.set_show_popups(enabled, false);
        }
        if refresh {
            self.rerender();
        }
    }

    pub fn set_week_start(&mut self, week_start: WeekStart, refresh: bool) {
        for month in &mut self.months {
            month.set_week_start(week_start, refresh);
        }
    }

    pub fn set_hide_week_days(&mut self, hide: bool, refresh: bool) {
        for month in &mut self.months {
            month.set_hide_week_days(hide, refresh);
        }
    }

    pub fn set_sunday_highlight(&mut self, style: SundayHighlight, refresh: bool) {
        for month in &mut self.months {
            month.set_sunday_highlight(style, refresh);
        }
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        for month in &mut self.months {
            month.set_appearance(appearance);
        }
    }

    /// Set the appearance from its index.
    ///
    /// Out-of-range indices move to the next level instead, which lets a
    /// single button cycle through them. Returns the level applied.
    pub fn set_appearance_index(&mut self, index: i32) -> Appearance {
        let appearance =
            Appearance::from_index(index).unwrap_or_else(|| self.appearance.next());
        self.set_appearance(appearance);
        appearance
    }

    /// Paint the twelve months in a grid and handle taps.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        theme: &CalendarTheme,
        popups: &mut PopupManager,
    ) -> YearViewResult {
        let mut result = YearViewResult::default();
        let spacing = self.appearance.cell_padding() * 2.0 + 8.0;

        egui::Grid::new("tasti_year_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for (index, month) in self.months.iter().enumerate() {
                    let month_result = ui.push_id(index, |ui| month.show(ui, theme, popups)).inner;

                    if month_result.clicked_day.is_some() {
                        result.clicked_day = month_result.clicked_day;
                    }
                    if month_result.header_clicked {
                        result.header_clicked = Some(month.month());
                    }

                    if (index + 1) % self.columns == 0 {
                        ui.end_row();
                    }
                }
            });

        result
    }
}
