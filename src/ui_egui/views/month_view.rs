use chrono::{Datelike, Local, NaiveDate};
use std::collections::BTreeMap;
use std::time::Duration;

use super::highlight::{DayHighlight, HighlightOptions, Marker};
use crate::models::appearance::{Appearance, PopupAnchor, SundayHighlight, WeekStart};
use crate::models::event::CalendarEvent;
use crate::models::settings::{CalendarSettings, HeaderPrefix};
use crate::services::grouping::{group_by_day, unify, DayGroup};
use crate::ui_egui::theme::ThemeRole;
use crate::utils::date::{day_cell_text, MonthLayout, GRID_CELLS};
use crate::utils::text::header_message;

/// Result returned from showing a month
#[derive(Debug, Default)]
pub struct MonthViewResult {
    /// Day whose cell was clicked this frame
    pub clicked_day: Option<NaiveDate>,
    /// Whether the month header was clicked this frame
    pub header_clicked: bool,
}

/// A single month laid out on a fixed grid of 37 day cells.
///
/// The month keeps its own layout, options and highlights between frames;
/// `show` paints it. It can be used alone or as part of a [`TastiYear`].
///
/// [`TastiYear`]: super::year_view::TastiYear
#[derive(Debug, Clone)]
pub struct TastiMonth {
    pub(super) layout: MonthLayout,
    pub(super) today: NaiveDate,
    pub(super) hide_week_days: bool,
    pub(super) sunday_highlight: SundayHighlight,
    pub(super) show_popups: bool,
    pub(super) popup_duration: Duration,
    pub(super) popup_anchor: PopupAnchor,
    pub(super) header_prefix: HeaderPrefix,
    pub(super) appearance: Appearance,
    event_count: u32,
    highlights: BTreeMap<u32, DayHighlight>,
    /// Last event input, replayed when popups are toggled
    events: Vec<CalendarEvent>,
}

impl TastiMonth {
    /// Month containing `date`, configured from `settings`
    pub fn new(date: NaiveDate, settings: &CalendarSettings) -> Self {
        Self {
            layout: MonthLayout::for_date(date, settings.effective_week_start()),
            today: Local::now().date_naive(),
            hide_week_days: settings.hide_week_days,
            sunday_highlight: settings.sunday_highlight,
            show_popups: settings.show_popups,
            popup_duration: settings.popup_duration(),
            popup_anchor: settings.popup_anchor,
            header_prefix: settings.header_prefix.clone(),
            appearance: settings.appearance,
            event_count: 0,
            highlights: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Month `month` (1-12) of `year`, `None` if that month does not exist
    pub fn for_month(year: i32, month: u32, settings: &CalendarSettings) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|date| Self::new(date, settings))
    }

    pub fn year(&self) -> i32 {
        self.layout.year()
    }

    pub fn month(&self) -> u32 {
        self.layout.month()
    }

    pub fn layout(&self) -> &MonthLayout {
        &self.layout
    }

    pub fn week_start(&self) -> WeekStart {
        self.layout.week_start()
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn hide_week_days(&self) -> bool {
        self.hide_week_days
    }

    pub fn show_popups(&self) -> bool {
        self.show_popups
    }

    /// Number of highlights applied since the year last changed
    pub fn event_count(&self) -> u32 {
        self.event_count
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Override the date treated as today
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn is_current_month(&self) -> bool {
        self.today.year() == self.year() && self.today.month() == self.month()
    }

    pub fn highlight(&self, day: u32) -> Option<&DayHighlight> {
        self.highlights.get(&day)
    }

    /// Days carrying any highlight, in order
    pub fn highlighted_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.highlights.keys().copied()
    }

    /// Text of the cell at `index`, empty for hidden cells
    pub fn cell_text(&self, index: usize) -> String {
        self.layout
            .cell_day(index)
            .map(day_cell_text)
            .unwrap_or_default()
    }

    pub fn visible_cells(&self) -> usize {
        (0..GRID_CELLS)
            .filter(|&i| self.layout.cell_day(i).is_some())
            .count()
    }

    /// Message shown when the header is tapped
    pub fn header_message(&self) -> String {
        header_message(&self.header_prefix, self.event_count)
    }

    /// Highlight `day` of this month.
    ///
    /// Every call counts towards the header total, but days the month does
    /// not have are otherwise ignored.
    pub fn highlight_day(&mut self, day: u32, options: HighlightOptions) {
        self.event_count = self.event_count.saturating_add(options.weight);
        self.mark_day(day, &options);
    }

    /// Apply `options` to `day` without counting it as an event
    pub(super) fn mark_day(&mut self, day: u32, options: &HighlightOptions) {
        if !self.layout.contains_day(day) {
            log::trace!(
                "Ignoring day {} for {}-{:02}",
                day,
                self.year(),
                self.month()
            );
            return;
        }

        log::trace!("Highlighting {}-{:02}-{:02}", self.year(), self.month(), day);
        self.highlights.entry(day).or_default().apply(options);
    }

    /// Remove every highlight and tap label from the month
    pub fn reset_highlighting(&mut self) {
        self.highlights.clear();
    }

    pub(super) fn reset_event_count(&mut self) {
        self.event_count = 0;
    }

    /// Options used for a group of events rendered by the widgets
    pub(super) fn event_highlight(group: &DayGroup, show_popups: bool) -> HighlightOptions {
        let label = if show_popups { group.label() } else { String::new() };
        HighlightOptions::new(ThemeRole::Primary)
            .marker(Marker::Circle)
            .auto_opacity(true)
            .auto_text_color(true)
            .popup_text(label)
            .weight(u32::try_from(group.len()).unwrap_or(u32::MAX))
    }

    /// Lay out the month containing `month_date` and highlight the given
    /// events or dates.
    ///
    /// Without a date the current month is re-laid out. Moving to another
    /// month drops the highlights, and moving to another year also resets
    /// the header count. When events (or, failing that, dates) are given,
    /// they replace any previous highlights; only those falling in this
    /// month are used, whatever their year.
    pub fn render_month(
        &mut self,
        month_date: Option<NaiveDate>,
        events: Option<&[CalendarEvent]>,
        dates: Option<&[NaiveDate]>,
    ) {
        let target = month_date.unwrap_or_else(|| self.layout.first_day());

        if target.year() != self.year() {
            self.event_count = 0;
        }
        if target.year() != self.year() || target.month() != self.month() {
            self.reset_highlighting();
        }
        self.layout = MonthLayout::for_date(target, self.layout.week_start());

        let input = unify(events, dates);
        if input.is_empty() {
            return;
        }

        let month = self.month();
        let list: Vec<CalendarEvent> = input
            .iter()
            .filter(|event| event.date.month() == month)
            .cloned()
            .collect();
        self.events = input;

        log::debug!(
            "Rendering {}-{:02} with {} events",
            self.year(),
            month,
            list.len()
        );

        self.reset_highlighting();
        self.event_count = 0;
        for group in group_by_day(list) {
            let options = Self::event_highlight(&group, self.show_popups);
            self.highlight_day(group.day, options);
        }
    }

    /// Show the same month in another year
    pub fn set_year(&mut self, year: i32) {
        match self.layout.first_day().with_year(year) {
            Some(date) => self.render_month(Some(date), None, None),
            None => log::warn!("Year {} is out of range", year),
        }
    }

    pub fn set_week_start(&mut self, week_start: WeekStart, refresh: bool) {
        if week_start == self.week_start() {
            return;
        }
        self.layout = MonthLayout::for_date(self.layout.first_day(), week_start);
        if refresh {
            self.render_month(None, None, None);
        }
    }

    pub fn set_hide_week_days(&mut self, hide: bool, refresh: bool) {
        self.hide_week_days = hide;
        if refresh {
            self.render_month(None, None, None);
        }
    }

    pub fn set_sunday_highlight(&mut self, style: SundayHighlight, refresh: bool) {
        self.sunday_highlight = style;
        if refresh {
            self.render_month(None, None, None);
        }
    }

    /// Enable or disable popups on header and day taps.
    ///
    /// Disabling also silences labels already attached to days. With
    /// `refresh` the last events are rendered again, so day labels follow
    /// the new setting.
    pub fn set_show_popups(&mut self, enabled: bool, refresh: bool) {
        self.show_popups = enabled;
        if refresh && !self.events.is_empty() {
            let events = std::mem::take(&mut self.events);
            self.render_month(None, Some(events.as_slice()), None);
        }
    }

    pub fn set_popup_duration(&mut self, duration: Duration, refresh: bool) {
        self.popup_duration = duration;
        if refresh {
            self.render_month(None, None, None);
        }
    }

    pub fn set_popup_anchor(&mut self, anchor: PopupAnchor, refresh: bool) {
        self.popup_anchor = anchor;
        if refresh {
            self.render_month(None, None, None);
        }
    }

    pub fn set_header_prefix(&mut self, prefix: HeaderPrefix, refresh: bool) {
        self.header_prefix = prefix;
        if refresh {
            self.render_month(None, None, None);
        }
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// Set the appearance from its index; values outside 0..=3 are ignored
    pub fn set_appearance_index(&mut self, index: i32) {
        if let Some(appearance) = Appearance::from_index(index) {
            self.set_appearance(appearance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_egui::views::highlight::TextColor;
    use egui::Color32;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings(week_start: WeekStart) -> CalendarSettings {
        CalendarSettings {
            week_start: Some(week_start),
            ..Default::default()
        }
    }

    fn march_2024() -> TastiMonth {
        TastiMonth::for_month(2024, 3, &settings(WeekStart::Monday)).unwrap()
    }

    #[test]
    fn test_cells_of_march_2024() {
        let month = march_2024();
        assert_eq!(month.visible_cells(), 31);
        assert_eq!(month.cell_text(3), "");
        assert_eq!(month.cell_text(4), " 1");
        assert_eq!(month.cell_text(34), "31");
        assert_eq!(month.cell_text(35), "");
    }

    #[test]
    fn test_week_start_shifts_cells() {
        let mut month = march_2024();
        month.set_week_start(WeekStart::Sunday, true);
        assert_eq!(month.layout().leading_blanks(), 5);
        assert_eq!(month.cell_text(5), " 1");
    }

    #[test]
    fn test_highlight_invalid_day_is_ignored_but_counted() {
        let mut month = TastiMonth::for_month(2023, 2, &settings(WeekStart::Monday)).unwrap();
        month.highlight_day(30, HighlightOptions::new(Color32::RED));
        month.highlight_day(0, HighlightOptions::new(Color32::RED));
        assert_eq!(month.highlighted_days().count(), 0);
        assert_eq!(month.event_count(), 2);
    }

    #[test]
    fn test_render_groups_events_per_day() {
        let mut month = march_2024();
        let events = vec![
            CalendarEvent::new(date(2024, 3, 4), "alice"),
            CalendarEvent::new(date(2024, 3, 4), "Bob"),
            CalendarEvent::new(date(2024, 3, 20), "Carol"),
            CalendarEvent::new(date(2024, 4, 2), "Not this month"),
        ];
        month.render_month(None, Some(events.as_slice()), None);

        assert_eq!(month.highlighted_days().collect::<Vec<_>>(), vec![4, 20]);
        assert_eq!(month.event_count(), 3);

        let fourth = month.highlight(4).unwrap();
        assert_eq!(fourth.popup_text.as_deref(), Some("Alice, Bob"));
        assert_eq!(fourth.background_alpha(), 140);
        assert_eq!(fourth.text_color, Some(TextColor::Auto));
        assert_eq!(month.highlight(20).unwrap().background_alpha(), 70);
    }

    #[test]
    fn test_render_dates_without_labels() {
        let mut month = march_2024();
        month.render_month(None, None, Some(&[date(2024, 3, 8)][..]));
        let eighth = month.highlight(8).unwrap();
        assert_eq!(eighth.popup_text, None);
        assert_eq!(eighth.background_alpha(), 70);
    }

    #[test]
    fn test_popups_disabled_drop_labels() {
        let mut month = march_2024();
        month.set_show_popups(false, false);
        let events = vec![CalendarEvent::new(date(2024, 3, 4), "alice")];
        month.render_month(None, Some(events.as_slice()), None);
        assert_eq!(month.highlight(4).unwrap().popup_text, None);
    }

    #[test]
    fn test_rerender_replaces_highlights() {
        let mut month = march_2024();
        let events = vec![CalendarEvent::new(date(2024, 3, 4), "a")];
        month.render_month(None, Some(events.as_slice()), None);
        month.render_month(None, Some(events.as_slice()), None);
        assert_eq!(month.highlight(4).unwrap().background_alpha(), 70);
        assert_eq!(month.event_count(), 1);
    }

    #[test]
    fn test_events_outside_month_clear_previous_highlights() {
        let mut month = march_2024();
        let old = vec![CalendarEvent::new(date(2024, 3, 4), "old")];
        month.render_month(None, Some(old.as_slice()), None);

        let elsewhere = vec![CalendarEvent::new(date(2024, 4, 2), "new")];
        month.render_month(None, Some(elsewhere.as_slice()), None);

        assert!(month.highlight(4).is_none());
        assert_eq!(month.highlighted_days().count(), 0);
        assert_eq!(month.event_count(), 0);
        assert_eq!(month.header_message(), "-> 0");
    }

    #[test]
    fn test_show_popups_refresh_restores_labels() {
        let mut month = march_2024();
        month.set_show_popups(false, false);
        let events = vec![CalendarEvent::new(date(2024, 3, 4), "alice")];
        month.render_month(None, Some(events.as_slice()), None);
        assert_eq!(month.highlight(4).unwrap().popup_text, None);

        month.set_show_popups(true, true);
        let fourth = month.highlight(4).unwrap();
        assert_eq!(fourth.popup_text.as_deref(), Some("Alice"));
        assert_eq!(fourth.background_alpha(), 70);
        assert_eq!(month.event_count(), 1);
    }

    #[test]
    fn test_show_popups_without_refresh_keeps_highlights() {
        let mut month = march_2024();
        month.set_show_popups(false, false);
        let events = vec![CalendarEvent::new(date(2024, 3, 4), "alice")];
        month.render_month(None, Some(events.as_slice()), None);

        month.set_show_popups(true, false);
        assert!(month.show_popups());
        assert_eq!(month.highlight(4).unwrap().popup_text, None);
    }

    #[test]
    fn test_relayout_keeps_highlights() {
        let mut month = march_2024();
        month.highlight_day(9, HighlightOptions::new(Color32::RED));
        month.set_week_start(WeekStart::Sunday, true);
        assert!(month.highlight(9).is_some());
    }

    #[test]
    fn test_moving_month_resets() {
        let mut month = march_2024();
        month.highlight_day(9, HighlightOptions::new(Color32::RED));
        month.render_month(Some(date(2024, 4, 15)), None, None);
        assert_eq!(month.month(), 4);
        assert!(month.highlight(9).is_none());
        assert_eq!(month.event_count(), 1);

        month.set_year(2025);
        assert_eq!(month.year(), 2025);
        assert_eq!(month.event_count(), 0);
    }

    #[test]
    fn test_header_message_counts_events() {
        let mut month = march_2024();
        month.set_header_prefix(HeaderPrefix::Text("events:".to_string()), false);
        month.highlight_day(1, HighlightOptions::new(Color32::RED).weight(3));
        assert_eq!(month.header_message(), "Events: 3");
    }

    #[test]
    fn test_current_month() {
        let mut month = march_2024();
        month.set_today(date(2024, 3, 18));
        assert!(month.is_current_month());
        month.set_today(date(2023, 3, 18));
        assert!(!month.is_current_month());
    }

    #[test]
    fn test_appearance_index_ignores_invalid() {
        let mut month = march_2024();
        month.set_appearance_index(2);
        assert_eq!(month.appearance(), Appearance::Large);
        month.set_appearance_index(7);
        assert_eq!(month.appearance(), Appearance::Large);
    }
}
