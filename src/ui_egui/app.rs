use chrono::{Datelike, Local};

use crate::models::appearance::{SundayHighlight, WeekStart};
use crate::models::event::CalendarEvent;
use crate::models::settings::CalendarSettings;
use crate::services::settings::SettingsService;
use crate::ui_egui::popup::PopupManager;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::TastiYear;

/// Demo application: a year of months with the given events highlighted.
pub struct CalendarApp {
    settings: CalendarSettings,
    settings_service: SettingsService,
    theme: CalendarTheme,
    year: TastiYear,
    events: Vec<CalendarEvent>,
    popups: PopupManager,
    status: Option<String>,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_toolbar(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let result = self.year.show(ui, &self.theme, &mut self.popups);
                if let Some(date) = result.clicked_day {
                    self.status = Some(date.format("%A, %B %-d, %Y").to_string());
                }
            });
        });

        self.popups.render(ctx, &self.theme);
    }
}

impl CalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_service: SettingsService,
        events: Vec<CalendarEvent>,
    ) -> Self {
        let settings = settings_service.load_or_default();
        log::info!(
            "Loaded settings: appearance={}, week_start={:?}",
            settings.appearance.name(),
            settings.effective_week_start()
        );

        let theme = CalendarTheme::from_choice(settings.theme).with_overrides(&settings.colors);
        theme.apply_to_context(&cc.egui_ctx);

        let mut year = TastiYear::new(&settings);
        year.render_year(Local::now().year(), Some(events.as_slice()), None);

        Self {
            settings,
            settings_service,
            theme,
            year,
            events,
            popups: PopupManager::new(),
            status: None,
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tasti_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous year").clicked() {
                    self.go_to_year(self.year.year() - 1);
                }
                ui.heading(self.year.year().to_string());
                if ui.button("▶").on_hover_text("Next year").clicked() {
                    self.go_to_year(self.year.year() + 1);
                }
                if ui.button("Today").clicked() {
                    self.go_to_year(Local::now().year());
                }

                ui.separator();

                let appearance = self.year.appearance();
                if ui
                    .button(format!("Size: {}", appearance.name()))
                    .on_hover_text("Cycle cell size")
                    .clicked()
                {
                    // Out-of-range index moves to the next level
                    self.settings.appearance = self.year.set_appearance_index(-1);
                    self.save_settings();
                }

                let week_start = self.settings.effective_week_start();
                let label = match week_start {
                    WeekStart::Monday => "Week: Mon",
                    WeekStart::Sunday => "Week: Sun",
                };
                if ui.button(label).clicked() {
                    let toggled = if week_start.is_sunday_first() {
                        WeekStart::Monday
                    } else {
                        WeekStart::Sunday
                    };
                    self.settings.week_start = Some(toggled);
                    self.year.set_week_start(toggled, true);
                    self.save_settings();
                }

                let mut hide = self.settings.hide_week_days;
                if ui.checkbox(&mut hide, "Hide weekdays").changed() {
                    self.settings.hide_week_days = hide;
                    self.year.set_hide_week_days(hide, true);
                    self.save_settings();
                }

                let mut sunday_bold = self.settings.sunday_highlight.is_bold();
                if ui.checkbox(&mut sunday_bold, "Bold Sunday").changed() {
                    let style = if sunday_bold {
                        SundayHighlight::BoldColored
                    } else {
                        SundayHighlight::Normal
                    };
                    self.settings.sunday_highlight = style;
                    self.year.set_sunday_highlight(style, true);
                    self.save_settings();
                }

                let mut show_popups = self.settings.show_popups;
                if ui.checkbox(&mut show_popups, "Popups").changed() {
                    self.settings.show_popups = show_popups;
                    self.year.set_show_popups(show_popups, true);
                    if !show_popups {
                        self.popups.dismiss();
                    }
                    self.save_settings();
                }
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("tasti_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} events", self.events.len()));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
    }

    fn go_to_year(&mut self, year: i32) {
        let events = std::mem::take(&mut self.events);
        self.year.render_year(year, Some(events.as_slice()), None);
        self.events = events;
    }

    fn save_settings(&self) {
        if let Err(err) = self.settings_service.save(&self.settings) {
            log::error!("Failed to save settings: {}", err);
        }
    }
}
