//! Painting for the month widget.
//!
//! Kept apart from `month_view.rs`, which owns the month state: this file
//! draws the title, the weekday row and the 37 day cells, and turns taps
//! into popups.

use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use super::highlight::{DayHighlight, Marker, MarkerLayer};
use super::month_view::{MonthViewResult, TastiMonth};
use crate::ui_egui::popup::PopupManager;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::color::with_alpha;
use crate::utils::date::{
    accessible_date, day_cell_text, month_name, sunday_column, weekday_labels, GRID_CELLS,
};

const COLUMNS: usize = 7;
const WEEKDAY_OPACITY: f32 = 0.85;
const RING_WIDTH: f32 = 1.5;
const BOLD_OFFSET: f32 = 0.6;

impl TastiMonth {
    /// Side of a square day cell for the current appearance
    pub fn cell_side(&self) -> f32 {
        self.appearance.cell_text_size() * 1.5 + self.appearance.cell_padding() * 2.0
    }

    /// Width of the whole month
    pub fn width(&self) -> f32 {
        self.cell_side() * COLUMNS as f32
    }

    /// Paint the month and handle taps.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        theme: &CalendarTheme,
        popups: &mut PopupManager,
    ) -> MonthViewResult {
        let mut result = MonthViewResult::default();

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;

            result.header_clicked = self.show_title(ui, theme, popups);
            ui.add_space(self.appearance.cell_padding());

            if !self.hide_week_days {
                self.show_week_days(ui, theme);
            }

            let rows = GRID_CELLS.div_ceil(COLUMNS);
            for row in 0..rows {
                ui.horizontal(|ui| {
                    for column in 0..COLUMNS {
                        let index = row * COLUMNS + column;
                        if index >= GRID_CELLS {
                            break;
                        }
                        if let Some(date) = self.show_day_cell(ui, index, theme, popups) {
                            result.clicked_day = Some(date);
                        }
                    }
                });
            }
        });

        result
    }

    fn show_title(&self, ui: &mut egui::Ui, theme: &CalendarTheme, popups: &mut PopupManager) -> bool {
        let color = if self.is_current_month() {
            theme.tertiary
        } else {
            theme.secondary
        };
        let title = RichText::new(month_name(self.month()))
            .size(self.appearance.title_text_size())
            .color(color)
            .strong();

        let sense = if self.show_popups {
            Sense::click()
        } else {
            Sense::hover()
        };
        let response = ui.add(egui::Label::new(title).sense(sense));

        if self.show_popups && response.clicked() {
            popups.show(
                self.header_message(),
                self.popup_duration,
                self.popup_anchor,
                response.rect,
            );
            return true;
        }
        false
    }

    fn show_week_days(&self, ui: &mut egui::Ui, theme: &CalendarTheme) {
        let side = self.cell_side();
        let size = self.appearance.cell_text_size();
        let week_start = self.layout.week_start();
        let sunday = sunday_column(week_start);

        ui.horizontal(|ui| {
            for (column, label) in weekday_labels(week_start).iter().enumerate() {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(side, size * 1.6), Sense::hover());

                let is_sunday = column == sunday;
                let base = if is_sunday && self.sunday_highlight.is_colored() {
                    theme.tertiary
                } else {
                    theme.on_background
                };
                let color = base.gamma_multiply(WEEKDAY_OPACITY);
                let bold = is_sunday && self.sunday_highlight.is_bold();

                paint_text(ui, rect.center(), label, FontId::monospace(size), color, bold);
            }
        });
    }

    /// Paint one cell. Returns the cell's date when it was clicked.
    fn show_day_cell(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        theme: &CalendarTheme,
        popups: &mut PopupManager,
    ) -> Option<chrono::NaiveDate> {
        let side = self.cell_side();

        // Hidden cells still take their space so rows stay aligned
        let Some(day) = self.layout.cell_day(index) else {
            ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
            return None;
        };

        let highlight = self.highlight(day);
        let popup_text = highlight
            .and_then(|h| h.popup_text.as_deref())
            .filter(|_| self.show_popups);

        let sense = if popup_text.is_some() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), sense);

        let description = accessible_date(self.year(), self.month(), day);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, popup_text.is_some(), &description)
        });

        if ui.is_rect_visible(rect) {
            self.paint_day_cell(ui, rect, day, highlight, theme);
        }

        let response = if popup_text.is_some() {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        } else {
            response
        };

        if !response.clicked() {
            return None;
        }

        if let Some(text) = popup_text {
            popups.show(text, self.popup_duration, self.popup_anchor, rect);
        }
        self.layout.cell_date(index)
    }

    fn paint_day_cell(
        &self,
        ui: &egui::Ui,
        rect: Rect,
        day: u32,
        highlight: Option<&DayHighlight>,
        theme: &CalendarTheme,
    ) {
        let radius = rect.width() * 0.5 - 1.0;
        let font = FontId::monospace(self.appearance.cell_text_size());

        if let Some(layer) = highlight.and_then(|h| h.background) {
            paint_marker(ui, rect.center(), radius, layer, theme);
        }

        let text_color = highlight.map_or(theme.on_background, |h| h.resolve_text_color(theme));
        let bold = highlight.is_some_and(|h| h.bold);
        paint_text(ui, rect.center(), &day_cell_text(day), font, text_color, bold);

        if let Some(layer) = highlight.and_then(|h| h.foreground) {
            paint_marker(ui, rect.center(), radius, layer, theme);
        }
    }
}

fn paint_marker(ui: &egui::Ui, center: Pos2, radius: f32, layer: MarkerLayer, theme: &CalendarTheme) {
    let color = with_alpha(layer.color.resolve(theme), layer.alpha);
    match layer.marker {
        Marker::Circle => {
            ui.painter().circle_filled(center, radius, color);
        }
        Marker::Ring => {
            ui.painter()
                .circle_stroke(center, radius - RING_WIDTH, Stroke::new(RING_WIDTH, color));
        }
    }
}

/// Centered text; bold is faked by painting twice with a small offset
fn paint_text(ui: &egui::Ui, center: Pos2, text: &str, font: FontId, color: Color32, bold: bool) {
    let painter = ui.painter();
    painter.text(center, Align2::CENTER_CENTER, text, font.clone(), color);
    if bold {
        painter.text(
            center + Vec2::new(BOLD_OFFSET, 0.0),
            Align2::CENTER_CENTER,
            text,
            font,
            color,
        );
    }
}
