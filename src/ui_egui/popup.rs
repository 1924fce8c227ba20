//! Info popups shown when a highlighted day or a month header is tapped.
//!
//! Popups behave like snackbars: one message at a time, shown for a fixed
//! duration and faded out at the end. A new popup replaces the current one.

use egui::{Align2, Color32, Context, Pos2, Rect, RichText, Vec2};
use std::time::{Duration, Instant};

use crate::models::appearance::PopupAnchor;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::color::with_alpha;

const FADE_OUT: Duration = Duration::from_millis(500);
const MAX_WIDTH: f32 = 320.0;
const MARGIN: f32 = 12.0;

/// A single popup message
#[derive(Debug, Clone)]
pub struct InfoPopup {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
    /// Rect of the widget that raised the popup, when anchored to it
    pub anchor_rect: Option<Rect>,
}

impl InfoPopup {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
            anchor_rect: None,
        }
    }

    pub fn anchored_to(mut self, rect: Rect) -> Self {
        self.anchor_rect = Some(rect);
        self
    }

    /// Check if this popup has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Get the opacity based on remaining time (for fade out)
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(FADE_OUT);

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let fade_progress = (self.duration - elapsed).as_secs_f32() / FADE_OUT.as_secs_f32();
            fade_progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Owner of the popup currently on screen.
///
/// The host application keeps one manager, passes it to the calendar
/// widgets' `show` methods and calls [`PopupManager::render`] once per frame.
#[derive(Debug, Default)]
pub struct PopupManager {
    current: Option<InfoPopup>,
}

impl PopupManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any popup already visible.
    ///
    /// With `PopupAnchor::Widget` the popup is placed under `source`;
    /// otherwise at the bottom of the window.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        duration: Duration,
        anchor: PopupAnchor,
        source: Rect,
    ) {
        let popup = InfoPopup::new(message, duration);
        let popup = match anchor {
            PopupAnchor::Widget => popup.anchored_to(source),
            PopupAnchor::Screen => popup,
        };
        log::debug!("Showing popup: {}", popup.message);
        self.current = Some(popup);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The popup currently visible, if any
    pub fn current(&self) -> Option<&InfoPopup> {
        self.current.as_ref()
    }

    /// Remove the popup once its time is up
    pub fn cleanup(&mut self) {
        if self.current.as_ref().is_some_and(InfoPopup::is_expired) {
            self.current = None;
        }
    }

    pub fn has_popup(&self) -> bool {
        self.current.is_some()
    }

    /// Render the active popup. Tapping it dismisses it early.
    pub fn render(&mut self, ctx: &Context, theme: &CalendarTheme) {
        self.cleanup();

        let Some(popup) = &self.current else {
            return;
        };

        // Request repaint for the fade animation
        ctx.request_repaint();

        let opacity = popup.opacity();
        if opacity <= 0.0 {
            return;
        }

        let (pos, pivot) = match popup.anchor_rect {
            Some(rect) => (rect.center_bottom() + Vec2::new(0.0, 4.0), Align2::CENTER_TOP),
            None => {
                let screen = ctx.screen_rect();
                (
                    Pos2::new(screen.center().x, screen.bottom() - MARGIN),
                    Align2::CENTER_BOTTOM,
                )
            }
        };

        let (bg_color, text_color) = popup_colors(theme, opacity);

        let response = egui::Area::new(egui::Id::new("tasti_calendar_popup"))
            .fixed_pos(pos)
            .pivot(pivot)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(bg_color)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                    .stroke(egui::Stroke::new(1.0, Color32::TRANSPARENT))
                    .show(ui, |ui| {
                        ui.set_max_width(MAX_WIDTH);
                        ui.label(RichText::new(&popup.message).color(text_color));
                    });
            })
            .response
            .interact(egui::Sense::click());

        if response.clicked() {
            self.dismiss();
        }
    }
}

/// Fill and text colours of a popup at `opacity`
fn popup_colors(theme: &CalendarTheme, opacity: f32) -> (Color32, Color32) {
    let opacity = opacity.clamp(0.0, 1.0);
    (
        with_alpha(theme.surface, (235.0 * opacity) as u8),
        with_alpha(theme.on_surface, (255.0 * opacity) as u8),
    )
}
