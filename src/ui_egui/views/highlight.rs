//! Per-day highlight state and the options used to build it.

use egui::Color32;

use crate::ui_egui::theme::{CalendarTheme, ThemeRole};
use crate::utils::color::{best_contrast, stepped_alpha};
use crate::utils::text::capitalize_first;

/// Shape drawn behind or over a day number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Ring,
}

/// A colour given directly or taken from the theme when painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    Theme(ThemeRole),
    Custom(Color32),
}

impl HighlightColor {
    pub fn resolve(self, theme: &CalendarTheme) -> Color32 {
        match self {
            HighlightColor::Theme(role) => theme.color(role),
            HighlightColor::Custom(color) => color,
        }
    }
}

impl From<Color32> for HighlightColor {
    fn from(color: Color32) -> Self {
        HighlightColor::Custom(color)
    }
}

impl From<ThemeRole> for HighlightColor {
    fn from(role: ThemeRole) -> Self {
        HighlightColor::Theme(role)
    }
}

/// How a single highlight call marks a day.
///
/// ```
/// use tasti_calendar::ui_egui::theme::ThemeRole;
/// use tasti_calendar::ui_egui::views::{HighlightOptions, Marker};
///
/// let options = HighlightOptions::new(ThemeRole::Primary)
///     .marker(Marker::Circle)
///     .auto_opacity(true)
///     .popup_text("Birthday");
/// assert_eq!(options.weight, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOptions {
    pub color: HighlightColor,
    /// Without a marker only the day text is coloured
    pub marker: Option<Marker>,
    pub bold: bool,
    /// Stack opacity when the same day is highlighted more than once
    pub auto_opacity: bool,
    /// Pick black or white text for contrast against the marker
    pub auto_text_color: bool,
    /// Draw the marker over the text instead of behind it
    pub as_foreground: bool,
    /// Shown when the day is tapped; blank text keeps the day inert
    pub popup_text: String,
    /// Number of stacked highlights this call stands for
    pub weight: u32,
}

impl HighlightOptions {
    pub fn new(color: impl Into<HighlightColor>) -> Self {
        Self {
            color: color.into(),
            marker: None,
            bold: false,
            auto_opacity: false,
            auto_text_color: false,
            as_foreground: false,
            popup_text: String::new(),
            weight: 1,
        }
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn auto_opacity(mut self, enabled: bool) -> Self {
        self.auto_opacity = enabled;
        self
    }

    pub fn auto_text_color(mut self, enabled: bool) -> Self {
        self.auto_text_color = enabled;
        self
    }

    pub fn as_foreground(mut self, enabled: bool) -> Self {
        self.as_foreground = enabled;
        self
    }

    pub fn popup_text(mut self, text: impl Into<String>) -> Self {
        self.popup_text = text.into();
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight.max(1);
        self
    }
}

/// A marker layer painted for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLayer {
    pub marker: Marker,
    pub color: HighlightColor,
    pub alpha: u8,
}

/// How the day number text is coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Fixed(HighlightColor),
    /// Best contrast against the background marker
    Auto,
}

/// Accumulated highlight state of one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayHighlight {
    pub background: Option<MarkerLayer>,
    pub foreground: Option<MarkerLayer>,
    pub text_color: Option<TextColor>,
    pub bold: bool,
    pub popup_text: Option<String>,
}

impl DayHighlight {
    /// Merge one highlight call into this day.
    pub fn apply(&mut self, options: &HighlightOptions) {
        match (options.marker, options.as_foreground) {
            (None, _) => self.text_color = Some(TextColor::Fixed(options.color)),
            (Some(marker), true) => {
                self.foreground = Some(MarkerLayer {
                    marker,
                    color: options.color,
                    alpha: u8::MAX,
                });
            }
            (Some(marker), false) => {
                let alpha = if options.auto_opacity {
                    let current = self.background.map_or(0, |layer| layer.alpha);
                    stepped_alpha(current, options.weight)
                } else {
                    u8::MAX
                };
                self.background = Some(MarkerLayer {
                    marker,
                    color: options.color,
                    alpha,
                });
                if options.auto_text_color {
                    self.text_color = Some(TextColor::Auto);
                }
            }
        }

        if options.bold {
            self.bold = true;
        }

        if !options.popup_text.trim().is_empty() {
            self.popup_text = Some(capitalize_first(options.popup_text.trim()));
        }
    }

    /// Background alpha, 0 when there is no background marker
    pub fn background_alpha(&self) -> u8 {
        self.background.map_or(0, |layer| layer.alpha)
    }

    /// Colour of the day number under `theme`
    pub fn resolve_text_color(&self, theme: &CalendarTheme) -> Color32 {
        match self.text_color {
            Some(TextColor::Fixed(color)) => color.resolve(theme),
            Some(TextColor::Auto) => match self.background {
                Some(layer) => best_contrast(layer.color.resolve(theme), layer.alpha, theme.on_surface),
                None => theme.on_background,
            },
            None => theme.on_background,
        }
    }
}
