//! Theme module for the calendar widgets
//!
//! Defines the CalendarTheme structure, a small set of colour roles in the
//! Material style, and conversion helpers between egui::Color32 and hex
//! strings used by the settings file.

use egui::Color32;

use crate::error::CalendarError;
use crate::models::settings::{ColorOverrides, ThemeChoice};

/// Colour roles the widgets draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    /// Event highlights
    Primary,
    /// Month titles
    Secondary,
    /// Current month title, today's ring, coloured Sundays
    Tertiary,
    /// Day numbers and weekday letters
    OnBackground,
    /// Text on faint highlights and in popups
    OnSurface,
    OnSurfaceInverse,
    Background,
    /// Popup background
    Surface,
}

/// A calendar theme defining all colours used by the widgets
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    pub name: String,

    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub primary: Color32,
    pub secondary: Color32,
    pub tertiary: Color32,
    pub on_background: Color32,
    pub on_surface: Color32,
    pub on_surface_inverse: Color32,
    pub background: Color32,
    pub surface: Color32,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            is_dark: false,
            primary: Color32::from_rgb(103, 80, 164),
            secondary: Color32::from_rgb(98, 91, 113),
            tertiary: Color32::from_rgb(125, 82, 96),
            on_background: Color32::from_rgb(28, 27, 31),
            on_surface: Color32::from_rgb(28, 27, 31),
            on_surface_inverse: Color32::from_rgb(244, 239, 244),
            background: Color32::from_rgb(255, 251, 254),
            surface: Color32::from_rgb(243, 237, 247),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            is_dark: true,
            primary: Color32::from_rgb(208, 188, 255),
            secondary: Color32::from_rgb(204, 194, 220),
            tertiary: Color32::from_rgb(239, 184, 200),
            on_background: Color32::from_rgb(230, 225, 229),
            on_surface: Color32::from_rgb(230, 225, 229),
            on_surface_inverse: Color32::from_rgb(49, 48, 51),
            background: Color32::from_rgb(28, 27, 31),
            surface: Color32::from_rgb(43, 41, 48),
        }
    }

    /// Theme for a settings choice, asking the OS when it is `System`
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    pub fn color(&self, role: ThemeRole) -> Color32 {
        match role {
            ThemeRole::Primary => self.primary,
            ThemeRole::Secondary => self.secondary,
            ThemeRole::Tertiary => self.tertiary,
            ThemeRole::OnBackground => self.on_background,
            ThemeRole::OnSurface => self.on_surface,
            ThemeRole::OnSurfaceInverse => self.on_surface_inverse,
            ThemeRole::Background => self.background,
            ThemeRole::Surface => self.surface,
        }
    }

    fn color_mut(&mut self, role: ThemeRole) -> &mut Color32 {
        match role {
            ThemeRole::Primary => &mut self.primary,
            ThemeRole::Secondary => &mut self.secondary,
            ThemeRole::Tertiary => &mut self.tertiary,
            ThemeRole::OnBackground => &mut self.on_background,
            ThemeRole::OnSurface => &mut self.on_surface,
            ThemeRole::OnSurfaceInverse => &mut self.on_surface_inverse,
            ThemeRole::Background => &mut self.background,
            ThemeRole::Surface => &mut self.surface,
        }
    }

    /// Apply hex overrides from the settings file.
    ///
    /// Values that fail to parse are logged and the preset colour is kept.
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> Self {
        let entries = [
            (ThemeRole::Primary, &overrides.primary),
            (ThemeRole::Secondary, &overrides.secondary),
            (ThemeRole::Tertiary, &overrides.tertiary),
            (ThemeRole::OnBackground, &overrides.on_background),
            (ThemeRole::OnSurface, &overrides.on_surface),
            (ThemeRole::OnSurfaceInverse, &overrides.on_surface_inverse),
            (ThemeRole::Background, &overrides.background),
            (ThemeRole::Surface, &overrides.surface),
        ];

        for (role, value) in entries {
            let fallback = self.color(role);
            *self.color_mut(role) = Self::resolve_hex(value.as_deref(), fallback);
        }
        self
    }

    /// Parse an optional hex colour, returning `fallback` when absent or invalid
    pub fn resolve_hex(value: Option<&str>, fallback: Color32) -> Color32 {
        match value {
            None => fallback,
            Some(hex) => Self::hex_to_color(hex).unwrap_or_else(|e| {
                log::warn!("{}, keeping {}", e, Self::color_to_hex(fallback));
                fallback
            }),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.widgets.noninteractive.fg_stroke.color = self.on_background;
        visuals.selection.bg_fill = self.primary;

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, CalendarError> {
        let invalid = |reason: &str| CalendarError::InvalidColor {
            value: hex.to_string(),
            reason: reason.to_string(),
        };
        let digits = hex.trim().trim_start_matches('#');

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid("hex color must be 6 characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid("not a hex number"))
        };

        Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        let color = Color32::from_rgb(255, 128, 64);
        assert_eq!(CalendarTheme::color_to_hex(color), "#FF8040");
    }

    #[test]
    fn test_hex_to_color() {
        let result = CalendarTheme::hex_to_color("#FF8040").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 128, 64));

        let result2 = CalendarTheme::hex_to_color("FF8040").unwrap();
        assert_eq!(result2, Color32::from_rgb(255, 128, 64));
    }

    #[test]
    fn test_hex_to_color_rejects_garbage() {
        assert!(CalendarTheme::hex_to_color("#FFF").is_err());
        assert!(CalendarTheme::hex_to_color("#GG0000").is_err());
        assert!(CalendarTheme::hex_to_color("#ÀÀÀÀ").is_err());
    }

    #[test]
    fn test_light_theme() {
        let theme = CalendarTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.color(ThemeRole::Primary), Color32::from_rgb(103, 80, 164));
    }

    #[test]
    fn test_dark_theme() {
        let theme = CalendarTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.color(ThemeRole::Background), Color32::from_rgb(28, 27, 31));
    }

    #[test]
    fn test_overrides_apply_and_fall_back() {
        let overrides = ColorOverrides {
            primary: Some("#00FF00".to_string()),
            tertiary: Some("not a color".to_string()),
            ..Default::default()
        };
        let theme = CalendarTheme::light().with_overrides(&overrides);

        assert_eq!(theme.primary, Color32::from_rgb(0, 255, 0));
        assert_eq!(theme.tertiary, CalendarTheme::light().tertiary);
        assert_eq!(theme.secondary, CalendarTheme::light().secondary);
    }

    #[test]
    fn test_resolve_hex_fallback() {
        let fallback = Color32::BLACK;
        assert_eq!(CalendarTheme::resolve_hex(None, fallback), fallback);
        assert_eq!(CalendarTheme::resolve_hex(Some("#zz"), fallback), fallback);
    }
}
