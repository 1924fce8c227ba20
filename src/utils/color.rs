//! Colour helpers for highlight opacity and text contrast.

use egui::Color32;

/// Alpha added for every extra highlight on the same day
pub const ALPHA_STEP: u8 = 70;

/// Above this alpha the next step saturates to fully opaque
pub const ALPHA_SATURATION: u8 = 185;

/// Below this alpha the highlight is too faint to drive the text colour
pub const LOW_ALPHA: u8 = 80;

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Perceived luminance in 0.0..=1.0
pub fn luma(color: Color32) -> f32 {
    (0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32) / 255.0
}

/// Alpha after one more highlight on top of `current`.
pub fn step_alpha(current: u8) -> u8 {
    if current > ALPHA_SATURATION {
        u8::MAX
    } else {
        current + ALPHA_STEP
    }
}

/// Alpha after `steps` highlights on top of `current`
pub fn stepped_alpha(current: u8, steps: u32) -> u8 {
    (0..steps).fold(current, |alpha, _| step_alpha(alpha))
}

/// Text colour readable on `background` drawn at `alpha`.
///
/// Faint backgrounds keep the regular `on_surface` text colour; otherwise
/// bright backgrounds get black text and dark ones white text.
pub fn best_contrast(background: Color32, alpha: u8, on_surface: Color32) -> Color32 {
    if alpha < LOW_ALPHA {
        on_surface
    } else if luma(background) > 0.5 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
