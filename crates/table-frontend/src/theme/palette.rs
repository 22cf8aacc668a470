//! Color palette for the UI theme

use egui::Color32;

/// Colors a theme is built from
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Viewport and text field background
    pub bg_base: Color32,
    /// Panel background
    pub bg_panel: Color32,
    /// Windows and popups
    pub bg_elevated: Color32,
    /// Inactive widgets
    pub bg_input: Color32,
    pub bg_hover: Color32,
    pub border_subtle: Color32,
    pub border_normal: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    /// Selection background
    pub accent_subtle: Color32,
    /// Alpha of overlay window fills
    pub overlay_alpha: u8,
}

pub const DARK: ThemeColors = ThemeColors {
    bg_base: Color32::from_rgb(24, 24, 28),
    bg_panel: Color32::from_rgb(30, 30, 35),
    bg_elevated: Color32::from_rgb(38, 38, 44),
    bg_input: Color32::from_rgb(45, 45, 52),
    bg_hover: Color32::from_rgb(55, 55, 65),
    border_subtle: Color32::from_rgb(50, 50, 58),
    border_normal: Color32::from_rgb(65, 65, 75),
    text_primary: Color32::from_rgb(230, 230, 235),
    text_secondary: Color32::from_rgb(160, 160, 170),
    accent: Color32::from_rgb(66, 150, 250),
    accent_subtle: Color32::from_rgba_premultiplied(66, 150, 250, 30),
    overlay_alpha: 220,
};

pub const LIGHT: ThemeColors = ThemeColors {
    bg_base: Color32::from_rgb(245, 245, 248),
    bg_panel: Color32::from_rgb(250, 250, 252),
    bg_elevated: Color32::from_rgb(255, 255, 255),
    bg_input: Color32::from_rgb(240, 240, 244),
    bg_hover: Color32::from_rgb(230, 230, 236),
    border_subtle: Color32::from_rgb(220, 220, 226),
    border_normal: Color32::from_rgb(200, 200, 210),
    text_primary: Color32::from_rgb(30, 30, 35),
    text_secondary: Color32::from_rgb(90, 90, 100),
    accent: Color32::from_rgb(45, 120, 220),
    accent_subtle: Color32::from_rgba_premultiplied(45, 120, 220, 40),
    overlay_alpha: 240,
};

// =============================================================================
// Control panel
// =============================================================================

/// "Change Table Color" button fill (#007BFF)
pub const COLOR_BUTTON_FILL: Color32 = Color32::from_rgb(0, 123, 255);
/// "Change Table Color" button label
pub const COLOR_BUTTON_TEXT: Color32 = Color32::WHITE;
/// Swatch panel background
pub const SWATCH_PANEL_BG: Color32 = Color32::BLACK;
/// Ring around the swatch matching the current color
pub const SWATCH_SELECTED: Color32 = Color32::WHITE;

// =============================================================================
// Axis colors (XYZ = RGB)
// =============================================================================

/// X axis color (red)
pub const AXIS_X: Color32 = Color32::from_rgb(255, 75, 75);
/// Y axis color (green)
pub const AXIS_Y: Color32 = Color32::from_rgb(75, 255, 100);
/// Z axis color (blue)
pub const AXIS_Z: Color32 = Color32::from_rgb(75, 150, 255);

/// Convert an sRGB byte triple to an egui color
pub fn srgb(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Create a semi-transparent version of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
