//! Theme module for UI styling
//!
//! Dark and light visuals are built from [`palette::ThemeColors`], so a theme
//! switch only swaps the color set.

pub mod palette;

use egui::{Color32, CornerRadius, Shadow, Stroke, Visuals};

use crate::config::{SharedConfig, UiTheme};
use palette::ThemeColors;

/// Apply the current theme to egui context
pub fn apply_theme(ctx: &egui::Context, config: &SharedConfig) {
    let theme = config.read().config().ui.theme;
    ctx.set_visuals(visuals(theme));
}

/// Build the egui visuals for `theme`
pub fn visuals(theme: UiTheme) -> Visuals {
    match theme {
        UiTheme::Dark => build_visuals(Visuals::dark(), &palette::DARK),
        UiTheme::Light => build_visuals(Visuals::light(), &palette::LIGHT),
    }
}

fn build_visuals(mut v: Visuals, c: &ThemeColors) -> Visuals {
    v.panel_fill = c.bg_panel;
    v.window_fill = c.bg_elevated;
    v.extreme_bg_color = c.bg_base;
    v.faint_bg_color = c.bg_input;

    v.selection.bg_fill = c.accent_subtle;
    v.selection.stroke = Stroke::new(1.0, c.accent);
    v.hyperlink_color = c.accent;
    v.override_text_color = Some(c.text_primary);

    let widgets = &mut v.widgets;
    widgets.noninteractive.bg_fill = c.bg_input;
    widgets.noninteractive.weak_bg_fill = c.bg_panel;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, c.border_subtle);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, c.text_secondary);

    widgets.inactive.bg_fill = c.bg_input;
    widgets.inactive.weak_bg_fill = c.bg_input;
    widgets.inactive.bg_stroke = Stroke::new(1.0, c.border_subtle);
    widgets.inactive.fg_stroke = Stroke::new(1.0, c.text_primary);

    widgets.hovered.bg_fill = c.bg_hover;
    widgets.hovered.weak_bg_fill = c.bg_hover;
    widgets.hovered.bg_stroke = Stroke::new(1.0, c.border_normal);
    widgets.hovered.fg_stroke = Stroke::new(1.5, c.text_primary);

    // Slider handles and pressed buttons
    widgets.active.bg_fill = c.accent;
    widgets.active.weak_bg_fill = c.bg_hover;
    widgets.active.bg_stroke = Stroke::new(1.0, c.accent);
    widgets.active.fg_stroke = Stroke::new(2.0, c.text_primary);

    widgets.open.bg_fill = c.bg_elevated;
    widgets.open.weak_bg_fill = c.bg_elevated;
    widgets.open.bg_stroke = Stroke::new(1.0, c.border_normal);
    widgets.open.fg_stroke = Stroke::new(1.0, c.text_primary);

    for state in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        state.corner_radius = CornerRadius::same(4);
    }

    v.window_corner_radius = CornerRadius::same(6);
    v.window_shadow = Shadow {
        offset: [0, 4],
        blur: 16,
        spread: 0,
        color: Color32::from_black_alpha(80),
    };
    v.window_stroke = Stroke::new(1.0, c.border_subtle);
    v.menu_corner_radius = CornerRadius::same(4);
    v.slider_trailing_fill = true;

    v
}

/// Create an overlay frame with standard styling
pub fn overlay_frame(is_dark: bool) -> egui::Frame {
    let colors = if is_dark { &palette::DARK } else { &palette::LIGHT };
    egui::Frame::popup(&egui::Style::default())
        .fill(palette::with_alpha(colors.bg_elevated, colors.overlay_alpha))
        .corner_radius(4.0)
        .stroke(egui::Stroke::new(1.0, colors.border_normal))
}

/// Get whether the current theme is dark
pub fn is_dark_theme(config: &SharedConfig) -> bool {
    config.read().config().ui.theme == UiTheme::Dark
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_follow_theme() {
        assert!(visuals(UiTheme::Dark).dark_mode);
        assert!(!visuals(UiTheme::Light).dark_mode);
        assert_eq!(visuals(UiTheme::Light).panel_fill, palette::LIGHT.bg_panel);
    }

    #[test]
    fn test_srgb_swatch_color() {
        let c = palette::srgb([0x8B, 0x45, 0x13]);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x8B, 0x45, 0x13, 255));
    }
}
