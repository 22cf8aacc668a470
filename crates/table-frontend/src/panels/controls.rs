//! Table control panel: size sliders and the color picker

use table_core::{TableColor, TableParameters, TableStore, THICKNESS_RANGE, WIDTH_RANGE};

use crate::state::SharedTableStore;
use crate::theme::{self, palette};

/// Offset of the panel from the top-left corner of the viewport
const PANEL_MARGIN: f32 = 12.0;
/// Swatch diameter
const SWATCH_SIZE: f32 = 20.0;
const SWATCH_GAP: f32 = 6.0;
/// Swatches per row
const SWATCH_COLUMNS: usize = 5;

/// Whether the swatch panel is open
///
/// Purely presentational; it is not part of [`TableParameters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPanelToggle {
    open: bool,
}

impl ColorPanelToggle {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// A store mutation requested by the control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEdit {
    Width(f32),
    Thickness(f32),
    Color(TableColor),
}

impl ControlEdit {
    /// Forward the edit to the matching store setter
    pub fn apply(self, store: &mut TableStore) {
        match self {
            ControlEdit::Width(width) => store.set_width(width),
            ControlEdit::Thickness(thickness) => store.set_thickness(thickness),
            ControlEdit::Color(color) => store.set_color(color),
        }
    }
}

/// Floating panel with the table controls
#[derive(Debug, Default)]
pub struct ControlPanel {
    colors: ColorPanelToggle,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_panel(&self) -> ColorPanelToggle {
        self.colors
    }

    /// Draw the panel and apply any edits to the store
    pub fn show(&mut self, ctx: &egui::Context, store: &SharedTableStore, is_dark: bool) {
        let params = store.lock().snapshot();
        let mut edits = Vec::new();

        egui::Window::new("Table Controls")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::LEFT_TOP, [PANEL_MARGIN, PANEL_MARGIN])
            .frame(theme::overlay_frame(is_dark).inner_margin(12.0))
            .show(ctx, |ui| self.contents(ui, &params, &mut edits));

        if edits.is_empty() {
            return;
        }
        let mut store = store.lock();
        for edit in edits {
            tracing::trace!(?edit, "Control edit");
            edit.apply(&mut store);
        }
    }

    fn contents(&mut self, ui: &mut egui::Ui, params: &TableParameters, edits: &mut Vec<ControlEdit>) {
        ui.label("Table Width:");
        let mut width = params.width;
        if ui
            .add(
                egui::Slider::new(&mut width, WIDTH_RANGE.as_range())
                    .step_by(WIDTH_RANGE.step as f64)
                    .clamping(egui::SliderClamping::Never),
            )
            .changed()
        {
            edits.push(ControlEdit::Width(WIDTH_RANGE.snap(width)));
        }

        ui.add_space(4.0);
        ui.label("Table Height (Thickness):");
        let mut thickness = params.thickness;
        if ui
            .add(
                egui::Slider::new(&mut thickness, THICKNESS_RANGE.as_range())
                    .step_by(THICKNESS_RANGE.step as f64)
                    .clamping(egui::SliderClamping::Never),
            )
            .changed()
        {
            edits.push(ControlEdit::Thickness(THICKNESS_RANGE.snap(thickness)));
        }

        ui.add_space(8.0);
        let button = egui::Button::new(
            egui::RichText::new("Change Table Color").color(palette::COLOR_BUTTON_TEXT),
        )
        .fill(palette::COLOR_BUTTON_FILL)
        .corner_radius(15.0)
        .min_size(egui::vec2(0.0, 28.0));
        if ui.add(button).clicked() {
            self.colors.toggle();
        }

        if self.colors.is_open() {
            ui.add_space(6.0);
            if let Some(color) = swatch_panel(ui, params.color) {
                edits.push(ControlEdit::Color(color));
            }
        }
    }
}

/// Black panel of round swatches; returns the clicked color
fn swatch_panel(ui: &mut egui::Ui, current: TableColor) -> Option<TableColor> {
    let mut picked = None;
    egui::Frame::new()
        .fill(palette::SWATCH_PANEL_BG)
        .corner_radius(10.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(SWATCH_GAP, SWATCH_GAP);
            for row in TableColor::ALL.chunks(SWATCH_COLUMNS) {
                ui.horizontal(|ui| {
                    for &color in row {
                        if swatch(ui, color, color == current).clicked() {
                            picked = Some(color);
                        }
                    }
                });
            }
        });
    picked
}

fn swatch(ui: &mut egui::Ui, color: TableColor, selected: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let radius = SWATCH_SIZE * 0.5;
        painter.circle_filled(rect.center(), radius, palette::srgb(color.rgb()));
        if selected || response.hovered() {
            painter.circle_stroke(
                rect.center(),
                radius + 1.5,
                egui::Stroke::new(1.5, palette::SWATCH_SELECTED),
            );
        }
    }

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(color.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_shared_store;

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut toggle = ColorPanelToggle::default();
        assert!(!toggle.is_open());
        toggle.toggle();
        assert!(toggle.is_open());
        toggle.toggle();
        assert!(!toggle.is_open());
    }

    #[test]
    fn test_edits_reach_matching_setter() {
        let mut store = TableStore::new(TableParameters::default());
        ControlEdit::Width(3.2).apply(&mut store);
        ControlEdit::Thickness(0.3).apply(&mut store);
        ControlEdit::Color(TableColor::DarkRed).apply(&mut store);

        let params = store.snapshot();
        assert_eq!(params.width, 3.2);
        assert_eq!(params.thickness, 0.3);
        assert_eq!(params.color, TableColor::DarkRed);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_showing_panel_leaves_store_untouched() {
        let store = create_shared_store(TableParameters::default());
        let mut panel = ControlPanel::new();
        let ctx = egui::Context::default();

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                panel.show(ctx, &store, true);
            });
        }

        assert_eq!(store.lock().revision(), 0);
        assert_eq!(store.lock().snapshot(), TableParameters::default());
        assert!(!panel.color_panel().is_open());
    }

    #[test]
    fn test_toggle_does_not_notify_store() {
        let store = create_shared_store(TableParameters::default());
        let mut panel = ControlPanel::new();
        panel.colors.toggle();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            panel.show(ctx, &store, false);
        });

        assert!(panel.color_panel().is_open());
        assert_eq!(store.lock().revision(), 0);
    }
}
