//! Menu bar rendering

use crate::config::{SharedConfig, UiTheme};

/// Actions triggered from the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ResetCamera,
    FitTable,
    SetTheme(UiTheme),
    ShowAxesIndicator(bool),
    SaveSettings,
    ResetSettings,
    ResetTable,
}

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(ctx: &egui::Context, config: &SharedConfig) -> Option<MenuAction> {
    let mut menu_action = None;
    let ui_config = config.read().config().ui.clone();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    menu_action = Some(MenuAction::ResetCamera);
                    ui.close();
                }
                if ui.button("Fit Table").clicked() {
                    menu_action = Some(MenuAction::FitTable);
                    ui.close();
                }

                ui.separator();
                let mut theme = ui_config.theme;
                let dark = ui.radio_value(&mut theme, UiTheme::Dark, "Dark").clicked();
                let light = ui.radio_value(&mut theme, UiTheme::Light, "Light").clicked();
                if dark || light {
                    menu_action = Some(MenuAction::SetTheme(theme));
                    ui.close();
                }

                let mut show_axes = ui_config.show_axes_indicator;
                if ui.checkbox(&mut show_axes, "Axes Indicator").changed() {
                    menu_action = Some(MenuAction::ShowAxesIndicator(show_axes));
                }

                ui.separator();
                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("Save Settings").clicked() {
                    menu_action = Some(MenuAction::SaveSettings);
                    ui.close();
                }
                if ui.button("Reset Settings").clicked() {
                    menu_action = Some(MenuAction::ResetSettings);
                    ui.close();
                }
            });

            ui.menu_button("Table", |ui| {
                if ui.button("Reset Table").clicked() {
                    menu_action = Some(MenuAction::ResetTable);
                    ui.close();
                }
            });
        });
    });

    menu_action
}
