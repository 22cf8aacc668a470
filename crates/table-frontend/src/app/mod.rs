//! Main application module

mod menu;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{ConfigManager, SharedConfig, UiTheme, create_shared_config};
use crate::panels::{ControlPanel, ViewportPanel};
use crate::state::{
    SharedTableStore, SharedViewportState, ViewportState, connect_viewport, create_shared_store,
};
use crate::theme;

pub use menu::{MenuAction, render_menu_bar};

/// Main application
pub struct ConfiguratorApp {
    store: SharedTableStore,
    config: SharedConfig,
    viewport_state: Option<SharedViewportState>,
    control_panel: ControlPanel,
    viewport_panel: ViewportPanel,
}

impl ConfiguratorApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config(ConfigManager::load_default());
        let (initial, renderer_config) = {
            let config = config.read();
            (config.config().table.initial, config.config().renderer.clone())
        };

        let store = create_shared_store(initial);
        theme::apply_theme(&cc.egui_ctx, &config);

        let ctx = cc.egui_ctx.clone();
        let pending = connect_viewport(&store, move || ctx.request_repaint());

        // Create viewport state if WGPU is available
        let viewport_state = cc.wgpu_render_state.as_ref().map(|render_state| {
            let device = render_state.device.clone();
            let queue = render_state.queue.clone();
            let format = render_state.target_format;

            Arc::new(Mutex::new(ViewportState::new(
                device,
                queue,
                format,
                &renderer_config,
                pending,
            )))
        });
        if viewport_state.is_none() {
            tracing::warn!("WGPU render state unavailable, viewport disabled");
        }

        tracing::info!(?initial, "Table configurator ready");

        Self {
            store,
            config,
            viewport_state,
            control_panel: ControlPanel::new(),
            viewport_panel: ViewportPanel::new(),
        }
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        tracing::debug!(?action, "Menu action");
        match action {
            MenuAction::ResetCamera => {
                if let Some(viewport_state) = &self.viewport_state {
                    viewport_state.lock().reset_camera();
                }
            }
            MenuAction::FitTable => {
                if let Some(viewport_state) = &self.viewport_state {
                    viewport_state.lock().fit_table();
                }
            }
            MenuAction::SetTheme(theme) => {
                {
                    let mut config = self.config.write();
                    let config = config.config_mut();
                    config.ui.theme = theme;
                    match theme {
                        UiTheme::Dark => config.renderer.apply_dark_theme(),
                        UiTheme::Light => config.renderer.apply_light_theme(),
                    }
                }
                self.apply_config(ctx);
            }
            MenuAction::ShowAxesIndicator(show) => {
                self.config.write().config_mut().ui.show_axes_indicator = show;
            }
            MenuAction::SaveSettings => {
                let params = self.store.lock().snapshot();
                let mut config = self.config.write();
                config.config_mut().table.initial = params;
                if let Err(e) = config.save() {
                    tracing::error!("Failed to save settings: {}", e);
                }
            }
            MenuAction::ResetSettings => {
                self.config.write().reset_to_defaults();
                self.apply_config(ctx);
            }
            MenuAction::ResetTable => {
                self.store.lock().reset();
            }
        }
    }

    /// Push the current configuration to egui and the renderer
    fn apply_config(&self, ctx: &egui::Context) {
        theme::apply_theme(ctx, &self.config);
        if let Some(viewport_state) = &self.viewport_state {
            let renderer_config = self.config.read().config().renderer.clone();
            viewport_state.lock().apply_config(&renderer_config);
        }
    }
}

impl eframe::App for ConfiguratorApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Menu bar
        if let Some(menu_action) = render_menu_bar(ctx, &self.config) {
            self.handle_menu_action(ctx, menu_action);
        }

        // Controls before the viewport so edits land in this frame's render
        let is_dark = theme::is_dark_theme(&self.config);
        self.control_panel.show(ctx, &self.store, is_dark);

        let render_state = frame.wgpu_render_state();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match (render_state, &self.viewport_state) {
                (Some(render_state), Some(viewport_state)) => {
                    self.viewport_panel.ui_with_render_context(
                        ui,
                        render_state,
                        viewport_state,
                        &self.config,
                    );
                }
                _ => self.viewport_panel.ui(ui),
            });
    }
}
