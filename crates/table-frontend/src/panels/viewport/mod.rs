//! 3D Viewport panel

mod axes_indicator;

pub use axes_indicator::{project_axis, render_axes_indicator};

use crate::config::SharedConfig;
use crate::state::SharedViewportState;

/// Scroll points to zoom units
const SCROLL_ZOOM_SCALE: f32 = 0.01;

/// 3D viewport panel
#[derive(Default)]
pub struct ViewportPanel;

impl ViewportPanel {
    pub fn new() -> Self {
        Self
    }

    /// Fallback when no render context
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "3D Viewport\n(WebGPU not available)",
            egui::FontId::proportional(16.0),
            egui::Color32::GRAY,
        );
    }

    /// Render the table and handle camera input
    pub fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
        config: &SharedConfig,
    ) {
        let available_size = ui.available_size();
        let width = available_size.x as u32;
        let height = available_size.y as u32;

        if width == 0 || height == 0 {
            return;
        }

        // Ensure texture, upload pending table geometry and render
        let texture_id = {
            let mut state = viewport_state.lock();
            let mut egui_renderer = render_state.renderer.write();
            let tex_id = state.ensure_texture(width, height, &mut egui_renderer);
            state.render();
            tex_id
        };

        // Display the rendered texture
        let response = ui.add(
            egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                [available_size.x, available_size.y],
            ))
            .sense(egui::Sense::click_and_drag()),
        );

        let (orbit_sensitivity, show_axes) = {
            let config = config.read();
            let config = config.config();
            (
                config.renderer.camera.orbit_sensitivity,
                config.ui.show_axes_indicator,
            )
        };

        let mut vp_state = viewport_state.lock();
        let mut camera_moved = false;

        let shift = ui.input(|i| i.modifiers.shift);
        if response.dragged_by(egui::PointerButton::Primary) && !shift {
            // Orbit
            let delta = response.drag_delta();
            vp_state
                .renderer
                .camera_mut()
                .orbit(-delta.x * orbit_sensitivity, delta.y * orbit_sensitivity);
            camera_moved = true;
        } else if response.dragged_by(egui::PointerButton::Secondary)
            || (response.dragged_by(egui::PointerButton::Primary) && shift)
        {
            // Pan
            let delta = response.drag_delta();
            vp_state.renderer.camera_mut().pan(delta.x, delta.y);
            camera_moved = true;
        }

        // Zoom with scroll
        if response.hovered() {
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 {
                vp_state
                    .renderer
                    .camera_mut()
                    .zoom(scroll_delta * SCROLL_ZOOM_SCALE);
                camera_moved = true;
            }
        }

        // Context menu
        response.context_menu(|ui| {
            if ui.button("Reset View").clicked() {
                vp_state.reset_camera();
                camera_moved = true;
                ui.close();
            }
            if ui.button("Fit Table").clicked() {
                vp_state.fit_table();
                camera_moved = true;
                ui.close();
            }
        });

        let yaw = vp_state.renderer.camera().yaw;
        let pitch = vp_state.renderer.camera().pitch;
        drop(vp_state);

        // The texture shown this frame predates the camera change
        if camera_moved {
            ui.ctx().request_repaint();
        }

        if show_axes {
            render_axes_indicator(ui, response.rect, yaw, pitch);
        }
    }
}
