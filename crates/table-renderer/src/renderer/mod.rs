//! Main renderer.
//!
//! The renderer is composed of a few specialized components:
//! - [`CameraController`]: Camera and its uniform buffer
//! - [`LightingSystem`]: Ambient and point light uniform
//! - [`TableMeshes`]: GPU boxes for the table top and legs

mod camera_controller;
mod gpu_resources;
mod lighting_system;
mod render_pass;
mod table_meshes;

pub use camera_controller::CameraController;
pub use lighting_system::LightingSystem;
pub use table_meshes::TableMeshes;

use table_core::TableGeometry;

use crate::camera::Camera;
use crate::config::{RendererConfig, ViewportConfig};
use crate::constants::viewport::{CLEAR_COLOR, DEPTH_FORMAT, SAMPLE_COUNT};
use crate::light::SceneLights;
use crate::sub_renderers::BoxRenderer;

use render_pass::{MainPassParams, render_main_pass};

/// Main renderer for the configurator viewport.
pub struct Renderer {
    camera_controller: CameraController,
    lighting_system: LightingSystem,
    table: TableMeshes,

    // Depth/MSAA resources
    #[allow(dead_code)] // Held for GPU resource lifetime
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    #[allow(dead_code)] // Held for GPU resource lifetime
    msaa_texture: Option<wgpu::Texture>,
    msaa_view: Option<wgpu::TextureView>,

    box_renderer: BoxRenderer,

    clear_color: wgpu::Color,
    sample_count: u32,
    format: wgpu::TextureFormat,
}

impl Renderer {
    /// Creates a new renderer with the specified device and configuration.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        config: &RendererConfig,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let sample_count = sanitize_sample_count(config.viewport.msaa_sample_count);

        tracing::info!(
            ?format,
            width,
            height,
            sample_count,
            "Creating renderer"
        );

        let camera_controller = CameraController::new(device, width, height, &config.camera);

        let (depth_texture, depth_view) =
            gpu_resources::create_depth_texture(device, DEPTH_FORMAT, width, height, sample_count);
        let (msaa_texture, msaa_view) =
            match gpu_resources::create_msaa_texture(device, format, width, height, sample_count) {
                Some((tex, view)) => (Some(tex), Some(view)),
                None => (None, None),
            };

        let box_renderer = BoxRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            sample_count,
            camera_controller.bind_group_layout(),
            camera_controller.buffer(),
        );

        // Lighting needs the box renderer's bind group layout
        let lighting_system =
            LightingSystem::new(device, &box_renderer, &config.lighting, !format.is_srgb());

        let mut renderer = Self {
            camera_controller,
            lighting_system,
            table: TableMeshes::new(),
            depth_texture,
            depth_view,
            msaa_texture,
            msaa_view,
            box_renderer,
            clear_color: CLEAR_COLOR,
            sample_count,
            format,
        };
        renderer.set_viewport_config(&config.viewport);
        renderer
    }

    // ========== Camera accessors ==========

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        self.camera_controller.camera()
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.camera_controller.camera_mut()
    }

    // ========== Light accessors ==========

    /// Get the current lights.
    pub fn lights(&self) -> &SceneLights {
        self.lighting_system.lights()
    }

    // ========== Configuration ==========

    /// Apply a renderer configuration.
    ///
    /// The MSAA sample count is fixed at creation; a changed value takes
    /// effect on the next start.
    pub fn apply_config(&mut self, config: &RendererConfig) {
        self.set_viewport_config(&config.viewport);
        self.lighting_system.apply_lighting_config(&config.lighting);
        self.camera_mut().apply_config(&config.camera);
    }

    fn set_viewport_config(&mut self, config: &ViewportConfig) {
        let [r, g, b, a] = config.background_color;
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
    }

    /// Resizes the renderer's textures for a new viewport size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera_controller.update_aspect(width, height);

        let (depth_texture, depth_view) = gpu_resources::create_depth_texture(
            device,
            DEPTH_FORMAT,
            width,
            height,
            self.sample_count,
        );
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        let msaa_result =
            gpu_resources::create_msaa_texture(device, self.format, width, height, self.sample_count);
        let (msaa_texture, msaa_view) = match msaa_result {
            Some((tex, view)) => (Some(tex), Some(view)),
            None => (None, None),
        };
        self.msaa_texture = msaa_texture;
        self.msaa_view = msaa_view;
    }

    /// Returns the texture format used by the renderer.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    // ========== Table ==========

    /// Upload the table geometry.
    pub fn set_table(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        geometry: &TableGeometry,
    ) {
        self.table.sync(device, queue, &self.box_renderer, geometry);
    }

    /// Renders the scene to the given texture view.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.camera_controller.update(queue);
        self.lighting_system.update(queue);

        render_main_pass(
            encoder,
            view,
            &MainPassParams {
                lighting: &self.lighting_system,
                table: &self.table,
                box_renderer: &self.box_renderer,
                depth_view: &self.depth_view,
                msaa_view: self.msaa_view.as_ref(),
                clear_color: self.clear_color,
            },
        );
    }
}

/// Sample counts 1 and 4 are supported for every renderable format.
fn sanitize_sample_count(requested: u32) -> u32 {
    match requested {
        0 | 1 => 1,
        4 => 4,
        other => {
            tracing::warn!(
                "Unsupported MSAA sample count {}, using {}",
                other,
                SAMPLE_COUNT
            );
            SAMPLE_COUNT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_sample_count() {
        assert_eq!(sanitize_sample_count(0), 1);
        assert_eq!(sanitize_sample_count(1), 1);
        assert_eq!(sanitize_sample_count(4), 4);
        assert_eq!(sanitize_sample_count(8), SAMPLE_COUNT);
    }
}
