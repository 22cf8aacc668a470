//! Lighting resources for the renderer.

use wgpu::util::DeviceExt;

use crate::config::LightingConfig;
use crate::light::SceneLights;
use crate::pipeline::create_uniform_bind_group;
use crate::sub_renderers::BoxRenderer;

/// Manages the light uniform and its bind group.
pub struct LightingSystem {
    lights: SceneLights,
    encode_srgb: bool,
    light_buffer: wgpu::Buffer,
    light_bind_group: wgpu::BindGroup,
}

impl LightingSystem {
    /// Create a new lighting system.
    ///
    /// `encode_srgb` is true when the render target does not encode sRGB
    /// itself, so the shader must.
    pub fn new(
        device: &wgpu::Device,
        box_renderer: &BoxRenderer,
        config: &LightingConfig,
        encode_srgb: bool,
    ) -> Self {
        let lights = SceneLights::from_config(config);
        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Buffer"),
            contents: bytemuck::cast_slice(&[lights.uniform(encode_srgb)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let light_bind_group = create_uniform_bind_group(
            device,
            box_renderer.light_bind_group_layout(),
            &light_buffer,
            "Light",
        );

        Self {
            lights,
            encode_srgb,
            light_buffer,
            light_bind_group,
        }
    }

    /// Current lights.
    pub fn lights(&self) -> &SceneLights {
        &self.lights
    }

    /// Get the light bind group.
    pub fn light_bind_group(&self) -> &wgpu::BindGroup {
        &self.light_bind_group
    }

    /// Apply lighting configuration.
    pub fn apply_lighting_config(&mut self, config: &LightingConfig) {
        self.lights = SceneLights::from_config(config);
    }

    /// Upload the light uniform.
    pub fn update(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.light_buffer,
            0,
            bytemuck::cast_slice(&[self.lights.uniform(self.encode_srgb)]),
        );
    }
}
