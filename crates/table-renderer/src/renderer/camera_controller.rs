//! Camera and its uniform buffer.

use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::config::CameraConfig;
use crate::pipeline::create_uniform_bind_group_layout;

/// Owns the orbit camera and keeps its GPU uniform in sync.
pub struct CameraController {
    camera: Camera,
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraController {
    /// Create the camera and its uniform buffer.
    pub fn new(device: &wgpu::Device, width: u32, height: u32, config: &CameraConfig) -> Self {
        let camera = Camera::with_config(aspect_ratio(width, height), config);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group_layout =
            create_uniform_bind_group_layout(device, wgpu::ShaderStages::VERTEX_FRAGMENT, "Camera");

        Self {
            camera,
            buffer,
            bind_group_layout,
        }
    }

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Camera uniform buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Camera bind group layout.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Update the aspect ratio after a resize.
    pub fn update_aspect(&mut self, width: u32, height: u32) {
        self.camera.update_aspect(aspect_ratio(width, height));
    }

    /// Upload the current camera state.
    pub fn update(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.camera.uniform()]));
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
