//! Box renderer
//!
//! Every box is drawn from one shared unit cube; size and position come from
//! a per-box model matrix, so parameter changes only rewrite small uniforms.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use table_core::BoxPrimitive;

use crate::pipeline::{create_uniform_bind_group, create_uniform_bind_group_layout};
use crate::vertex::MeshVertex;

/// Per-box uniform: model transform and linear color
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, PartialEq)]
pub struct BoxInstance {
    /// Model transformation matrix.
    pub model: [[f32; 4]; 4],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

impl Default for BoxInstance {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [0.7, 0.7, 0.7, 1.0],
        }
    }
}

impl BoxInstance {
    /// Instance that maps the unit cube onto `primitive`
    pub fn from_primitive(primitive: &BoxPrimitive) -> Self {
        let model = Mat4::from_translation(primitive.center) * Mat4::from_scale(primitive.size);
        Self {
            model: model.to_cols_array_2d(),
            color: primitive.linear_color(),
        }
    }

    /// Model matrix
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

/// GPU data for one box
pub struct BoxData {
    /// Current uniform contents.
    pub instance: BoxInstance,
    /// GPU buffer for the uniform.
    pub instance_buffer: wgpu::Buffer,
    /// Bind group exposing the uniform at group 1.
    pub bind_group: wgpu::BindGroup,
}

impl BoxData {
    /// Write a new instance if it differs from the current one
    pub fn update(&mut self, queue: &wgpu::Queue, instance: BoxInstance) {
        if self.instance == instance {
            return;
        }
        self.instance = instance;
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[self.instance]),
        );
    }
}

/// Renderer for lit boxes
pub struct BoxRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
    instance_bind_group_layout: wgpu::BindGroupLayout,
    light_bind_group_layout: wgpu::BindGroupLayout,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl BoxRenderer {
    /// Creates the box pipeline and the shared unit cube buffers.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Box Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/mesh.wgsl").into()),
        });

        let camera_bind_group =
            create_uniform_bind_group(device, camera_bind_group_layout, camera_buffer, "Box Camera");
        let instance_bind_group_layout = create_uniform_bind_group_layout(
            device,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            "Box Instance",
        );
        let light_bind_group_layout =
            create_uniform_bind_group_layout(device, wgpu::ShaderStages::FRAGMENT, "Light");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Box Pipeline Layout"),
            bind_group_layouts: &[
                camera_bind_group_layout,
                &instance_bind_group_layout,
                &light_bind_group_layout,
            ],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Box Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Negative sizes mirror the cube; draw both sides.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let unit_cube = BoxPrimitive {
            size: Vec3::ONE,
            center: Vec3::ZERO,
            color: [255, 255, 255],
        }
        .mesh();
        let vertices = MeshVertex::interleave(&unit_cube.positions, &unit_cube.normals);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Index Buffer"),
            contents: bytemuck::cast_slice(&unit_cube.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            camera_bind_group,
            instance_bind_group_layout,
            light_bind_group_layout,
            vertex_buffer,
            index_buffer,
            index_count: unit_cube.indices.len() as u32,
        }
    }

    /// Get the light bind group layout
    pub fn light_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.light_bind_group_layout
    }

    /// Allocate GPU data for one box
    pub fn create_box(&self, device: &wgpu::Device, instance: BoxInstance) -> BoxData {
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Instance Buffer"),
            contents: bytemuck::cast_slice(&[instance]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = create_uniform_bind_group(
            device,
            &self.instance_bind_group_layout,
            &instance_buffer,
            "Box Instance",
        );
        BoxData {
            instance,
            instance_buffer,
            bind_group,
        }
    }

    /// Draw boxes with lighting
    pub fn render<'a>(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        boxes: impl IntoIterator<Item = &'a BoxData>,
        light_bind_group: &wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_bind_group(2, light_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        for data in boxes {
            render_pass.set_bind_group(1, &data.bind_group, &[]);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use table_core::{TableColor, TableGeometry, TableParameters};

    #[test]
    fn test_instance_maps_unit_cube_onto_primitive() {
        let geometry = TableGeometry::from_parameters(&TableParameters {
            width: 3.0,
            thickness: 0.2,
            color: TableColor::Green,
        });
        for primitive in geometry.boxes() {
            let model = BoxInstance::from_primitive(primitive).model_matrix();
            let bounds = primitive.bounds();
            let min = model.transform_point3(Vec3::splat(-0.5));
            let max = model.transform_point3(Vec3::splat(0.5));
            assert_abs_diff_eq!(min.distance(bounds.min), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(max.distance(bounds.max), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_instance_color_is_linear() {
        let geometry = TableGeometry::from_parameters(&TableParameters {
            color: TableColor::White,
            ..TableParameters::default()
        });
        let top = BoxInstance::from_primitive(&geometry.top);
        assert_eq!(top.color, TableColor::White.to_linear_rgba());
    }

    #[test]
    fn test_instance_size_is_uniform_friendly() {
        assert_eq!(std::mem::size_of::<BoxInstance>(), 80);
    }
}
