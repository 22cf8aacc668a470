//! Renderer constants

/// Viewport defaults
pub mod viewport {
    /// Depth buffer format
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// MSAA sample count used when the configuration asks for an unsupported value
    pub const SAMPLE_COUNT: u32 = 4;

    /// Clear color before a configuration is applied
    pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
        r: 0.15,
        g: 0.15,
        b: 0.18,
        a: 1.0,
    };

    /// Initial render target size
    pub const INITIAL_SIZE: (u32, u32) = (800, 600);
}
