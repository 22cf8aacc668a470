//! Table Configurator Renderer
//!
//! WGPU-based 3D rendering for the table configurator.
//!
//! # Module Structure
//!
//! ```text
//! table-renderer/
//! ├── camera.rs        # Y-up orbit camera
//! ├── config.rs        # Serializable renderer settings
//! ├── light.rs         # Ambient + point light
//! ├── pipeline.rs      # Bind group helpers
//! ├── sub_renderers/   # Box renderer
//! ├── vertex.rs        # Vertex formats
//! └── renderer/        # Main Renderer
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod light;
pub mod pipeline;
pub mod renderer;
pub mod sub_renderers;
pub mod vertex;

// Re-exports for convenience
pub use camera::{Camera, CameraUniform};
pub use config::RendererConfig;
pub use light::{LightUniform, SceneLights};
pub use renderer::Renderer;
pub use sub_renderers::{BoxInstance, BoxRenderer};
pub use vertex::MeshVertex;
