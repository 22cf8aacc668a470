//! Sub-renderers for the configurator viewport.
//!
//! - [`mesh::BoxRenderer`]: lit rectangular prisms (table top and legs)

pub mod mesh;

pub use mesh::{BoxData, BoxInstance, BoxRenderer};
