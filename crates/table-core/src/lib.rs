//! Table configurator core
//!
//! Parameter model, palette, observable store and geometry derivation.
//! No GPU or UI dependencies.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod parameters;
pub mod store;

pub use color::{ParseColorError, TableColor};
pub use geometry::{Aabb, BoxPrimitive, MeshData, TableGeometry, leg_placement};
pub use parameters::{ParameterRange, TableParameters, THICKNESS_RANGE, WIDTH_RANGE};
pub use store::{SubscriptionId, TableStore};
