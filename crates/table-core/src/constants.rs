//! Global constants for table-core

/// Depth (z extent) of the table top
pub const TOP_DEPTH: f32 = 1.0;

/// Height of the table top's centre above the origin
pub const TOP_CENTER_Y: f32 = 0.5;

/// Leg box dimensions (x, y, z)
pub const LEG_SIZE: [f32; 3] = [0.1, 1.0, 0.1];

/// Distance from the top's x edge to the leg centre
pub const LEG_EDGE_INSET: f32 = 0.05;

/// Leg centre y before subtracting half the top thickness
pub const LEG_BASE_Y: f32 = 0.25;

/// Absolute z offset of every leg centre
pub const LEG_Z_OFFSET: f32 = 0.45;

/// Number of legs
pub const LEG_COUNT: usize = 4;

/// Leg color (dark brown, sRGB); independent of the selected top color
pub const LEG_COLOR: [u8; 3] = [0x5C, 0x40, 0x33];

/// Default table width
pub const DEFAULT_WIDTH: f32 = 2.0;

/// Default top thickness (matches the thickness slider's lower bound)
pub const DEFAULT_THICKNESS: f32 = 0.1;
