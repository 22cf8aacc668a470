//! Renderer configuration structures
//!
//! This module provides configurable settings for the renderer that can be
//! serialized and loaded from configuration files.

use serde::{Deserialize, Serialize};

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
    /// MSAA sample count (1 = disabled, 4)
    pub msaa_sample_count: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::dark()
    }
}

impl ViewportConfig {
    /// Create dark theme viewport config
    pub fn dark() -> Self {
        Self {
            background_color: [0.15, 0.15, 0.18, 1.0],
            msaa_sample_count: 4,
        }
    }

    /// Create light theme viewport config
    pub fn light() -> Self {
        Self {
            background_color: [0.92, 0.92, 0.94, 1.0],
            msaa_sample_count: 4,
        }
    }
}

/// Lighting configuration: one ambient term plus one point light
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightingConfig {
    /// Ambient light color (RGB)
    pub ambient_color: [f32; 3],
    /// Ambient light intensity
    pub ambient_intensity: f32,
    /// Point light world position
    pub point_position: [f32; 3],
    /// Point light color (RGB)
    pub point_color: [f32; 3],
    /// Point light intensity
    pub point_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
            point_position: [10.0, 10.0, 10.0],
            point_color: [1.0, 1.0, 1.0],
            point_intensity: 1.0,
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Pan sensitivity multiplier
    pub pan_sensitivity: f32,
    /// Zoom sensitivity multiplier
    pub zoom_sensitivity: f32,
    /// Orbit sensitivity multiplier (radians per pixel)
    pub orbit_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 0.1,
            orbit_sensitivity: 0.005,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Lighting settings
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
}

impl RendererConfig {
    /// Create a new renderer configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply dark theme colors to the viewport
    pub fn apply_dark_theme(&mut self) {
        self.viewport = ViewportConfig {
            msaa_sample_count: self.viewport.msaa_sample_count,
            ..ViewportConfig::dark()
        };
    }

    /// Apply light theme colors to the viewport
    pub fn apply_light_theme(&mut self) {
        self.viewport = ViewportConfig {
            msaa_sample_count: self.viewport.msaa_sample_count,
            ..ViewportConfig::light()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lights() {
        let lighting = LightingConfig::default();
        assert_eq!(lighting.ambient_intensity, 0.5);
        assert_eq!(lighting.point_position, [10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_theme_switch_keeps_msaa() {
        let mut config = RendererConfig::new();
        config.viewport.msaa_sample_count = 1;
        config.apply_light_theme();
        assert_eq!(config.viewport.msaa_sample_count, 1);
        assert_eq!(
            config.viewport.background_color,
            ViewportConfig::light().background_color
        );
        config.apply_dark_theme();
        assert_eq!(
            config.viewport.background_color,
            ViewportConfig::dark().background_color
        );
    }
}
