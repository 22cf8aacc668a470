//! Scene lights: an ambient term and a single point light

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::config::LightingConfig;

/// Light uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    /// Point light position (w = 1)
    pub point_position: [f32; 4],
    /// Point light color premultiplied by intensity (w unused)
    pub point_color: [f32; 4],
    /// Ambient color premultiplied by intensity (w unused)
    pub ambient: [f32; 4],
    /// x = 1.0 when the shader must sRGB-encode its output
    pub output: [f32; 4],
}

/// Ambient plus point lighting
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLights {
    /// Ambient light color
    pub ambient_color: Vec3,
    /// Ambient light intensity
    pub ambient_intensity: f32,
    /// Point light position
    pub point_position: Vec3,
    /// Point light color
    pub point_color: Vec3,
    /// Point light intensity
    pub point_intensity: f32,
}

impl Default for SceneLights {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}

impl SceneLights {
    /// Build lights from configuration
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            ambient_color: Vec3::from_array(config.ambient_color),
            ambient_intensity: config.ambient_intensity,
            point_position: Vec3::from_array(config.point_position),
            point_color: Vec3::from_array(config.point_color),
            point_intensity: config.point_intensity,
        }
    }

    /// Pack into a uniform; `encode_srgb` is set when the target format is linear
    pub fn uniform(&self, encode_srgb: bool) -> LightUniform {
        LightUniform {
            point_position: self.point_position.extend(1.0).to_array(),
            point_color: (self.point_color * self.point_intensity)
                .extend(0.0)
                .to_array(),
            ambient: (self.ambient_color * self.ambient_intensity)
                .extend(0.0)
                .to_array(),
            output: [if encode_srgb { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uniform() {
        let uniform = SceneLights::default().uniform(true);
        assert_eq!(uniform.point_position, [10.0, 10.0, 10.0, 1.0]);
        assert_eq!(uniform.ambient, [0.5, 0.5, 0.5, 0.0]);
        assert_eq!(uniform.point_color, [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(uniform.output[0], 1.0);
    }

    #[test]
    fn test_uniform_size_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
    }
}
