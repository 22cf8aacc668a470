//! Table geometry derivation
//!
//! Geometry is a pure function of [`TableParameters`] and is rebuilt from a
//! snapshot whenever the store changes. Nothing here is cached.
//!
//! Coordinates are y-up: the top sits at `y = 0.5`, legs hang below it and
//! are placed at the four horizontal corners.

use glam::Vec3;

use crate::color::{TableColor, srgb_to_linear_rgba};
use crate::constants::{
    LEG_BASE_Y, LEG_COLOR, LEG_COUNT, LEG_EDGE_INSET, LEG_SIZE, LEG_Z_OFFSET, TOP_CENTER_Y,
    TOP_DEPTH,
};
use crate::parameters::TableParameters;

/// Axis-aligned rectangular prism
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPrimitive {
    /// Full extent along x, y, z
    pub size: Vec3,
    /// Centre position
    pub center: Vec3,
    /// Material color (sRGB)
    pub color: [u8; 3],
}

/// Triangle mesh with one normal per vertex
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Centre point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the enclosing sphere
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }

    fn union(self, other: Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Face outward normals paired with the two in-plane axes (u, v), chosen so
/// that u x v points along the normal.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

impl BoxPrimitive {
    /// Linear RGBA color for shading
    pub fn linear_color(&self) -> [f32; 4] {
        srgb_to_linear_rgba(self.color)
    }

    /// Bounding box in world space
    pub fn bounds(&self) -> Aabb {
        let half = self.size * 0.5;
        Aabb {
            min: self.center - half,
            max: self.center + half,
        }
    }

    /// Build a mesh in world space: 4 vertices per face, 2 triangles per face
    pub fn mesh(&self) -> MeshData {
        let half = self.size * 0.5;
        let mut mesh = MeshData {
            positions: Vec::with_capacity(24),
            normals: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };

        for (normal, u, v) in FACES {
            let base = mesh.positions.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let corner = normal + u * su + v * sv;
                mesh.positions.push((self.center + corner * half).to_array());
                mesh.normals.push(normal.to_array());
            }
            mesh.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        mesh
    }
}

/// Leg centres for a table of the given width and top thickness
///
/// Order: (-x, -z), (+x, -z), (-x, +z), (+x, +z).
pub fn leg_placement(width: f32, thickness: f32) -> [Vec3; LEG_COUNT] {
    let x = width / 2.0 - LEG_EDGE_INSET;
    let y = LEG_BASE_Y - thickness / 2.0;
    let z = LEG_Z_OFFSET;
    [
        Vec3::new(-x, y, -z),
        Vec3::new(x, y, -z),
        Vec3::new(-x, y, z),
        Vec3::new(x, y, z),
    ]
}

/// Complete table: one top and four legs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    pub top: BoxPrimitive,
    pub legs: [BoxPrimitive; LEG_COUNT],
}

impl TableGeometry {
    /// Derive the geometry from a parameter snapshot
    pub fn from_parameters(params: &TableParameters) -> Self {
        let top = BoxPrimitive {
            size: Vec3::new(params.width, params.thickness, TOP_DEPTH),
            center: Vec3::new(0.0, TOP_CENTER_Y, 0.0),
            color: params.color.rgb(),
        };
        let legs = leg_placement(params.width, params.thickness).map(|center| BoxPrimitive {
            size: Vec3::from_array(LEG_SIZE),
            center,
            color: LEG_COLOR,
        });
        Self { top, legs }
    }

    /// Top followed by the legs
    pub fn boxes(&self) -> impl Iterator<Item = &BoxPrimitive> {
        std::iter::once(&self.top).chain(self.legs.iter())
    }

    /// Bounds of the whole table
    pub fn bounds(&self) -> Aabb {
        self.legs
            .iter()
            .fold(self.top.bounds(), |acc, leg| acc.union(leg.bounds()))
    }

    /// Whether the top currently shows `color`
    pub fn top_color_is(&self, color: TableColor) -> bool {
        self.top.color == color.rgb()
    }
}

impl From<&TableParameters> for TableGeometry {
    fn from(params: &TableParameters) -> Self {
        Self::from_parameters(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{THICKNESS_RANGE, WIDTH_RANGE};
    use crate::store::TableStore;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    fn params(width: f32, thickness: f32) -> TableParameters {
        TableParameters {
            width,
            thickness,
            ..TableParameters::default()
        }
    }

    fn slider_grid() -> impl Iterator<Item = (f32, f32)> {
        WIDTH_RANGE
            .values()
            .flat_map(|w| THICKNESS_RANGE.values().map(move |t| (w, t)))
    }

    #[test]
    fn test_leg_offsets_follow_formula() {
        for (width, thickness) in slider_grid() {
            let legs = leg_placement(width, thickness);
            for leg in legs {
                assert_eq!(leg.x.abs(), width / 2.0 - 0.05);
                assert_eq!(leg.y, 0.25 - thickness / 2.0);
                assert_eq!(leg.z.abs(), 0.45);
            }
        }
    }

    #[test]
    fn test_four_distinct_corners() {
        for (width, thickness) in slider_grid() {
            let legs = leg_placement(width, thickness);
            let corners: HashSet<(bool, bool)> =
                legs.iter().map(|l| (l.x > 0.0, l.z > 0.0)).collect();
            assert_eq!(corners.len(), 4);
            assert_eq!(legs.iter().filter(|l| l.z == 0.45).count(), 2);
            assert_eq!(legs.iter().filter(|l| l.z == -0.45).count(), 2);
        }
    }

    #[test]
    fn test_top_dimensions_and_position() {
        for (width, thickness) in slider_grid() {
            let geometry = TableGeometry::from_parameters(&params(width, thickness));
            assert_eq!(geometry.top.size, Vec3::new(width, thickness, 1.0));
            assert_eq!(geometry.top.center, Vec3::new(0.0, 0.5, 0.0));
            for leg in geometry.legs {
                assert_eq!(leg.size, Vec3::new(0.1, 1.0, 0.1));
            }
        }
    }

    #[test]
    fn test_color_changes_leave_geometry_alone() {
        let base = TableGeometry::from_parameters(&TableParameters::default());
        for color in TableColor::ALL {
            let recolored = TableGeometry::from_parameters(&TableParameters {
                color,
                ..TableParameters::default()
            });
            assert_eq!(recolored.top.size, base.top.size);
            assert_eq!(recolored.top.center, base.top.center);
            assert_eq!(recolored.legs, base.legs);
            assert!(recolored.top_color_is(color));
            assert!(recolored.legs.iter().all(|l| l.color == LEG_COLOR));
        }
    }

    #[test]
    fn test_leg_color_is_outside_palette() {
        assert!(TableColor::ALL.iter().all(|c| c.rgb() != LEG_COLOR));
    }

    #[test]
    fn test_set_width_scenario() {
        let mut store = TableStore::default();
        store.set_width(4.0);
        let geometry = TableGeometry::from(&store.snapshot());

        assert_eq!(geometry.top.size, Vec3::new(4.0, 0.1, 1.0));
        for leg in geometry.legs {
            assert_abs_diff_eq!(leg.center.x.abs(), 1.95, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_set_thickness_scenario() {
        let mut store = TableStore::default();
        store.set_thickness(0.3);
        let geometry = TableGeometry::from(&store.snapshot());

        assert_eq!(geometry.top.size.y, 0.3);
        for leg in geometry.legs {
            assert_abs_diff_eq!(leg.center.y, 0.1, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_set_color_scenario() {
        let mut store = TableStore::default();
        let before = TableGeometry::from(&store.snapshot());
        store.set_color(TableColor::RoyalBlue);
        let after = TableGeometry::from(&store.snapshot());

        assert_eq!(after.top.color, [0x41, 0x69, 0xE1]);
        assert_eq!(after.legs, before.legs);
    }

    #[test]
    fn test_unvalidated_input_renders_as_given() {
        let geometry = TableGeometry::from_parameters(&params(0.0, -1.0));
        assert_eq!(geometry.top.size, Vec3::new(0.0, -1.0, 1.0));
        assert_abs_diff_eq!(geometry.legs[1].center.x, -0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(geometry.legs[0].center.y, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_box_mesh_extent_and_winding() {
        let prism = BoxPrimitive {
            size: Vec3::new(2.0, 4.0, 6.0),
            center: Vec3::new(1.0, 0.0, -1.0),
            color: LEG_COLOR,
        };
        let mesh = prism.mesh();
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(mesh.indices.len(), 36);

        let bounds = prism.bounds();
        for p in &mesh.positions {
            let p = Vec3::from_array(*p);
            assert!(p.cmpge(bounds.min - 1e-5).all() && p.cmple(bounds.max + 1e-5).all());
        }

        // Counter-clockwise triangles face along their normal.
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.positions[i as usize]));
            let n = Vec3::from(mesh.normals[tri[0] as usize]);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
    }

    #[test]
    fn test_table_bounds() {
        let geometry = TableGeometry::from_parameters(&params(3.0, 0.2));
        let bounds = geometry.bounds();
        assert_abs_diff_eq!(bounds.min.x, -1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.max.x, 1.5, epsilon = 1e-6);
        // Legs rise above the top surface: 0.25 - 0.1 + 0.5.
        assert_abs_diff_eq!(bounds.max.y, 0.65, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.min.y, -0.35, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.min.z, -0.5, epsilon = 1e-6);
        assert_eq!(geometry.boxes().count(), 5);
    }
}
