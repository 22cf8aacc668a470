//! Axes indicator overlay for the viewport

use glam::Vec3;

use crate::theme::palette;

const AXIS_LENGTH: f32 = 30.0;
const CORNER_OFFSET: f32 = 50.0;

/// Screen-space direction and depth of a world axis for a Y-up orbit camera.
///
/// The returned vector uses egui's y-down convention; depth is positive when
/// the axis points away from the viewer.
pub fn project_axis(world_axis: Vec3, yaw: f32, pitch: f32) -> (egui::Vec2, f32) {
    // Eye offset from the target, matching the camera's orbit parametrisation
    let offset = Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos());
    let forward = -offset;
    let right = forward.cross(Vec3::Y).normalize();
    let up = right.cross(forward).normalize();

    let x = world_axis.dot(right);
    let y = world_axis.dot(up);
    let z = world_axis.dot(forward);
    (egui::vec2(x * AXIS_LENGTH, -y * AXIS_LENGTH), z)
}

/// Render axes indicator in the bottom-right corner
pub fn render_axes_indicator(ui: &mut egui::Ui, rect: egui::Rect, yaw: f32, pitch: f32) {
    let painter = ui.painter();
    let center = rect.right_bottom() - egui::vec2(CORNER_OFFSET, CORNER_OFFSET);

    let mut axes = [
        (Vec3::X, "X", palette::AXIS_X),
        (Vec3::Y, "Y", palette::AXIS_Y),
        (Vec3::Z, "Z", palette::AXIS_Z),
    ]
    .map(|(axis, label, color)| {
        let (dir, depth) = project_axis(axis, yaw, pitch);
        (depth, dir, label, color)
    });
    // Far axes first so near ones draw on top
    axes.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_depth, dir, label, color) in axes {
        painter.line_segment([center, center + dir], egui::Stroke::new(2.0, color));

        let label_offset = dir.normalized() * 8.0;
        painter.text(
            center + dir + label_offset,
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::default(),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_view_axes() {
        // Looking down -Z from +Z: X right, Y up, Z toward the viewer
        let (x, _) = project_axis(Vec3::X, 0.0, 0.0);
        let (y, _) = project_axis(Vec3::Y, 0.0, 0.0);
        let (z, z_depth) = project_axis(Vec3::Z, 0.0, 0.0);

        assert_abs_diff_eq!(x.x, AXIS_LENGTH, epsilon = 1e-4);
        assert_abs_diff_eq!(y.y, -AXIS_LENGTH, epsilon = 1e-4);
        assert_abs_diff_eq!(z.length(), 0.0, epsilon = 1e-4);
        assert!(z_depth < 0.0);
    }

    #[test]
    fn test_quarter_turn_swaps_axes() {
        let (z, _) = project_axis(Vec3::Z, std::f32::consts::FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(z.x, -AXIS_LENGTH, epsilon = 1e-4);
    }
}
