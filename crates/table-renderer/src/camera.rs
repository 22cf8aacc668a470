//! Orbit camera for the 3D viewport
//!
//! Y-up, orbiting a target point. The default pose looks at the origin from
//! `(0, 0, 5)` with a 75 degree vertical field of view.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Projection * view
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w = 1)
    pub eye: [f32; 4],
}

/// Minimum orbit distance
pub const MIN_DISTANCE: f32 = 0.5;
/// Maximum orbit distance
pub const MAX_DISTANCE: f32 = 200.0;

const DEFAULT_DISTANCE: f32 = 5.0;
const PITCH_LIMIT: f32 = 89.0;

/// Orbit camera
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Orbit centre
    pub target: Vec3,
    /// World up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Rotation around the up axis, radians; 0 looks down -Z
    pub yaw: f32,
    /// Elevation above the horizontal plane, radians
    pub pitch: f32,
    /// Distance from target to eye
    pub distance: f32,
    /// Pan speed relative to distance, per pixel
    pub pan_sensitivity: f32,
    /// Zoom speed per scroll unit
    pub zoom_sensitivity: f32,
}

impl Camera {
    /// Create a camera in the default pose
    pub fn new(aspect: f32) -> Self {
        Self::with_config(aspect, &CameraConfig::default())
    }

    /// Create a camera in the default pose using `config` for projection
    pub fn with_config(aspect: f32, config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 0.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            pan_sensitivity: 0.0,
            zoom_sensitivity: 0.0,
        };
        camera.apply_config(config);
        camera.reset();
        camera
    }

    /// Apply projection and sensitivity settings, keeping the current pose
    pub fn apply_config(&mut self, config: &CameraConfig) {
        self.set_fov_degrees(config.fov_degrees);
        self.set_near(config.near_plane);
        self.set_far(config.far_plane);
        self.pan_sensitivity = config.pan_sensitivity;
        self.zoom_sensitivity = config.zoom_sensitivity;
    }

    /// Return to the default pose
    pub fn reset(&mut self) {
        self.target = Vec3::ZERO;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = DEFAULT_DISTANCE;
        self.update_position_from_orbit();
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch)
            .clamp(-PITCH_LIMIT.to_radians(), PITCH_LIMIT.to_radians());
        self.update_position_from_orbit();
    }

    /// Pan the camera (move target in the view plane)
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        let scale = self.distance * self.pan_sensitivity;
        self.target += right * (-delta_x * scale) + up * (delta_y * scale);
        self.update_position_from_orbit();
    }

    /// Zoom the camera; positive deltas move closer
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * self.zoom_sensitivity))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.update_position_from_orbit();
    }

    /// Frame a bounding sphere, keeping the viewing direction
    ///
    /// Non-finite spheres are ignored and leave the pose unchanged.
    pub fn fit_sphere(&mut self, center: Vec3, radius: f32) {
        if !center.is_finite() || !radius.is_finite() {
            tracing::warn!(?center, radius, "Ignoring non-finite fit sphere");
            return;
        }
        self.target = center;
        let half_fov = self.fov * 0.5;
        let fit = radius / half_fov.sin();
        self.distance = (fit * 1.1).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.update_position_from_orbit();
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set near clipping plane
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Set far clipping plane
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1.0);
    }

    fn update_position_from_orbit(&mut self) {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.position = self.target + offset * self.distance;
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view_proj = self.projection_matrix() * self.view_matrix();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-4);
    }

    #[test]
    fn test_default_pose() {
        let camera = Camera::new(16.0 / 9.0);
        assert_vec_eq(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_vec_eq(camera.target, Vec3::ZERO);
        assert_abs_diff_eq!(camera.fov_degrees(), 75.0, epsilon = 1e-3);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_orbit_keeps_distance_and_clamps_pitch() {
        let mut camera = Camera::new(1.0);
        camera.orbit(1.0, 10.0);
        assert_abs_diff_eq!(camera.position.distance(camera.target), 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(camera.pitch, 89.0_f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn test_reset_after_navigation() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.7, 0.3);
        camera.pan(40.0, -12.0);
        camera.zoom(3.0);
        camera.reset();
        assert_vec_eq(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_vec_eq(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new(1.0);
        for _ in 0..200 {
            camera.zoom(5.0);
        }
        assert_eq!(camera.distance, MIN_DISTANCE);
        for _ in 0..200 {
            camera.zoom(-5.0);
        }
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_pan_moves_target_in_view_plane() {
        let mut camera = Camera::new(1.0);
        camera.pan(-100.0, 0.0);
        assert!(camera.target.x > 0.0);
        assert_abs_diff_eq!(camera.target.y, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(camera.target.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_fit_sphere_frames_target() {
        let mut camera = Camera::new(1.0);
        camera.fit_sphere(Vec3::new(0.0, 0.25, 0.0), 1.0);
        assert_vec_eq(camera.target, Vec3::new(0.0, 0.25, 0.0));
        assert!(camera.distance > 1.0);
    }

    #[test]
    fn test_fit_sphere_ignores_nan() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.4, 0.2);
        let position = camera.position;
        let distance = camera.distance;

        camera.fit_sphere(Vec3::new(0.0, 0.25, 0.0), f32::NAN);
        camera.fit_sphere(Vec3::new(f32::NAN, 0.0, 0.0), 1.0);

        assert_eq!(camera.distance, distance);
        assert_vec_eq(camera.target, Vec3::ZERO);
        assert_vec_eq(camera.position, position);
        assert!(camera.uniform().view_proj.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_origin_projects_to_screen_centre() {
        let camera = Camera::new(1.5);
        let view_proj = Mat4::from_cols_array_2d(&camera.uniform().view_proj);
        let clip = view_proj * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
    }
}
