//! Look-at camera with a perspective lens.

use cube_math::{Mat4, Vec3, Vector, deg_to_rad};

use crate::CameraConfig;

/// A camera looking from `eye` at `target`.
///
/// # Example
///
/// ```rust
/// use cube_scene::Camera;
/// use cube_math::{Vec3, Vec4};
///
/// let camera = Camera::default();
/// let target = camera.view() * Vec4::point(camera.target);
/// // the target sits straight ahead, down -Z
/// assert!(target.x.abs() < 1e-6 && target.z < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position
    pub eye: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Approximate up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Camera {
    /// Builds a camera from its config section.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            eye: Vec3::from_array(config.eye),
            target: Vec3::from_array(config.target),
            up: Vec3::from_array(config.up),
            fov: deg_to_rad(config.fov_degrees),
            near: config.near,
            far: config.far,
        }
    }

    /// World-to-view matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::create_look_at(self.eye, self.target, self.up)
    }

    /// View-to-clip matrix for a viewport of the given `aspect` (width / height).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::create_perspective(self.fov, aspect, self.near, self.far)
    }

    /// Unit direction the camera looks along.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Distance from eye to target.
    pub fn distance(&self) -> f32 {
        (self.target - self.eye).length()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
