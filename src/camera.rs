use glam::{Mat4, Vec3};
use thiserror::Error;
use tracing::debug;

use crate::math_utils::direction_from_eulers;
use crate::renderer::CameraParameters;

/// Default camera configuration, matching the solar system scene: a 45 degree
/// vertical field of view, a very deep view distance and +Z as world up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// The world space direction considered straight up.
    pub world_up: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            z_near: 0.1,
            z_far: 1_000_000.0,
            world_up: Vec3::Z,
        }
    }
}

/// Camera assumes a right-handed system. Which axis is "up" is decided by the
/// `up` vector the camera is created with.
///
/// Positive rotations in a right handed system are counterclockwise around the
/// axis of rotation.
///
/// The following transforms points from local space to clip space:
///  `V_clip = M_projection * M_view * M_model * M_local`
///
/// WebGPU defines clip space with x and y in [-1, 1] and z in [0, 1]. The
/// projection produced here follows that convention.
#[derive(Clone, Debug)]
pub struct Camera {
    /// The position of the camera in world space.
    eye: Vec3,
    /// The target position the camera should look at.
    target: Vec3,
    /// The camera's up direction.
    up: Vec3,
    /// A world space direction vector indicating which direction is considered
    /// straight up.
    world_up: Vec3,
    /// The ratio of the viewport width to its height. An example is if the view
    /// is one unit high and two units wide then the aspect ratio is 2/1.
    aspect: f32,
    /// The vertical field of view for the camera in radians.
    fov_y: f32,
    /// The minimum camera view distance. Fragments closer than `z_near` will not
    /// be rendered.
    z_near: f32,
    /// The maximum camera view distance. Fragments further than `z_far` will not
    /// be rendered.
    z_far: f32,
    viewport_width: f32,
    viewport_height: f32,
}

impl Camera {
    /// Create a new camera centered at `eye` with the center of the view
    /// aiming at `target` with `up` as the camera's upward direction.
    ///
    /// The viewport must be non-empty and `z_near` strictly positive so the
    /// projection matrix is always invertible.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        z_near: f32,
        z_far: f32,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Self {
        assert!(fov_y > 0.0 && fov_y < std::f32::consts::PI);
        assert!(z_near > 0.0);
        assert!(z_far > z_near);
        assert!(viewport_width > 0 && viewport_height > 0);
        assert!(eye != target);

        let up = up.normalize();

        let mut camera = Self {
            eye,
            target,
            up,
            world_up: up,
            aspect: viewport_width as f32 / viewport_height as f32,
            fov_y,
            z_near,
            z_far,
            viewport_width: viewport_width as f32,
            viewport_height: viewport_height as f32,
        };

        camera.reorient(eye, target);
        camera
    }

    /// Create a new camera from `settings`.
    pub fn from_settings(
        eye: Vec3,
        target: Vec3,
        settings: &CameraSettings,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Self {
        Self::new(
            eye,
            target,
            settings.world_up,
            settings.fov_y_degrees.to_radians(),
            settings.z_near,
            settings.z_far,
            viewport_width,
            viewport_height,
        )
    }

    /// Reorient the camera to be located at `eye` and look at `target`. Both
    /// points should be in world space and must not be equal.
    ///
    /// Calling `reorient` will rebuild the camera's local coordinate system
    /// using the Gram-Schimdt process. If the view direction is parallel to
    /// the world up axis the previous up vector is projected onto the view
    /// plane instead, falling back to any axis orthogonal to the view.
    pub fn reorient(&mut self, new_eye: Vec3, new_target: Vec3) {
        assert!(new_eye != new_target);

        self.eye = new_eye;
        self.target = new_target;

        // NOTE: This direction is the _opposite_ of the camera's facing
        // direction because by convention the camera looks down its local -Z
        // axis.
        let new_direction = (self.eye - self.target).normalize();
        let new_right = Vec3::cross(self.world_up, new_direction).normalize_or_zero();

        if new_right != Vec3::ZERO {
            self.up = Vec3::cross(new_direction, new_right);
            return;
        }

        debug!("camera view direction is parallel to world up, picking a fallback up");
        let projected_up =
            (self.up - new_direction * self.up.dot(new_direction)).normalize_or_zero();

        self.up = if projected_up != Vec3::ZERO {
            projected_up
        } else {
            new_direction.any_orthonormal_vector()
        };
    }

    /// Place the camera at `eye` facing along the direction described by the
    /// Euler angles `eulers_deg` (see `math_utils::direction_from_eulers`).
    pub fn orient_from_eulers(&mut self, eye: Vec3, eulers_deg: Vec3) {
        self.reorient(eye, eye + direction_from_eulers(eulers_deg));
    }

    /// Get the camera's view matrix.
    ///
    /// A view matrix transforms coordinates from world space to view space.
    /// View space is a coordinate space that can be imagined as the user's view
    /// into the scene, with the user's eye located at (0, 0, 0) and looking
    /// down the -Z axis.
    ///
    /// View matrices can also be thought of the inverse of the camera's world
    /// space transform. For instance if a camera is moved backwards 3 units
    /// then it is the same as moving the scene forward 3 units!
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Get the camera's projection matrix.
    ///
    /// The matrix is rebuilt from the current aspect ratio on every call so a
    /// viewport resize is always reflected.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    /// Get the camera's view projection matrix. The view projection matrix will
    /// transform points from world space to clip space.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Build the per-frame camera record consumed by the shaders.
    pub fn camera_parameters(&self) -> CameraParameters {
        CameraParameters::new(self.view_matrix(), self.projection_matrix(), self.eye)
    }

    /// Resize the camera's viewport.
    pub fn set_viewport_size(
        &mut self,
        new_width: u32,
        new_height: u32,
    ) -> Result<(), InvalidCameraSize> {
        if new_width > 0 && new_height > 0 {
            self.aspect = new_width as f32 / new_height as f32;
            self.viewport_width = new_width as f32;
            self.viewport_height = new_height as f32;
            Ok(())
        } else {
            Err(InvalidCameraSize(new_width, new_height))
        }
    }

    /// Get the position of the camera in world space.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Get the point at which the camera is focused on.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Get the unit direction the camera is facing.
    pub fn forwards(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Get the camera's up axis.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Get the camera viewport width in pixels.
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Get the camera viewport height in pixels.
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Get the world up axis (not the camera's up axis).
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }
}

#[derive(Debug, Error)]
#[error("camera viewport width and height must be larger than zero but width was {} and height was {}", .0, .1)]
pub struct InvalidCameraSize(u32, u32);
