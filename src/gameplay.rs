use glam::Vec3;
use tracing::debug;

use crate::camera::Camera;
use crate::math_utils::{spherical_to_cartesian, wrap_degrees};

/// Default distance the orbit camera keeps from its focus point.
pub const DEFAULT_OBSERVE_RADIUS: f32 = 10_000.0;
/// Default number of world units moved per unit of zoom input.
pub const DEFAULT_ZOOM_FACTOR: f32 = 500.0;
/// Elevation limits in degrees. Keeping the camera off the poles stops the
/// view from flipping when the view direction lines up with world up.
pub const MIN_ELEVATION_DEG: f32 = 1.0;
pub const MAX_ELEVATION_DEG: f32 = 179.0;

/// Keeps a camera on a sphere around a focus point.
///
/// The camera position is described by `eulers` where `.y` is the polar angle
/// (elevation) measured from world +Z and `.z` is the azimuth, both in
/// degrees. The camera always looks at `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCameraController {
    center: Vec3,
    radius: f32,
    observe_radius: f32,
    zoom_factor: f32,
    eulers: Vec3,
}

impl OrbitCameraController {
    pub fn new(center: Vec3, observe_radius: f32, eulers_deg: Vec3) -> Self {
        assert!(observe_radius > 0.0);

        Self {
            center,
            radius: observe_radius,
            observe_radius,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            eulers: Vec3::new(
                eulers_deg.x,
                eulers_deg.y.clamp(MIN_ELEVATION_DEG, MAX_ELEVATION_DEG),
                wrap_degrees(eulers_deg.z),
            ),
        }
    }

    /// Focus on a body of size `body_scale` located at `center`. The observe
    /// distance and zoom speed are scaled to the body and the camera is moved
    /// back out to the observe distance.
    pub fn focus_on(&mut self, center: Vec3, body_scale: f32) {
        assert!(body_scale > 0.0);

        self.center = center;
        self.observe_radius = body_scale * 100.0;
        self.zoom_factor = body_scale * 15.0;
        self.radius = self.observe_radius;

        debug!(
            ?center,
            observe_radius = self.observe_radius,
            "orbit camera focus changed"
        );
    }

    /// Rotate around the focus point. The azimuth wraps around while the
    /// elevation is clamped away from the poles.
    pub fn orbit(&mut self, d_azimuth_deg: f32, d_elevation_deg: f32) {
        self.eulers.z = wrap_degrees(self.eulers.z + d_azimuth_deg);
        self.eulers.y =
            (self.eulers.y + d_elevation_deg).clamp(MIN_ELEVATION_DEG, MAX_ELEVATION_DEG);
    }

    /// Move towards (negative `delta`) or away from (positive `delta`) the
    /// focus point. The distance stays within `[min_radius, observe_radius]`.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta * self.zoom_factor)
            .clamp(self.min_radius(), self.observe_radius);
    }

    /// Get the world position the camera should be placed at.
    pub fn eye(&self) -> Vec3 {
        spherical_to_cartesian(self.center, self.radius, self.eulers)
    }

    /// Move `camera` to the current orbit position, looking at the focus point.
    pub fn update_camera(&self, camera: &mut Camera) {
        camera.reorient(self.eye(), self.center);
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn min_radius(&self) -> f32 {
        self.observe_radius / 5.0
    }

    pub fn observe_radius(&self) -> f32 {
        self.observe_radius
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    pub fn eulers(&self) -> Vec3 {
        self.eulers
    }
}

impl Default for OrbitCameraController {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_OBSERVE_RADIUS, Vec3::new(0.0, 110.0, 315.0))
    }
}
