use glam::{Vec3, Vec4};
use thiserror::Error;

use super::shaders::{DirectionalLight, LightType};
use crate::math_utils::direction_from_eulers;

/// Circular path followed by a point light around `rotation_center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightPath {
    pub rotation_center: Vec3,
    pub path_radius: f32,
    pub path_phi: f32,
    pub angular_velocity: f32,
    /// Time along the path.
    pub t: f32,
}

/// A CPU side light description. The light starts out as
/// `LightType::Undefined` and must be declared as a concrete kind with one of
/// the `declare_*` methods before it can be packed for the GPU.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSource {
    pub name: String,
    /// The world position of the light. Ignored by directional lights.
    pub position: Vec3,
    /// Orientation in degrees, see `math_utils::direction_from_eulers`.
    pub eulers: Vec3,
    /// RGB color, `.w` is not sent to the GPU.
    pub color: Vec4,
    light_type: LightType,
    forwards: Vec3,
    path: Option<LightPath>,
    /// Time since the spotlight was declared.
    t: Option<f32>,
}

impl LightSource {
    pub fn new(name: impl Into<String>, position: Vec3, color: Vec4) -> Self {
        Self {
            name: name.into(),
            position,
            eulers: Vec3::ZERO,
            color,
            light_type: LightType::Undefined,
            forwards: Vec3::ZERO,
            path: None,
            t: None,
        }
    }

    /// The sun of the solar system scene: a slightly warm directional light.
    pub fn sun() -> Self {
        let mut sun = Self::new("SunLight", Vec3::ZERO, Vec4::new(1.0, 0.95, 0.8, 1.0));
        sun.declare_directional(Vec3::new(0.0, 135.0, 45.0));
        sun.update();
        sun
    }

    pub fn declare_directional(&mut self, eulers: Vec3) {
        self.light_type = LightType::Directional;
        self.eulers = eulers;
    }

    pub fn declare_spotlight(&mut self, position: Vec3, eulers: Vec3) {
        self.light_type = LightType::Spotlight;
        self.position = position;
        self.eulers = eulers;
        self.t = Some(0.0);
    }

    pub fn declare_point_light(
        &mut self,
        rotation_center: Vec3,
        path_radius: f32,
        path_phi: f32,
        angular_velocity: f32,
    ) {
        self.light_type = LightType::PointLight;
        self.path = Some(LightPath {
            rotation_center,
            path_radius,
            path_phi,
            angular_velocity,
            t: 0.0,
        });
        self.position = rotation_center;
    }

    /// Recompute derived values after `eulers` or the light type changed.
    ///
    /// Only directional lights derive anything today, other kinds are left
    /// untouched.
    pub fn update(&mut self) {
        if self.light_type == LightType::Directional {
            self.forwards = direction_from_eulers(self.eulers);
        }
    }

    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    /// The direction the light travels in as of the last `update`.
    pub fn forwards(&self) -> Vec3 {
        self.forwards
    }

    pub fn path(&self) -> Option<&LightPath> {
        self.path.as_ref()
    }

    pub fn spotlight_time(&self) -> Option<f32> {
        self.t
    }

    /// Convert this light to the record uploaded to the GPU.
    pub fn packed(&self) -> Result<DirectionalLight, LightError> {
        match self.light_type {
            LightType::Directional => Ok(DirectionalLight::new(
                self.forwards,
                self.color.truncate(),
            )),
            LightType::Undefined => Err(LightError::Undefined {
                name: self.name.clone(),
            }),
            light_type => Err(LightError::Unsupported {
                name: self.name.clone(),
                light_type,
            }),
        }
    }
}

/// Reasons a light is refused before it reaches the GPU.
#[derive(Debug, Error, PartialEq)]
pub enum LightError {
    #[error("light `{name}` was never declared as a concrete light type")]
    Undefined { name: String },
    #[error("light `{name}` is a {light_type} which the light record cannot express yet")]
    Unsupported { name: String, light_type: LightType },
    #[error("light #{index} in the light list is tagged as undefined")]
    UndefinedInList { index: usize },
    #[error("light #{index} in the light list is a {light_type} which is not supported")]
    UnsupportedInList { index: usize, light_type: LightType },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_light_is_undefined_and_refused() {
        let light = LightSource::new("lamp", Vec3::ONE, Vec4::ONE);

        assert_eq!(LightType::Undefined, light.light_type());
        assert_eq!(
            Err(LightError::Undefined {
                name: "lamp".to_string()
            }),
            light.packed()
        );
    }

    #[test]
    fn directional_light_packs_forwards_and_rgb() {
        let mut light = LightSource::new("key", Vec3::ZERO, Vec4::new(0.5, 0.25, 1.0, 0.3));
        light.declare_directional(Vec3::new(0.0, 180.0, 0.0));
        light.update();

        let packed = light.packed().unwrap();
        assert!(packed.forwards.abs_diff_eq(-Vec3::Z, 1e-6));
        assert_eq!(Vec3::new(0.5, 0.25, 1.0), packed.color);
    }

    #[test]
    fn forwards_requires_update() {
        let mut light = LightSource::new("key", Vec3::ZERO, Vec4::ONE);
        light.declare_directional(Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(Vec3::ZERO, light.forwards());

        light.update();
        assert!(light.forwards().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn sun_preset() {
        let sun = LightSource::sun();

        assert_eq!(LightType::Directional, sun.light_type());
        assert!(sun
            .forwards()
            .abs_diff_eq(direction_from_eulers(Vec3::new(0.0, 135.0, 45.0)), 1e-6));
        assert_eq!(Vec3::new(1.0, 0.95, 0.8), sun.packed().unwrap().color);
    }

    #[test]
    fn spotlight_is_declared_but_unsupported() {
        let mut light = LightSource::new("torch", Vec3::ZERO, Vec4::ONE);
        light.declare_spotlight(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 45.0, 0.0));
        light.update();

        assert_eq!(Vec3::new(1.0, 2.0, 3.0), light.position);
        assert_eq!(Some(0.0), light.spotlight_time());
        assert_eq!(Vec3::ZERO, light.forwards());
        assert_eq!(
            Err(LightError::Unsupported {
                name: "torch".to_string(),
                light_type: LightType::Spotlight
            }),
            light.packed()
        );
    }

    #[test]
    fn point_light_records_path_and_starts_at_center() {
        let mut light = LightSource::new("comet", Vec3::ONE, Vec4::ONE);
        light.declare_point_light(Vec3::new(0.0, 0.0, 10.0), 4.0, 0.5, 2.0);

        assert_eq!(LightType::PointLight, light.light_type());
        assert_eq!(Vec3::new(0.0, 0.0, 10.0), light.position);

        let path = light.path().unwrap();
        assert_eq!(4.0, path.path_radius);
        assert_eq!(0.5, path.path_phi);
        assert_eq!(2.0, path.angular_velocity);
        assert_eq!(0.0, path.t);
        assert!(light.packed().is_err());
    }

    #[test]
    fn error_messages_name_the_light() {
        let err = LightError::Unsupported {
            name: "comet".to_string(),
            light_type: LightType::PointLight,
        };
        assert_eq!(
            "light `comet` is a point light which the light record cannot express yet",
            err.to_string()
        );
    }
}
