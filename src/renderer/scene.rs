use tracing::{debug, warn};

use super::{
    shaders::{CameraParameters, DirectionalLight, LightType},
    shading::{LightError, LightSource},
};
use crate::camera::Camera;

/// A light record paired with the light type the shaders should interpret it
/// as.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaggedLight {
    pub light_type: LightType,
    pub light: DirectionalLight,
}

impl TaggedLight {
    pub fn new(light_type: LightType, light: DirectionalLight) -> Self {
        Self { light_type, light }
    }
}

/// Check that every light in `lights` can be handed to the shaders.
///
/// Lights tagged `Undefined` are rejected, as are light types the record shape
/// cannot express. The first offending light is reported.
pub fn validate_lights(lights: &[TaggedLight]) -> Result<(), LightError> {
    for (index, tagged) in lights.iter().enumerate() {
        match tagged.light_type {
            LightType::Undefined => {
                warn!(index, "rejecting light tagged as undefined");
                return Err(LightError::UndefinedInList { index });
            }
            light_type if !light_type.is_supported() => {
                warn!(index, %light_type, "rejecting unsupported light");
                return Err(LightError::UnsupportedInList { index, light_type });
            }
            _ => {}
        }
    }

    Ok(())
}

/// A camera and a set of lights that can be turned into per-frame GPU data.
///
/// A `Scene` is not a scene graph!
#[derive(Debug)]
pub struct Scene {
    camera: Camera,
    lights: Vec<LightSource>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
        }
    }

    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Pack every light in the scene and validate the resulting list.
    pub fn assemble_lights(&self) -> Result<Vec<TaggedLight>, LightError> {
        let tagged = self
            .lights
            .iter()
            .map(|light| {
                light
                    .packed()
                    .map(|packed| TaggedLight::new(light.light_type(), packed))
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| warn!("light assembly failed: {err}"))?;

        validate_lights(&tagged)?;
        debug!(count = tagged.len(), "assembled scene lights");

        Ok(tagged)
    }

    /// Build an owned snapshot of everything the shaders need for one frame.
    pub fn frame_data(&self) -> Result<FrameData, LightError> {
        let lights = self
            .assemble_lights()?
            .into_iter()
            .map(|tagged| tagged.light)
            .collect();

        Ok(FrameData {
            camera: self.camera.camera_parameters(),
            lights,
        })
    }
}

/// Per-frame data ready to be copied into GPU buffers. Each frame builds a new
/// snapshot so the producer never writes into data the GPU is reading.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameData {
    pub camera: CameraParameters,
    pub lights: Vec<DirectionalLight>,
}

impl FrameData {
    /// Byte image of the camera uniform.
    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera)
    }

    /// Byte image of the light buffer, one record after another.
    pub fn light_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
