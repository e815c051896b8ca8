//! Shared CPU/GPU data layout for the orrery scene renderer.
//!
//! The records in `renderer::shaders::packed_structs` are the binary contract
//! with the shading stage. Everything else in this crate exists to produce
//! valid instances of them: a camera that keeps its eye position in sync with
//! its view matrix, an orbit rig that places that camera, and light sources
//! that refuse to reach the GPU unless they are a supported, declared kind.
pub mod camera;
pub mod gameplay;
pub mod math_utils;
pub mod renderer;

use tracing::info;

use camera::{Camera, CameraSettings};
use gameplay::OrbitCameraController;
use renderer::{shaders, FrameData, LightError, LightSource, Scene};

/// Build the default solar system scene: the sun light and a camera orbiting
/// the origin.
pub fn default_scene(viewport_width: u32, viewport_height: u32) -> Scene {
    let controller = OrbitCameraController::default();
    let mut camera = Camera::from_settings(
        controller.eye(),
        controller.center(),
        &CameraSettings::default(),
        viewport_width,
        viewport_height,
    );
    controller.update_camera(&mut camera);

    let mut scene = Scene::new(camera);
    scene.add_light(LightSource::sun());
    scene
}

/// Log the binary layout of every GPU record and assemble one frame of the
/// default scene.
pub fn report_layout(viewport_width: u32, viewport_height: u32) -> Result<FrameData, LightError> {
    info!(
        vertex = std::mem::size_of::<shaders::Vertex>(),
        directional_light = std::mem::size_of::<shaders::DirectionalLight>(),
        camera_parameters = std::mem::size_of::<shaders::CameraParameters>(),
        light_type = std::mem::size_of::<shaders::LightType>(),
        "gpu record sizes in bytes"
    );

    for light_type in shaders::LightType::ALL {
        info!(
            %light_type,
            raw = light_type.raw(),
            supported = light_type.is_supported(),
            "light type discriminant"
        );
    }

    let frame = default_scene(viewport_width, viewport_height).frame_data()?;
    info!(
        eye = %frame.camera.position,
        lights = frame.lights.len(),
        camera_bytes = frame.camera_bytes().len(),
        light_bytes = frame.light_bytes().len(),
        "assembled frame"
    );

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_assembles() {
        let frame = report_layout(1280, 720).unwrap();

        assert_eq!(1, frame.lights.len());
        assert!(frame.camera.is_consistent(1e-5 * gameplay::DEFAULT_OBSERVE_RADIUS));
    }
}
