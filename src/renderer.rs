//! GPU facing data for the scene: the packed records shared with the shaders,
//! the CPU side light descriptions that produce them and the per-frame
//! assembly that validates lights before anything is uploaded.
pub mod scene;
pub mod shaders;
pub mod shading;

pub use scene::{validate_lights, FrameData, Scene, TaggedLight};
pub use shaders::{CameraParameters, DirectionalLight, InvalidLightType, LightType, Vertex};
pub use shading::{LightError, LightPath, LightSource};
