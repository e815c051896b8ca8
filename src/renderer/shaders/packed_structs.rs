//! Rust structs with memory layouts that match their same named counterparts
//! in shader code (see `definitions.wgsl`).
//!
//! Every struct in this module is part of the binary contract shared with the
//! shading stage. The layout rules are:
//!
//!   * scalars are 4 byte little endian `f32` (or `u32` for `LightType`).
//!   * a `Vec3` field occupies 16 bytes: 12 bytes of data followed by an
//!     explicit padding float that is always zero.
//!   * matrices are column major, stored as four 16 byte columns.
//!
//! These structs must exactly match the memory layout whenever their
//! representation is changed in shader code or vice versa. In particular all
//! vector fields must be aligned to a 16 byte (eg `Vec4`) boundary as this is a
//! WebGPU requirement.
use std::fmt;

use glam::{Mat4, Vec3, Vec4};
use thiserror::Error;

/// Rust struct with the same memory layout as the `Vertex` used by the scene
/// shaders.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    _padding_0: f32,
    /// RGBA, each channel conventionally in [0, 1].
    pub color: Vec4,
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position,
            _padding_0: 0.0,
            color,
        }
    }
}

/// Rust struct with the same memory layout as the `DirectionalLight` used by
/// the lighting shaders.
///
/// The record is interpreted according to the `LightType` the scene tags it
/// with. Only `LightType::Directional` has a meaning for this shape.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLight {
    /// The direction the light travels in. Magnitude is not normalized here.
    pub forwards: Vec3,
    _padding_0: f32,
    /// Unclamped RGB intensity.
    pub color: Vec3,
    _padding_1: f32,
}

impl DirectionalLight {
    pub fn new(forwards: Vec3, color: Vec3) -> Self {
        Self {
            forwards,
            _padding_0: 0.0,
            color,
            _padding_1: 0.0,
        }
    }
}

/// Rust struct with the same memory layout as the `CameraParameters` used by
/// the vertex and fragment shaders.
///
/// Producers must keep `position` in sync with the translation of
/// `view.inverse()`. The struct itself does not enforce this, use
/// `is_consistent` to check it.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraParameters {
    /// World space to view space.
    pub view: Mat4,
    /// View space to clip space.
    pub projection: Mat4,
    /// World space position of the camera eye.
    pub position: Vec3,
    _padding_0: f32,
}

impl CameraParameters {
    pub fn new(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            view,
            projection,
            position,
            _padding_0: 0.0,
        }
    }

    /// Get the camera's world position as recovered from the view matrix, ie
    /// `inverse(view) * origin`.
    pub fn view_translation(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    /// Check if `position` matches the eye position encoded in `view` to
    /// within `tolerance` on every axis.
    pub fn is_consistent(&self, tolerance: f32) -> bool {
        self.view_translation().abs_diff_eq(self.position, tolerance)
    }
}

/// Identifies which lighting model a light record is interpreted under.
///
/// The numeric values are part of the CPU/GPU contract and must not change.
/// Zero is reserved as a sentinel so that a zeroed or forgotten tag is never
/// mistaken for a real light.
#[repr(u32)]
#[derive(
    Clone,
    Copy,
    Default,
    Debug,
    PartialEq,
    Eq,
    Hash,
    bytemuck::NoUninit,
    bytemuck::CheckedBitPattern,
)]
pub enum LightType {
    #[default]
    Undefined = 0,
    Directional = 1,
    Spotlight = 2,
    PointLight = 3,
}

impl LightType {
    pub const ALL: [LightType; 4] = [
        LightType::Undefined,
        LightType::Directional,
        LightType::Spotlight,
        LightType::PointLight,
    ];

    /// Convert a raw discriminant read from a GPU facing buffer.
    pub fn from_raw(raw: u32) -> Result<Self, InvalidLightType> {
        match raw {
            0 => Ok(LightType::Undefined),
            1 => Ok(LightType::Directional),
            2 => Ok(LightType::Spotlight),
            3 => Ok(LightType::PointLight),
            _ => Err(InvalidLightType(raw)),
        }
    }

    /// Get the numeric discriminant written to GPU facing buffers.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// True for every light type except the `Undefined` sentinel.
    pub fn is_concrete(self) -> bool {
        self != LightType::Undefined
    }

    /// True if the light type can be expressed with the `DirectionalLight`
    /// record. Spotlights and point lights need position, cone and
    /// attenuation fields which the record does not have yet.
    pub fn is_supported(self) -> bool {
        self == LightType::Directional
    }

    /// Name of the matching WGSL constant in `definitions.wgsl`.
    pub fn wgsl_name(self) -> &'static str {
        match self {
            LightType::Undefined => "LIGHT_TYPE_UNDEFINED",
            LightType::Directional => "LIGHT_TYPE_DIRECTIONAL",
            LightType::Spotlight => "LIGHT_TYPE_SPOTLIGHT",
            LightType::PointLight => "LIGHT_TYPE_POINTLIGHT",
        }
    }
}

impl TryFrom<u32> for LightType {
    type Error = InvalidLightType;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        LightType::from_raw(value)
    }
}

impl From<LightType> for u32 {
    fn from(value: LightType) -> Self {
        value.raw()
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightType::Undefined => "undefined",
            LightType::Directional => "directional",
            LightType::Spotlight => "spotlight",
            LightType::PointLight => "point light",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{} is not a valid light type discriminant", .0)]
pub struct InvalidLightType(pub u32);

const _: () = assert!(std::mem::size_of::<Vertex>() == 32);
const _: () = assert!(std::mem::size_of::<DirectionalLight>() == 32);
const _: () = assert!(std::mem::size_of::<CameraParameters>() == 144);
const _: () = assert!(std::mem::size_of::<LightType>() == 4);
