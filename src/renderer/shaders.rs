//! Binds the packed structs to the shader side of the contract: the WGSL
//! declarations, the vertex buffer layout and the bind group layouts used to
//! upload camera and light records.
pub mod packed_structs;

pub use packed_structs::{CameraParameters, DirectionalLight, InvalidLightType, LightType, Vertex};

/// WGSL declarations matching the structs in `packed_structs`.
pub const DEFINITIONS_WGSL: &str = include_str!("shaders/definitions.wgsl");

/// Bind group slot holding the `CameraParameters` uniform.
pub const CAMERA_BIND_GROUP: u32 = 0;
/// Bind group slot holding the sun `DirectionalLight` uniform.
pub const LIGHT_BIND_GROUP: u32 = 1;

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            // 0: position, the trailing padding float is skipped.
            offset: std::mem::offset_of!(Vertex, position) as wgpu::BufferAddress,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            // 1: RGBA color.
            offset: std::mem::offset_of!(Vertex, color) as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x4,
        },
    ];

    /// Get the vertex buffer layout used when creating `VertexState`
    /// descriptions for a `RenderPipeline`.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const CAMERA_LAYOUT_ENTRIES: [wgpu::BindGroupLayoutEntry; 1] = [wgpu::BindGroupLayoutEntry {
    binding: 0,
    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
    ty: wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: false,
        min_binding_size: wgpu::BufferSize::new(
            std::mem::size_of::<CameraParameters>() as wgpu::BufferAddress,
        ),
    },
    count: None,
}];

const LIGHT_LAYOUT_ENTRIES: [wgpu::BindGroupLayoutEntry; 1] = [wgpu::BindGroupLayoutEntry {
    binding: 0,
    visibility: wgpu::ShaderStages::FRAGMENT,
    ty: wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: false,
        min_binding_size: wgpu::BufferSize::new(
            std::mem::size_of::<DirectionalLight>() as wgpu::BufferAddress,
        ),
    },
    count: None,
}];

/// Gets the bind group layout describing a `CameraParameters` uniform buffer.
pub fn camera_layout_desc() -> wgpu::BindGroupLayoutDescriptor<'static> {
    wgpu::BindGroupLayoutDescriptor {
        label: Some("camera parameters bind group layout"),
        entries: &CAMERA_LAYOUT_ENTRIES,
    }
}

/// Gets the bind group layout describing a `DirectionalLight` uniform buffer.
pub fn light_layout_desc() -> wgpu::BindGroupLayoutDescriptor<'static> {
    wgpu::BindGroupLayoutDescriptor {
        label: Some("directional light bind group layout"),
        entries: &LIGHT_LAYOUT_ENTRIES,
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    /// Member offsets and total size of the WGSL struct `name`, as laid out
    /// by the shader compiler.
    fn wgsl_struct_layout(name: &str) -> (Vec<(String, u32)>, u32) {
        let module = naga::front::wgsl::parse_str(DEFINITIONS_WGSL).unwrap();
        let mut layouter = naga::proc::Layouter::default();
        layouter.update(module.to_ctx()).unwrap();

        let (handle, ty) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("missing struct `{name}`"));

        match &ty.inner {
            naga::TypeInner::Struct { members, span } => {
                assert_eq!(*span, layouter[handle].size);
                let offsets = members
                    .iter()
                    .map(|m| (m.name.clone().unwrap_or_default(), m.offset))
                    .collect();
                (offsets, *span)
            }
            _ => panic!("`{name}` is not a struct"),
        }
    }

    fn field(name: &str, offset: usize) -> (String, u32) {
        (name.to_string(), offset as u32)
    }

    fn min_binding_size(desc: &wgpu::BindGroupLayoutDescriptor) -> u64 {
        match desc.entries[0].ty {
            wgpu::BindingType::Buffer {
                min_binding_size: Some(size),
                ..
            } => size.get(),
            _ => panic!("expected a sized buffer binding"),
        }
    }

    #[test]
    fn vertex_desc_matches_packed_layout() {
        let desc = Vertex::desc();

        assert_eq!(32, desc.array_stride);
        assert_eq!(wgpu::VertexStepMode::Vertex, desc.step_mode);
        assert_eq!(2, desc.attributes.len());

        assert_eq!(0, desc.attributes[0].offset);
        assert_eq!(wgpu::VertexFormat::Float32x3, desc.attributes[0].format);
        assert_eq!(16, desc.attributes[1].offset);
        assert_eq!(wgpu::VertexFormat::Float32x4, desc.attributes[1].format);

        for attribute in desc.attributes {
            assert!(attribute.offset + attribute.format.size() <= desc.array_stride);
        }
    }

    #[test]
    fn bind_group_layouts_require_full_records() {
        assert_eq!(144, min_binding_size(&camera_layout_desc()));
        assert_eq!(32, min_binding_size(&light_layout_desc()));
        assert_eq!(
            wgpu::ShaderStages::FRAGMENT,
            light_layout_desc().entries[0].visibility
        );
    }

    #[test]
    fn wgsl_declares_every_struct() {
        for name in ["struct Vertex", "struct DirectionalLight", "struct CameraParameters"] {
            assert!(DEFINITIONS_WGSL.contains(name), "missing `{name}`");
        }
    }

    #[test]
    fn wgsl_struct_layouts_match_packed_structs() {
        assert_eq!(
            (
                vec![
                    field("position", offset_of!(Vertex, position)),
                    field("color", offset_of!(Vertex, color)),
                ],
                size_of::<Vertex>() as u32
            ),
            wgsl_struct_layout("Vertex")
        );

        assert_eq!(
            (
                vec![
                    field("forwards", offset_of!(DirectionalLight, forwards)),
                    field("color", offset_of!(DirectionalLight, color)),
                ],
                size_of::<DirectionalLight>() as u32
            ),
            wgsl_struct_layout("DirectionalLight")
        );

        assert_eq!(
            (
                vec![
                    field("view", offset_of!(CameraParameters, view)),
                    field("projection", offset_of!(CameraParameters, projection)),
                    field("position", offset_of!(CameraParameters, position)),
                ],
                size_of::<CameraParameters>() as u32
            ),
            wgsl_struct_layout("CameraParameters")
        );
    }

    #[test]
    fn wgsl_light_type_constants_match_discriminants() {
        for light_type in LightType::ALL {
            let declaration = format!(
                "const {}: u32 = {}u;",
                light_type.wgsl_name(),
                light_type.raw()
            );
            assert!(
                DEFINITIONS_WGSL.contains(&declaration),
                "missing `{declaration}`"
            );
        }
    }

    #[test]
    fn wgsl_bindings_match_bind_group_slots() {
        assert!(DEFINITIONS_WGSL.contains(&format!(
            "@group({CAMERA_BIND_GROUP}) @binding(0)\nvar<uniform> camera: CameraParameters;"
        )));
        assert!(DEFINITIONS_WGSL.contains(&format!(
            "@group({LIGHT_BIND_GROUP}) @binding(0)\nvar<uniform> sun: DirectionalLight;"
        )));
    }
}
