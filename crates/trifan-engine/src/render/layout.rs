use crate::geometry::MeshVertex;

use super::RenderError;

/// Stride and offset alignment required for vertex buffers.
const VERTEX_ALIGNMENT: u64 = 4;

/// Component type of a vertex attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribType {
    Float32,
    Uint32,
    Sint32,
    Uint16,
    Uint8,
}

/// Resolves a (type, component count, normalized) triple to a wgpu format.
///
/// `normalized` only applies to 8/16-bit integers; it is ignored for floats
/// and rejected for 32-bit integers, which have no normalized form.
pub fn attrib_format(
    ty: AttribType,
    components: u32,
    normalized: bool,
) -> Option<wgpu::VertexFormat> {
    use wgpu::VertexFormat as F;

    let format = match (ty, components, normalized) {
        (AttribType::Float32, 1, _) => F::Float32,
        (AttribType::Float32, 2, _) => F::Float32x2,
        (AttribType::Float32, 3, _) => F::Float32x3,
        (AttribType::Float32, 4, _) => F::Float32x4,

        (AttribType::Uint32, 1, false) => F::Uint32,
        (AttribType::Uint32, 2, false) => F::Uint32x2,
        (AttribType::Uint32, 3, false) => F::Uint32x3,
        (AttribType::Uint32, 4, false) => F::Uint32x4,

        (AttribType::Sint32, 1, false) => F::Sint32,
        (AttribType::Sint32, 2, false) => F::Sint32x2,
        (AttribType::Sint32, 3, false) => F::Sint32x3,
        (AttribType::Sint32, 4, false) => F::Sint32x4,

        (AttribType::Uint16, 2, false) => F::Uint16x2,
        (AttribType::Uint16, 4, false) => F::Uint16x4,
        (AttribType::Uint16, 2, true) => F::Unorm16x2,
        (AttribType::Uint16, 4, true) => F::Unorm16x4,

        (AttribType::Uint8, 2, false) => F::Uint8x2,
        (AttribType::Uint8, 4, false) => F::Uint8x4,
        (AttribType::Uint8, 2, true) => F::Unorm8x2,
        (AttribType::Uint8, 4, true) => F::Unorm8x4,

        _ => return None,
    };
    Some(format)
}

/// Interleaved vertex buffer layout, described one attribute at a time.
///
/// All attributes share one stride. Attributes are kept sorted by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexLayout {
    stride: u64,
    attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout for a [`MeshVertex`]: position at slot 0, color at slot 1 when
    /// the vertex carries one.
    pub fn for_vertex<V: MeshVertex>() -> Result<Self, RenderError> {
        let stride = std::mem::size_of::<V>() as u64;
        let vec3 = std::mem::size_of::<[f32; 3]>() as u64;

        let mut layout = Self::new();
        layout.set_attrib(0, 3, AttribType::Float32, false, stride, 0)?;
        if V::COLORED {
            layout.set_attrib(1, 3, AttribType::Float32, false, stride, vec3)?;
        }
        Ok(layout)
    }

    /// Declares the attribute read by shader location `slot`.
    pub fn set_attrib(
        &mut self,
        slot: u32,
        components: u32,
        ty: AttribType,
        normalized: bool,
        stride: u64,
        offset: u64,
    ) -> Result<&mut Self, RenderError> {
        let format = attrib_format(ty, components, normalized).ok_or_else(|| {
            RenderError::InvalidLayout(format!(
                "slot {slot}: {components} x {ty:?} (normalized={normalized}) is not a vertex format"
            ))
        })?;

        if stride == 0 || stride % VERTEX_ALIGNMENT != 0 {
            return Err(RenderError::InvalidLayout(format!(
                "slot {slot}: stride {stride} must be a non-zero multiple of {}",
                VERTEX_ALIGNMENT
            )));
        }
        if !self.attributes.is_empty() && stride != self.stride {
            return Err(RenderError::InvalidLayout(format!(
                "slot {slot}: stride {stride} differs from {}",
                self.stride
            )));
        }

        let size = format.size();
        if offset % size.min(VERTEX_ALIGNMENT) != 0 {
            return Err(RenderError::InvalidLayout(format!(
                "slot {slot}: offset {offset} is misaligned for {format:?}"
            )));
        }
        if offset + size > stride {
            return Err(RenderError::InvalidLayout(format!(
                "slot {slot}: {size} bytes at offset {offset} overrun stride {stride}"
            )));
        }
        if self.attributes.iter().any(|a| a.shader_location == slot) {
            return Err(RenderError::InvalidLayout(format!("slot {slot} is already set")));
        }

        self.stride = stride;
        self.attributes.push(wgpu::VertexAttribute {
            format,
            offset,
            shader_location: slot,
        });
        self.attributes.sort_by_key(|a| a.shader_location);
        Ok(self)
    }

    #[inline]
    pub fn stride(&self) -> u64 {
        self.stride
    }

    #[inline]
    pub fn attributes(&self) -> &[wgpu::VertexAttribute] {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}
