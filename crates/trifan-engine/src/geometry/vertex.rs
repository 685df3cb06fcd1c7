use bytemuck::{Pod, Zeroable};

/// Position-only vertex. Color comes from the program uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// Position + per-vertex RGB color, interleaved (24 bytes).
///
///  offset  0  position [f32; 3]   loc 0
///  offset 12  color    [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Common access for vertex types a [`Mesh`](super::Mesh) can hold.
pub trait MeshVertex: Pod {
    /// `true` when the vertex carries its own color attribute.
    const COLORED: bool;

    fn position(&self) -> [f32; 3];
}

impl MeshVertex for Vertex {
    const COLORED: bool = false;

    #[inline]
    fn position(&self) -> [f32; 3] {
        self.position
    }
}

impl MeshVertex for ColorVertex {
    const COLORED: bool = true;

    #[inline]
    fn position(&self) -> [f32; 3] {
        self.position
    }
}
