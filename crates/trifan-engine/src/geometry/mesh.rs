use super::error::GeometryError;
use super::vertex::MeshVertex;

/// CPU-side triangle list: vertices plus `u32` index triples.
///
/// Invariants (checked by [`Mesh::validate`]):
/// - `indices.len()` is a multiple of 3
/// - every index is `< vertices.len()`
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<V> {
    pub vertices: Vec<V>,
    pub indices: Vec<u32>,
}

impl<V: MeshVertex> Mesh<V> {
    /// Builds a mesh from raw parts, rejecting data that breaks the invariants.
    pub fn new(vertices: Vec<V>, indices: Vec<u32>) -> Result<Self, GeometryError> {
        let mesh = Self { vertices, indices };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        match self
            .indices
            .iter()
            .position(|&i| i as usize >= vertex_count)
        {
            Some(position) => Err(GeometryError::IndexOutOfRange {
                index: self.indices[position],
                position,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices, as passed to the indexed draw call.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index triples in draw order. A trailing partial triple is skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Positions of the three corners of each triangle.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.triangles().map(|[a, b, c]| {
            [
                self.vertices[a as usize].position(),
                self.vertices[b as usize].position(),
                self.vertices[c as usize].position(),
            ]
        })
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
