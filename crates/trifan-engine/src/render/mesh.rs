use crate::geometry::{Mesh, MeshVertex};

use super::buffer::{Buffer, BufferTarget, BufferUsage};
use super::RenderError;

/// A [`Mesh`] uploaded to GPU memory.
///
/// Owns its vertex and index buffers; dropping it releases both.
#[derive(Debug)]
pub struct GpuMesh {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
    colored: bool,
}

impl GpuMesh {
    /// Validates `mesh` and uploads it into two static buffers.
    pub fn upload<V: MeshVertex>(
        device: &wgpu::Device,
        label: &str,
        mesh: &Mesh<V>,
    ) -> Result<Self, RenderError> {
        mesh.validate()?;
        if mesh.is_empty() {
            return Err(RenderError::resource(format!("mesh '{label}'"), "no triangles"));
        }

        let vertex_buffer = Buffer::with_data(
            device,
            BufferTarget::Vertex,
            BufferUsage::Static,
            &format!("{label} vbo"),
            mesh.vertex_bytes(),
        )?;
        let index_buffer = Buffer::with_data(
            device,
            BufferTarget::Index,
            BufferUsage::Static,
            &format!("{label} ibo"),
            mesh.index_bytes(),
        )?;

        log::debug!(
            "uploaded mesh '{label}': {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            colored: V::COLORED,
        })
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// `true` when the vertices carry their own color attribute.
    #[inline]
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Binds both buffers and issues one indexed triangle-list draw.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.raw().slice(..));
        rpass.set_index_buffer(self.index_buffer.raw().slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
