use bytemuck::Pod;
use wgpu::util::DeviceExt;

use super::RenderError;

/// What a buffer is bound as.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    Vertex,
    Index,
    Uniform,
}

/// Update frequency hint.
///
/// `Static` buffers are written once at creation. `Dynamic` buffers also
/// accept [`Buffer::write`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferUsage {
    Static,
    Dynamic,
}

pub(crate) fn wgpu_usages(target: BufferTarget, usage: BufferUsage) -> wgpu::BufferUsages {
    let base = match target {
        BufferTarget::Vertex => wgpu::BufferUsages::VERTEX,
        BufferTarget::Index => wgpu::BufferUsages::INDEX,
        BufferTarget::Uniform => wgpu::BufferUsages::UNIFORM,
    };
    match usage {
        BufferUsage::Static => base,
        BufferUsage::Dynamic => base | wgpu::BufferUsages::COPY_DST,
    }
}

/// GPU buffer initialized from CPU data. Released on drop.
#[derive(Debug)]
pub struct Buffer {
    raw: wgpu::Buffer,
    usage: BufferUsage,
    size: u64,
}

impl Buffer {
    /// Creates a buffer and uploads `contents` into it.
    ///
    /// Empty contents and sizes above the device limit are rejected.
    pub fn with_data(
        device: &wgpu::Device,
        target: BufferTarget,
        usage: BufferUsage,
        label: &str,
        contents: &[u8],
    ) -> Result<Self, RenderError> {
        if contents.is_empty() {
            return Err(RenderError::resource(label, "buffer data is empty"));
        }
        let size = contents.len() as u64;
        let max = device.limits().max_buffer_size;
        if size > max {
            return Err(RenderError::resource(
                label,
                format!("{size} bytes exceeds the device limit of {max}"),
            ));
        }

        let raw = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: wgpu_usages(target, usage),
        });

        log::trace!("created {target:?} buffer '{label}' ({size} bytes)");

        Ok(Self { raw, usage, size })
    }

    /// Typed convenience over [`Buffer::with_data`].
    pub fn with_slice<T: Pod>(
        device: &wgpu::Device,
        target: BufferTarget,
        usage: BufferUsage,
        label: &str,
        data: &[T],
    ) -> Result<Self, RenderError> {
        Self::with_data(device, target, usage, label, bytemuck::cast_slice(data))
    }

    /// Overwrites part of a dynamic buffer.
    pub fn write(&self, queue: &wgpu::Queue, offset: u64, bytes: &[u8]) -> Result<(), RenderError> {
        if self.usage != BufferUsage::Dynamic {
            return Err(RenderError::resource("buffer write", "buffer is static"));
        }
        if offset + bytes.len() as u64 > self.size {
            return Err(RenderError::resource(
                "buffer write",
                format!("{} bytes at offset {offset} overrun {} byte buffer", bytes.len(), self.size),
            ));
        }
        queue.write_buffer(&self.raw, offset, bytes);
        Ok(())
    }

    #[inline]
    pub fn raw(&self) -> &wgpu::Buffer {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_buffers_are_not_copy_destinations() {
        let u = wgpu_usages(BufferTarget::Vertex, BufferUsage::Static);
        assert_eq!(u, wgpu::BufferUsages::VERTEX);
        assert!(!u.contains(wgpu::BufferUsages::COPY_DST));
    }

    #[test]
    fn dynamic_buffers_accept_writes() {
        let u = wgpu_usages(BufferTarget::Uniform, BufferUsage::Dynamic);
        assert!(u.contains(wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST));
    }

    #[test]
    fn index_target_maps_to_index_usage() {
        let u = wgpu_usages(BufferTarget::Index, BufferUsage::Static);
        assert_eq!(u, wgpu::BufferUsages::INDEX);
    }
}
