use winit::dpi::PhysicalSize;

/// Device handles plus the surface the mesh is drawn onto.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub format: wgpu::TextureFormat,
    pub size: PhysicalSize<u32>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
    ) -> Self {
        Self { device, queue, format, size }
    }

    /// Scale applied to NDC x/y so a unit circle stays round on this surface.
    ///
    /// Identity when `preserve_aspect` is off or the surface is minimized.
    pub fn aspect_scale(&self, preserve_aspect: bool) -> [f32; 2] {
        aspect_scale(self.size, preserve_aspect)
    }
}

fn aspect_scale(size: PhysicalSize<u32>, preserve_aspect: bool) -> [f32; 2] {
    if !preserve_aspect || size.width == 0 || size.height == 0 {
        return [1.0, 1.0];
    }
    let (w, h) = (size.width as f32, size.height as f32);
    if w >= h { [h / w, 1.0] } else { [1.0, w / h] }
}

/// Encoder and color view of the frame being recorded.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }

    /// Begins a single-attachment pass over the color view.
    ///
    /// `LoadOp::Clear` wipes the frame; `LoadOp::Load` draws over what is there.
    pub fn pass(&mut self, label: &str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> PhysicalSize<u32> {
        PhysicalSize::new(w, h)
    }

    #[test]
    fn landscape_squeezes_x() {
        assert_eq!(aspect_scale(size(1600, 800), true), [0.5, 1.0]);
    }

    #[test]
    fn portrait_squeezes_y() {
        assert_eq!(aspect_scale(size(400, 800), true), [1.0, 0.5]);
    }

    #[test]
    fn square_or_disabled_is_identity() {
        assert_eq!(aspect_scale(size(720, 720), true), [1.0, 1.0]);
        assert_eq!(aspect_scale(size(1600, 800), false), [1.0, 1.0]);
    }

    #[test]
    fn minimized_surface_is_identity() {
        assert_eq!(aspect_scale(size(0, 800), true), [1.0, 1.0]);
        assert_eq!(aspect_scale(size(800, 0), true), [1.0, 1.0]);
    }
}
