use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

use super::buffer::{Buffer, BufferTarget, BufferUsage};
use super::layout::VertexLayout;
use super::shader::{Shader, ShaderStage};
use super::RenderError;

// ── uniform ───────────────────────────────────────────────────────────────

/// Program-wide uniform block (32 bytes).
///
///  offset  0  color  [f32; 4]
///  offset 16  scale  [f32; 2]   aspect correction applied to x/y
///  offset 24  _pad   [f32; 2]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct ProgramUniform {
    pub color: [f32; 4],
    pub scale: [f32; 2],
    pub _pad: [f32; 2],
}

const COLOR_OFFSET: u64 = 0;
const SCALE_OFFSET: u64 = 16;

impl Default for ProgramUniform {
    fn default() -> Self {
        Self {
            color: Color::WHITE.to_array(),
            scale: [1.0, 1.0],
            _pad: [0.0; 2],
        }
    }
}

fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ProgramUniform>() as u64)
        .expect("ProgramUniform has non-zero size by construction")
}

/// Picks the single shader for `stage` out of a link set.
fn stage_shader<'s>(
    label: &str,
    shaders: &[&'s Shader],
    stage: ShaderStage,
) -> Result<&'s Shader, RenderError> {
    let mut found = shaders.iter().filter(|s| s.stage() == stage);
    match (found.next(), found.next()) {
        (Some(shader), None) => Ok(*shader),
        (None, _) => Err(RenderError::resource(
            format!("program '{label}'"),
            format!("no {stage:?} shader"),
        )),
        (Some(_), Some(_)) => Err(RenderError::resource(
            format!("program '{label}'"),
            format!("more than one {stage:?} shader"),
        )),
    }
}

// ── program ───────────────────────────────────────────────────────────────

/// Linked vertex + fragment pair: render pipeline, uniform buffer, bind group.
///
/// The pipeline is built for one surface format and one vertex layout.
pub struct Program {
    label: String,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform: Buffer,
}

impl Program {
    /// Links exactly one vertex and one fragment shader against `layout`.
    pub fn link(
        device: &wgpu::Device,
        label: &str,
        shaders: &[&Shader],
        layout: &VertexLayout,
        format: wgpu::TextureFormat,
    ) -> Result<Self, RenderError> {
        let vs = stage_shader(label, shaders, ShaderStage::Vertex)?;
        let fs = stage_shader(label, shaders, ShaderStage::Fragment)?;
        if layout.is_empty() {
            return Err(RenderError::resource(
                format!("program '{label}'"),
                "vertex layout has no attributes",
            ));
        }

        let uniform = Buffer::with_slice(
            device,
            BufferTarget::Uniform,
            BufferUsage::Dynamic,
            &format!("{label} ubo"),
            &[ProgramUniform::default()],
        )?;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{label} bgl")),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(uniform_min_binding_size()),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.raw().as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} pipeline layout")),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: vs.module(),
                entry_point: Some(vs.entry_point()),
                compilation_options: Default::default(),
                buffers: &[layout.buffer_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: fs.module(),
                entry_point: Some(fs.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!(
            "linked program '{label}' ({} + {})",
            vs.label(),
            fs.label()
        );

        Ok(Self {
            label: label.to_string(),
            pipeline,
            bind_group,
            uniform,
        })
    }

    /// Sets the `color` uniform to `(r, g, b, a)`.
    pub fn set_uniform4f(
        &self,
        queue: &wgpu::Queue,
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    ) -> Result<(), RenderError> {
        self.uniform
            .write(queue, COLOR_OFFSET, bytemuck::cast_slice(&[r, g, b, a]))
    }

    pub fn set_color(&self, queue: &wgpu::Queue, color: Color) -> Result<(), RenderError> {
        self.set_uniform4f(queue, color.r, color.g, color.b, color.a)
    }

    pub fn set_scale(&self, queue: &wgpu::Queue, scale: [f32; 2]) -> Result<(), RenderError> {
        self.uniform
            .write(queue, SCALE_OFFSET, bytemuck::cast_slice(&scale))
    }

    /// Makes this program current for subsequent draws in `rpass`.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_std140_sized() {
        assert_eq!(std::mem::size_of::<ProgramUniform>(), 32);
        assert_eq!(uniform_min_binding_size().get(), 32);
    }

    #[test]
    fn uniform_offsets_match_shader_block() {
        let u = ProgramUniform {
            color: [1.0, 2.0, 3.0, 4.0],
            scale: [5.0, 6.0],
            _pad: [0.0; 2],
        };
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats[(COLOR_OFFSET / 4) as usize], 1.0);
        assert_eq!(floats[(SCALE_OFFSET / 4) as usize], 5.0);
    }

    #[test]
    fn default_uniform_is_white_unscaled() {
        let u = ProgramUniform::default();
        assert_eq!(u.color, [1.0; 4]);
        assert_eq!(u.scale, [1.0, 1.0]);
    }
}
