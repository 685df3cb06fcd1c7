use std::path::PathBuf;

use crate::geometry::{build_quad, AnnulusParams, CircleParams, ColorVertex, Shape, ShapeMesh, Vertex};
use crate::paint::Color;

use super::layout::VertexLayout;
use super::mesh::GpuMesh;
use super::program::Program;
use super::shader::{Shader, ShaderStage};
use super::{RenderCtx, RenderError, RenderTarget};

const COLORED_WGSL: &str = include_str!("shaders/colored.wgsl");
const FLAT_WGSL: &str = include_str!("shaders/flat.wgsl");

/// Environment variable overriding [`ContextConfig::shader_dir`].
pub const SHADER_DIR_ENV: &str = "TRIFAN_SHADER_DIR";

/// Rendering context configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    /// Directory holding `colored.wgsl` and `flat.wgsl`.
    ///
    /// `None` uses the shaders embedded in the crate.
    pub shader_dir: Option<PathBuf>,

    /// Color the frame is cleared to before drawing.
    pub clear_color: Color,

    /// Scale x or y so that shapes keep their proportions on non-square surfaces.
    pub preserve_aspect: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            shader_dir: None,
            clear_color: Color::rgba(0.0, 0.1, 0.2, 0.0),
            preserve_aspect: true,
        }
    }
}

impl ContextConfig {
    /// Defaults, with `shader_dir` taken from `TRIFAN_SHADER_DIR` when set.
    pub fn from_env() -> Self {
        Self {
            shader_dir: std::env::var_os(SHADER_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }
}

/// Owns the two programs and the mesh currently bound for drawing.
///
/// Loading a shape replaces the bound mesh wholesale. A shape that fails to
/// build or upload leaves the previous mesh in place.
pub struct Context {
    config: ContextConfig,
    colored: Program,
    flat: Program,
    mesh: GpuMesh,
    shape: Shape,
}

impl Context {
    /// Compiles and links both programs, then binds the quad.
    pub fn new(ctx: &RenderCtx<'_>, config: ContextConfig) -> Result<Self, RenderError> {
        let colored_layout = VertexLayout::for_vertex::<ColorVertex>()?;
        let flat_layout = VertexLayout::for_vertex::<Vertex>()?;

        let colored = link_program(ctx, &config, "colored", COLORED_WGSL, &colored_layout)?;
        let flat = link_program(ctx, &config, "flat", FLAT_WGSL, &flat_layout)?;

        let quad = GpuMesh::upload(ctx.device, Shape::Quad.name(), &build_quad())?;

        Ok(Self {
            config,
            colored,
            flat,
            mesh: quad,
            shape: Shape::Quad,
        })
    }

    /// Builds `shape`, uploads it and makes it the bound mesh.
    pub fn load(&mut self, ctx: &RenderCtx<'_>, shape: Shape) -> Result<(), RenderError> {
        let name = shape.name();
        let flat = &self.flat;
        let mesh = swap_shape(&mut self.shape, shape, |built| match built {
            ShapeMesh::Colored(mesh) => GpuMesh::upload(ctx.device, name, &mesh),
            ShapeMesh::Flat { mesh, color } => {
                let mesh = GpuMesh::upload(ctx.device, name, &mesh)?;
                flat.set_color(ctx.queue, color)?;
                Ok(mesh)
            }
        })?;

        log::info!("bound {name}: {} indices", mesh.index_count());

        // Old buffers are released here.
        self.mesh = mesh;
        Ok(())
    }

    pub fn create_quad(&mut self, ctx: &RenderCtx<'_>) -> Result<(), RenderError> {
        self.load(ctx, Shape::Quad)
    }

    /// White filled circle.
    pub fn create_circle(
        &mut self,
        ctx: &RenderCtx<'_>,
        radius: f32,
        segment: u32,
    ) -> Result<(), RenderError> {
        self.load(ctx, Shape::Circle(CircleParams::new(radius, segment)))
    }

    pub fn create_annulus(
        &mut self,
        ctx: &RenderCtx<'_>,
        params: &AnnulusParams,
    ) -> Result<(), RenderError> {
        self.load(ctx, Shape::Annulus(*params))
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.mesh.index_count()
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.config.clear_color
    }

    /// Draws the bound mesh on top of `target`'s current contents.
    pub fn render(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let program = if self.mesh.is_colored() { &self.colored } else { &self.flat };

        let scale = ctx.aspect_scale(self.config.preserve_aspect);
        if let Err(e) = program.set_scale(ctx.queue, scale) {
            log::warn!("failed to update scale uniform of '{}': {e}", program.label());
        }

        let mut rpass = target.pass("trifan mesh pass", wgpu::LoadOp::Load);
        program.bind(&mut rpass);
        self.mesh.draw(&mut rpass);
    }
}

/// Builds `next` and hands it to `upload`.
///
/// `bound` is only replaced once both steps succeed, so a rejected shape or a
/// failed upload leaves the previous binding in place.
fn swap_shape<T>(
    bound: &mut Shape,
    next: Shape,
    upload: impl FnOnce(ShapeMesh) -> Result<T, RenderError>,
) -> Result<T, RenderError> {
    let uploaded = upload(next.build()?)?;
    *bound = next;
    Ok(uploaded)
}

fn link_program(
    ctx: &RenderCtx<'_>,
    config: &ContextConfig,
    name: &str,
    embedded: &str,
    layout: &VertexLayout,
) -> Result<Program, RenderError> {
    let compile = |stage| match &config.shader_dir {
        Some(dir) => Shader::from_file(ctx.device, &dir.join(format!("{name}.wgsl")), stage),
        None => Shader::from_wgsl(ctx.device, &format!("{name}.wgsl"), embedded, stage),
    };
    let vs = compile(ShaderStage::Vertex)?;
    let fs = compile(ShaderStage::Fragment)?;
    log::info!("{name}: vertex shader '{}', fragment shader '{}'", vs.label(), fs.label());

    Program::link(ctx.device, name, &[&fs, &vs], layout, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryError;

    fn circle(radius: f32) -> Shape {
        Shape::Circle(CircleParams::new(radius, 8))
    }

    // ── configuration ────────────────────────────────────────────────────

    #[test]
    fn default_config_uses_embedded_shaders() {
        let config = ContextConfig::default();
        assert!(config.shader_dir.is_none());
        assert!(config.preserve_aspect);
        assert_eq!(config.clear_color, Color::rgba(0.0, 0.1, 0.2, 0.0));
    }

    // ── shape swapping ───────────────────────────────────────────────────

    #[test]
    fn rejected_shape_keeps_previous_binding() {
        let mut bound = Shape::Quad;
        let mut uploads = 0;
        let res = swap_shape(&mut bound, circle(-1.0), |_| {
            uploads += 1;
            Ok(())
        });
        assert!(matches!(
            res,
            Err(RenderError::Geometry(GeometryError::InvalidRadius { .. }))
        ));
        assert_eq!(uploads, 0);
        assert_eq!(bound, Shape::Quad);
    }

    #[test]
    fn failed_upload_keeps_previous_binding() {
        let mut bound = circle(0.5);
        let res: Result<(), _> = swap_shape(&mut bound, Shape::Quad, |_| {
            Err(RenderError::resource("quad vertices", "device lost"))
        });
        assert!(matches!(res, Err(RenderError::ResourceCreation { .. })));
        assert_eq!(bound, circle(0.5));
    }

    #[test]
    fn successful_swap_binds_new_shape() {
        let mut bound = Shape::Quad;
        let indices = swap_shape(&mut bound, circle(0.5), |mesh| Ok(mesh.index_count()));
        assert_eq!(indices.ok(), Some(24));
        assert_eq!(bound, circle(0.5));
    }
}
