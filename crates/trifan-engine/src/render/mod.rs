//! GPU side of the sandbox.
//!
//! Small wrappers over wgpu that mirror the classic buffer / vertex layout /
//! shader / program split, plus the [`Context`] that owns the bound mesh.
//!
//! Convention:
//! - geometry arrives in NDC (see `geometry`)
//! - the vertex shaders only apply the aspect-correction scale uniform

mod buffer;
mod context;
mod ctx;
mod error;
mod layout;
mod mesh;
mod program;
mod shader;

pub use buffer::{Buffer, BufferTarget, BufferUsage};
pub use context::{Context, ContextConfig, SHADER_DIR_ENV};
pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use layout::{attrib_format, AttribType, VertexLayout};
pub use mesh::GpuMesh;
pub use program::Program;
pub use shader::{find_entry_point, Shader, ShaderStage};
