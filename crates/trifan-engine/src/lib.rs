//! trifan engine crate.
//!
//! Procedural 2D meshes (quad, circle fan, annulus) and the minimal wgpu
//! plumbing that uploads and draws them.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
