//! Paint model shared between geometry and renderers.
//!
//! Scope is a single straight-alpha RGBA color. Per-vertex colors live in
//! `geometry::ColorVertex`; this type covers the uniform and clear colors.

pub mod color;

pub use color::Color;
