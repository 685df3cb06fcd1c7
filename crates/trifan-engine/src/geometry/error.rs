use thiserror::Error;

/// Rejected shape parameters or a malformed mesh.
///
/// Every variant is an invalid-argument failure: nothing is retried and no
/// partial mesh is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidRadius { name: &'static str, value: f32 },

    #[error("at least {min} segments are required, got {got}")]
    TooFewSegments { min: u32, got: u32 },

    #[error("at most {max} segments are supported, got {got}")]
    TooManySegments { max: u32, got: u32 },

    #[error("inner radius {inner} must be smaller than outer radius {outer}")]
    InvertedRadii { inner: f32, outer: f32 },

    #[error("angles must be finite, got start={start} end={end}")]
    NonFiniteAngle { start: f32, end: f32 },

    #[error("arc from {start}° to {end}° sweeps no angle")]
    EmptySweep { start: f32, end: f32 },

    #[error("color channels must lie in [0, 1], got ({r}, {g}, {b})")]
    ColorOutOfRange { r: f32, g: f32, b: f32 },

    #[error("index {index} at position {position} exceeds vertex count {vertex_count}")]
    IndexOutOfRange {
        index: u32,
        position: usize,
        vertex_count: usize,
    },

    #[error("index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
}
