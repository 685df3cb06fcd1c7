use super::error::GeometryError;
use super::mesh::Mesh;
use super::vertex::Vertex;
use super::{check_radius, check_segments, ring_vertex, FULL_TURN};

/// Parameters for [`build_circle`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleParams {
    pub radius: f32,
    pub segment: u32,
}

impl CircleParams {
    #[inline]
    pub const fn new(radius: f32, segment: u32) -> Self {
        Self { radius, segment }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        check_radius("radius", self.radius)?;
        check_segments(self.segment)
    }

    pub fn build(&self) -> Result<Mesh<Vertex>, GeometryError> {
        build_circle(self.radius, self.segment)
    }
}

/// Filled circle as a triangle fan around the origin.
///
/// Layout: vertex 0 is the center, vertices `1..=segment + 1` walk the rim
/// counter-clockwise from 0°. The last rim vertex repeats the first so the fan
/// closes without wrapping indices: `segment + 2` vertices, `segment`
/// triangles `(0, i + 1, i + 2)`.
pub fn build_circle(radius: f32, segment: u32) -> Result<Mesh<Vertex>, GeometryError> {
    check_radius("radius", radius)?;
    check_segments(segment)?;

    let step = FULL_TURN / segment as f32;

    let mut vertices = Vec::with_capacity(segment as usize + 2);
    vertices.push(Vertex::new(0.0, 0.0, 0.0));
    // `i % segment` snaps the closing vertex onto the first one exactly.
    vertices.extend((0..=segment).map(|i| ring_vertex(radius, step * (i % segment) as f32)));

    let indices = (0..segment).flat_map(|i| [0, i + 1, i + 2]).collect();

    Ok(Mesh { vertices, indices })
}
