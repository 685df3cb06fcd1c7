//! Procedural 2D geometry.
//!
//! Builders are pure functions: they validate their arguments, then return a
//! fresh [`Mesh`] in normalized device coordinates (origin at the center,
//! +Y up, z = 0). Uploading and drawing is the job of `render`.
//!
//! Angles are in degrees, measured counter-clockwise from +X.

mod annulus;
mod circle;
mod error;
mod mesh;
mod quad;
mod shape;
mod vertex;

pub use annulus::{build_annulus, AnnulusParams};
pub use circle::{build_circle, CircleParams};
pub use error::GeometryError;
pub use mesh::Mesh;
pub use quad::build_quad;
pub use shape::{Shape, ShapeMesh};
pub use vertex::{ColorVertex, MeshVertex, Vertex};

/// Smallest segment count that still encloses an area.
pub const MIN_SEGMENTS: u32 = 3;

/// Largest accepted segment count.
///
/// A memory limit, well below the point where an annulus's `6·segment`
/// indices stop fitting the `u32` draw count.
pub const MAX_SEGMENTS: u32 = 1 << 20;

/// One full revolution, in degrees.
pub const FULL_TURN: f32 = 360.0;

fn check_radius(name: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius { name, value })
    }
}

fn check_segments(segment: u32) -> Result<(), GeometryError> {
    if segment < MIN_SEGMENTS {
        return Err(GeometryError::TooFewSegments { min: MIN_SEGMENTS, got: segment });
    }
    if segment > MAX_SEGMENTS {
        return Err(GeometryError::TooManySegments { max: MAX_SEGMENTS, got: segment });
    }
    Ok(())
}

/// Point on a circle of `radius` at `degrees`, in the z = 0 plane.
#[inline]
fn ring_vertex(radius: f32, degrees: f32) -> Vertex {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vertex::new(radius * cos, radius * sin, 0.0)
}

#[cfg(test)]
pub(crate) mod test_util {
    /// Distance from the origin in the XY plane.
    pub fn radius_of(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1]).sqrt()
    }

    /// Twice the signed area of a triangle; positive when counter-clockwise.
    pub fn signed_area2([a, b, c]: [[f32; 3]; 3]) -> f32 {
        (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
    }

    pub fn approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }
}
