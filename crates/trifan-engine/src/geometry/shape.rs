use crate::paint::Color;

use super::annulus::{build_annulus, AnnulusParams};
use super::circle::{build_circle, CircleParams};
use super::error::GeometryError;
use super::mesh::Mesh;
use super::quad::build_quad;
use super::vertex::{ColorVertex, Vertex};

/// Shape selector with its parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Quad,
    Circle(CircleParams),
    Annulus(AnnulusParams),
}

/// Output of [`Shape::build`].
///
/// The two variants need different vertex layouts and therefore different
/// programs on the GPU side.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeMesh {
    /// Per-vertex colors.
    Colored(Mesh<ColorVertex>),
    /// Positions only, filled with one uniform color.
    Flat { mesh: Mesh<Vertex>, color: Color },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Quad => "quad",
            Shape::Circle(_) => "circle",
            Shape::Annulus(p) if p.is_full_turn() => "ring",
            Shape::Annulus(_) => "arc",
        }
    }

    /// Number of segments, `None` for the fixed quad.
    pub fn segment(&self) -> Option<u32> {
        match self {
            Shape::Quad => None,
            Shape::Circle(p) => Some(p.segment),
            Shape::Annulus(p) => Some(p.segment),
        }
    }

    /// Same shape with a different segment count. The quad is returned as is.
    pub fn with_segment(self, segment: u32) -> Self {
        match self {
            Shape::Quad => Shape::Quad,
            Shape::Circle(p) => Shape::Circle(CircleParams { segment, ..p }),
            Shape::Annulus(p) => Shape::Annulus(AnnulusParams { segment, ..p }),
        }
    }

    pub fn build(&self) -> Result<ShapeMesh, GeometryError> {
        match self {
            Shape::Quad => Ok(ShapeMesh::Colored(build_quad())),
            Shape::Circle(p) => Ok(ShapeMesh::Flat {
                mesh: build_circle(p.radius, p.segment)?,
                color: Color::WHITE,
            }),
            Shape::Annulus(p) => Ok(ShapeMesh::Flat {
                mesh: build_annulus(p)?,
                color: p.color.opaque(),
            }),
        }
    }
}

impl ShapeMesh {
    pub fn index_count(&self) -> u32 {
        match self {
            ShapeMesh::Colored(mesh) => mesh.index_count(),
            ShapeMesh::Flat { mesh, .. } => mesh.index_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_builds_colored_mesh() {
        let built = Shape::Quad.build().unwrap();
        assert!(matches!(built, ShapeMesh::Colored(_)));
        assert_eq!(built.index_count(), 6);
    }

    #[test]
    fn circle_is_white() {
        let built = Shape::Circle(CircleParams::new(0.5, 6)).build().unwrap();
        let ShapeMesh::Flat { mesh, color } = built else { panic!("expected flat mesh") };
        assert_eq!(color, Color::WHITE);
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn annulus_color_is_forced_opaque() {
        let params = AnnulusParams {
            color: Color::rgba(0.0, 0.5, 1.0, 0.25),
            ..AnnulusParams::full(0.8, 0.4, 12, Color::WHITE)
        };
        let ShapeMesh::Flat { color, .. } = Shape::Annulus(params).build().unwrap() else {
            panic!("expected flat mesh")
        };
        assert_eq!(color, Color::rgb(0.0, 0.5, 1.0));
    }

    #[test]
    fn with_segment_replaces_count() {
        let circle = Shape::Circle(CircleParams::new(0.5, 6)).with_segment(10);
        assert_eq!(circle.segment(), Some(10));
        assert_eq!(Shape::Quad.with_segment(10), Shape::Quad);
    }

    #[test]
    fn invalid_parameters_propagate() {
        let err = Shape::Circle(CircleParams::new(0.5, 2)).build().unwrap_err();
        assert!(matches!(err, GeometryError::TooFewSegments { .. }));
    }

    #[test]
    fn names_distinguish_ring_and_arc() {
        let ring = AnnulusParams::full(1.0, 0.5, 8, Color::RED);
        let arc = AnnulusParams { end_angle: 90.0, ..ring };
        assert_eq!(Shape::Annulus(ring).name(), "ring");
        assert_eq!(Shape::Annulus(arc).name(), "arc");
    }
}
