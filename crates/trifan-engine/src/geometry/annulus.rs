use crate::paint::Color;

use super::error::GeometryError;
use super::mesh::Mesh;
use super::vertex::Vertex;
use super::{check_radius, check_segments, ring_vertex, FULL_TURN};

/// Parameters for [`build_annulus`].
///
/// The arc runs counter-clockwise from `start_angle` to `end_angle` (degrees).
/// A sweep of 360° or more is drawn as a closed ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnnulusParams {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub segment: u32,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Uniform fill color; alpha is ignored and drawn as 1.0.
    pub color: Color,
}

impl AnnulusParams {
    /// Closed ring between two radii.
    pub const fn full(outer_radius: f32, inner_radius: f32, segment: u32, color: Color) -> Self {
        Self {
            outer_radius,
            inner_radius,
            segment,
            start_angle: 0.0,
            end_angle: FULL_TURN,
            color,
        }
    }

    #[inline]
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn is_full_turn(&self) -> bool {
        self.sweep() >= FULL_TURN
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        check_radius("outer_radius", self.outer_radius)?;
        check_radius("inner_radius", self.inner_radius)?;
        if self.inner_radius >= self.outer_radius {
            return Err(GeometryError::InvertedRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        check_segments(self.segment)?;

        let (start, end) = (self.start_angle, self.end_angle);
        if !start.is_finite() || !end.is_finite() {
            return Err(GeometryError::NonFiniteAngle { start, end });
        }
        if self.sweep() <= 0.0 {
            return Err(GeometryError::EmptySweep { start, end });
        }

        let c = self.color;
        if !c.is_rgb_normalized() {
            return Err(GeometryError::ColorOutOfRange { r: c.r, g: c.g, b: c.b });
        }
        Ok(())
    }

    /// Angle in degrees of ring position `i` in `0..=segment`.
    fn angle_at(&self, i: u32) -> f32 {
        if self.is_full_turn() {
            // Closed ring: start offset dropped, last position lands on the first.
            (FULL_TURN / self.segment as f32) * (i % self.segment) as f32
        } else {
            self.start_angle + (self.sweep() / self.segment as f32) * i as f32
        }
    }

    pub fn build(&self) -> Result<Mesh<Vertex>, GeometryError> {
        build_annulus(self)
    }
}

/// Ring (or ring sector) between `inner_radius` and `outer_radius`.
///
/// Layout: `segment + 1` inner vertices followed by `segment + 1` outer
/// vertices, both walking the arc in the same direction. Every adjacent
/// inner/outer pair is joined by two triangles, `2·segment` in total; for a
/// closed ring the last pair coincides with the first, which closes the seam.
pub fn build_annulus(params: &AnnulusParams) -> Result<Mesh<Vertex>, GeometryError> {
    params.validate()?;

    let segment = params.segment;
    let ring = segment as usize + 1;

    let mut vertices = Vec::with_capacity(2 * ring);
    for radius in [params.inner_radius, params.outer_radius] {
        vertices.extend((0..=segment).map(|i| ring_vertex(radius, params.angle_at(i))));
    }

    let outer = segment + 1;
    let indices = (0..segment)
        .flat_map(|i| [i, outer + i, i + 1, i + 1, outer + i, outer + i + 1])
        .collect();

    Ok(Mesh { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_util::{approx_eq, radius_of, signed_area2};
    use crate::geometry::MAX_SEGMENTS;

    fn half(segment: u32) -> AnnulusParams {
        AnnulusParams {
            outer_radius: 2.0,
            inner_radius: 1.0,
            segment,
            start_angle: 0.0,
            end_angle: 180.0,
            color: Color::RED,
        }
    }

    fn area(mesh: &Mesh<Vertex>) -> f32 {
        mesh.triangle_positions().map(|t| signed_area2(t) / 2.0).sum()
    }

    // ── partial arc ───────────────────────────────────────────────────────

    #[test]
    fn half_annulus_scenario() {
        let mesh = build_annulus(&half(8)).unwrap();
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.triangle_count(), 16);
        mesh.validate().unwrap();

        let (inner, outer) = mesh.vertices.split_at(9);
        assert!(inner.iter().all(|v| (radius_of(v.position) - 1.0).abs() < 1e-5));
        assert!(outer.iter().all(|v| (radius_of(v.position) - 2.0).abs() < 1e-5));
        assert!(approx_eq(inner[0].position, [1.0, 0.0, 0.0]));
        assert!(approx_eq(outer[8].position, [-2.0, 0.0, 0.0]));
    }

    #[test]
    fn half_annulus_has_no_gaps() {
        // Polygonal half ring: (n/2)·sin(π/n)·(R² − r²) with n = segment.
        let segment = 8;
        let mesh = build_annulus(&half(segment)).unwrap();
        let n = segment as f32;
        let expected = 0.5 * n * (std::f32::consts::PI / n).sin() * (4.0 - 1.0);
        assert!((area(&mesh) - expected).abs() < 1e-4);
    }

    #[test]
    fn every_quad_is_covered() {
        let segment = 5;
        let outer = segment + 1;
        let mesh = build_annulus(&half(segment)).unwrap();
        let tris: Vec<_> = mesh.triangles().collect();
        for i in 0..segment {
            assert!(tris.contains(&[i, outer + i, i + 1]));
            assert!(tris.contains(&[i + 1, outer + i, outer + i + 1]));
        }
    }

    #[test]
    fn partial_arc_honors_start_angle() {
        let params = AnnulusParams { start_angle: 90.0, end_angle: 270.0, ..half(4) };
        let mesh = build_annulus(&params).unwrap();
        assert!(approx_eq(mesh.vertices[0].position, [0.0, 1.0, 0.0]));
        assert!(approx_eq(mesh.vertices[4].position, [0.0, -1.0, 0.0]));
        assert!(approx_eq(mesh.vertices[5].position, [0.0, 2.0, 0.0]));
    }

    #[test]
    fn triangles_are_counter_clockwise() {
        let mesh = build_annulus(&half(12)).unwrap();
        assert!(mesh.triangle_positions().all(|t| signed_area2(t) > 0.0));
    }

    // ── full revolution ───────────────────────────────────────────────────

    #[test]
    fn full_ring_closes_seam() {
        let segment = 16;
        let params = AnnulusParams::full(1.0, 0.5, segment, Color::WHITE);
        let mesh = build_annulus(&params).unwrap();
        let ring = segment as usize + 1;

        assert_eq!(mesh.vertex_count(), 2 * ring);
        assert_eq!(mesh.triangle_count(), 2 * segment as usize);
        assert_eq!(mesh.vertices[0], mesh.vertices[ring - 1]);
        assert_eq!(mesh.vertices[ring], mesh.vertices[2 * ring - 1]);

        let n = segment as f32;
        let expected = 0.5 * n * (2.0 * std::f32::consts::PI / n).sin() * (1.0 - 0.25);
        assert!((area(&mesh) - expected).abs() < 1e-4);
    }

    #[test]
    fn full_ring_vertices_sit_on_their_radii() {
        for segment in [3, 7, 64] {
            let params = AnnulusParams::full(0.8, 0.3, segment, Color::WHITE);
            let mesh = build_annulus(&params).unwrap();
            let (inner, outer) = mesh.vertices.split_at(segment as usize + 1);
            assert!(inner.iter().all(|v| (radius_of(v.position) - 0.3).abs() < 1e-5));
            assert!(outer.iter().all(|v| (radius_of(v.position) - 0.8).abs() < 1e-5));
        }
    }

    #[test]
    fn sweep_beyond_full_turn_is_one_ring() {
        let wide = AnnulusParams { start_angle: 45.0, end_angle: 900.0, ..half(10) };
        let full = AnnulusParams::full(2.0, 1.0, 10, Color::RED);
        assert!(wide.is_full_turn());
        assert_eq!(
            build_annulus(&wide).unwrap().vertices,
            build_annulus(&full).unwrap().vertices
        );
    }

    #[test]
    fn repeated_builds_are_identical() {
        assert_eq!(build_annulus(&half(24)), build_annulus(&half(24)));
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_inverted_or_equal_radii() {
        let equal = AnnulusParams { inner_radius: 2.0, ..half(8) };
        let inverted = AnnulusParams { inner_radius: 3.0, ..half(8) };
        assert!(matches!(equal.validate(), Err(GeometryError::InvertedRadii { .. })));
        assert!(matches!(build_annulus(&inverted), Err(GeometryError::InvertedRadii { .. })));
    }

    #[test]
    fn rejects_non_positive_inner_radius() {
        let params = AnnulusParams { inner_radius: 0.0, ..half(8) };
        assert!(matches!(
            params.validate(),
            Err(GeometryError::InvalidRadius { name: "inner_radius", .. })
        ));
    }

    #[test]
    fn rejects_too_few_segments() {
        assert!(build_annulus(&half(3)).is_ok());
        assert!(matches!(
            build_annulus(&half(2)),
            Err(GeometryError::TooFewSegments { got: 2, .. })
        ));
    }

    #[test]
    fn rejects_empty_or_reversed_sweep() {
        let empty = AnnulusParams { end_angle: 0.0, ..half(8) };
        let reversed = AnnulusParams { start_angle: 90.0, end_angle: 10.0, ..half(8) };
        assert!(matches!(empty.validate(), Err(GeometryError::EmptySweep { .. })));
        assert!(matches!(reversed.validate(), Err(GeometryError::EmptySweep { .. })));
    }

    #[test]
    fn segment_count_is_capped() {
        assert!(half(MAX_SEGMENTS).validate().is_ok());
        assert!(matches!(
            half(MAX_SEGMENTS + 1).validate(),
            Err(GeometryError::TooManySegments { .. })
        ));
    }

    #[test]
    fn rejects_nan_angle() {
        let params = AnnulusParams { end_angle: f32::NAN, ..half(8) };
        assert!(matches!(params.validate(), Err(GeometryError::NonFiniteAngle { .. })));
    }

    #[test]
    fn rejects_color_out_of_range() {
        let params = AnnulusParams { color: Color::rgb(1.2, 0.0, 0.0), ..half(8) };
        assert!(matches!(params.validate(), Err(GeometryError::ColorOutOfRange { .. })));

        // Alpha does not take part in validation.
        let translucent = AnnulusParams { color: Color::rgba(0.5, 0.5, 0.5, 7.0), ..half(8) };
        assert!(translucent.validate().is_ok());
    }
}
