use crate::paint::Color;

use super::mesh::Mesh;
use super::vertex::ColorVertex;

const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // top-right, bottom-right, top-left
    1, 2, 3, // bottom-right, bottom-left, top-left
];

/// Fixed colored quad spanning `[-0.5, 0.5]` on both axes.
///
/// Corner colors: red (top-right), green (bottom-right), blue (bottom-left),
/// yellow (top-left). The two triangles share the diagonal 1–3.
pub fn build_quad() -> Mesh<ColorVertex> {
    let vertices = vec![
        ColorVertex::new([0.5, 0.5, 0.0], Color::RED.to_rgb()),
        ColorVertex::new([0.5, -0.5, 0.0], Color::GREEN.to_rgb()),
        ColorVertex::new([-0.5, -0.5, 0.0], Color::BLUE.to_rgb()),
        ColorVertex::new([-0.5, 0.5, 0.0], Color::YELLOW.to_rgb()),
    ];

    Mesh {
        vertices,
        indices: QUAD_INDICES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_has_four_vertices_and_two_triangles() {
        let mesh = build_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert!(mesh.indices.iter().all(|&i| i < 4));
        mesh.validate().unwrap();
    }

    #[test]
    fn quad_corners_and_colors() {
        let mesh = build_quad();
        let top_right = mesh.vertices[0];
        assert_eq!(top_right.position, [0.5, 0.5, 0.0]);
        assert_eq!(top_right.color, [1.0, 0.0, 0.0]);

        let top_left = mesh.vertices[3];
        assert_eq!(top_left.position, [-0.5, 0.5, 0.0]);
        assert_eq!(top_left.color, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn quad_triangles_share_diagonal() {
        let tris: Vec<_> = build_quad().triangles().collect();
        assert_eq!(tris, vec![[0, 1, 3], [1, 2, 3]]);
    }

    #[test]
    fn quad_is_deterministic() {
        assert_eq!(build_quad(), build_quad());
    }
}
