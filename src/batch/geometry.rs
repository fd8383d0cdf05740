//! Pure functions that turn a primitive description into vertices.
//!
//! Every quad is emitted with its corners in the same order, which is the
//! counter-clockwise order of `Aabb2::to_corners`. The shared index buffer
//! relies on it: `(0, 1, 2)` and `(2, 3, 0)` cover the quad.
//!
//! A negative size mirrors the quad. The corners keep their winding and the
//! texture coordinates are flipped instead.

use crate::math::prelude::{Aabb2, Color, Point2, Vector2};

use super::vertex::{LineVertex, QuadVertex};

/// Number of vertices a quad takes.
pub const QUAD_VERTICES: usize = 4;
/// Number of indices a quad takes.
pub const QUAD_INDICES: usize = 6;
/// Number of vertices a line segment takes.
pub const LINE_VERTICES: usize = 2;

/// Texture coordinates covering the full extent of a texture, matching the
/// corner order of `quad_corners`.
pub const FULL_UVS: [[f32; 2]; 4] = [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]];

/// Computes the four corners of an axis-aligned quad, `center ± |size| / 2`.
pub fn quad_corners(center: Vector2<f32>, size: Vector2<f32>) -> [[f32; 3]; 4] {
    let size = Vector2::new(size.x.abs(), size.y.abs());
    let aabb = Aabb2::from_center(Point2::new(center.x, center.y), size);
    let mut corners = [[0.0; 3]; 4];
    for (dst, src) in corners.iter_mut().zip(aabb.to_corners().iter()) {
        *dst = [src.x, src.y, 0.0];
    }

    corners
}

/// Emits the four vertices of a quad.
pub fn quad(
    center: Vector2<f32>,
    size: Vector2<f32>,
    color: Color<f32>,
    uvs: [[f32; 2]; 4],
    slot: usize,
) -> [QuadVertex; 4] {
    let corners = quad_corners(center, size);
    let uvs = mirror(uvs, size);
    let color = color.rgba();
    let slot = slot as f32;

    let mut verts = [QuadVertex {
        position: [0.0; 3],
        color,
        texcoord: [0.0; 2],
        slot,
    }; 4];

    for i in 0..QUAD_VERTICES {
        verts[i].position = corners[i];
        verts[i].texcoord = uvs[i];
    }

    verts
}

/// Swaps texture coordinates across the axes along which `size` is negative.
fn mirror(mut uvs: [[f32; 2]; 4], size: Vector2<f32>) -> [[f32; 2]; 4] {
    if size.x < 0.0 {
        uvs.swap(0, 1);
        uvs.swap(2, 3);
    }

    if size.y < 0.0 {
        uvs.swap(0, 3);
        uvs.swap(1, 2);
    }

    uvs
}

/// Emits the two vertices of a line segment.
pub fn line(start: Vector2<f32>, end: Vector2<f32>, color: Color<f32>) -> [LineVertex; 2] {
    let color = color.rgba();
    [
        LineVertex {
            position: [start.x, start.y, 0.0],
            color,
        },
        LineVertex {
            position: [end.x, end.y, 0.0],
            color,
        },
    ]
}

/// Generates the index buffer of `quads` quads, `(0, 1, 2, 2, 3, 0)` shifted
/// by four for every quad.
pub fn quad_indices(quads: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(quads * QUAD_INDICES);
    for i in 0..quads {
        let o = (i * QUAD_VERTICES) as u32;
        indices.extend_from_slice(&[o, o + 1, o + 2, o + 2, o + 3, o]);
    }

    indices
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn corners() {
        let corners = quad_corners(Vector2::new(0.0, 0.0), Vector2::new(10.0, 4.0));
        assert_eq!(
            corners,
            [
                [5.0, 2.0, 0.0],
                [-5.0, 2.0, 0.0],
                [-5.0, -2.0, 0.0],
                [5.0, -2.0, 0.0]
            ]
        );
    }

    #[test]
    fn vertices() {
        let verts = quad(
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
            Color::red(),
            FULL_UVS,
            3,
        );

        for (i, v) in verts.iter().enumerate() {
            assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
            assert_eq!(v.texcoord, FULL_UVS[i]);
            assert_eq!(v.slot, 3.0);
        }

        assert_eq!(verts[0].position, [2.0, 2.0, 0.0]);
        assert_eq!(verts[2].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn mirrored() {
        let center = Vector2::new(1.0, 1.0);
        let verts = quad(center, Vector2::new(-2.0, 2.0), Color::red(), FULL_UVS, 0);
        let corners = quad_corners(center, Vector2::new(2.0, 2.0));

        for (i, v) in verts.iter().enumerate() {
            assert_eq!(v.position, corners[i]);
        }

        assert_eq!(verts[0].texcoord, [0.0, 1.0]);
        assert_eq!(verts[1].texcoord, [1.0, 1.0]);
        assert_eq!(verts[2].texcoord, [1.0, 0.0]);
        assert_eq!(verts[3].texcoord, [0.0, 0.0]);

        let verts = quad(center, Vector2::new(-2.0, -2.0), Color::red(), FULL_UVS, 0);
        assert_eq!(verts[0].position, [2.0, 2.0, 0.0]);
        assert_eq!(verts[0].texcoord, [0.0, 0.0]);
        assert_eq!(verts[2].texcoord, [1.0, 1.0]);
    }

    #[test]
    fn lines() {
        let verts = line(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0), Color::blue());
        assert_eq!(verts[0].position, [1.0, 2.0, 0.0]);
        assert_eq!(verts[1].position, [3.0, 4.0, 0.0]);
        assert_eq!(verts[1].color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn indices() {
        assert!(quad_indices(0).is_empty());
        assert_eq!(
            quad_indices(2),
            vec![0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]
        );
        let indices = quad_indices(100);
        assert_eq!(indices.len(), 600);
        assert_eq!(&indices[594..], &[396, 397, 398, 398, 399, 396]);
    }
}
