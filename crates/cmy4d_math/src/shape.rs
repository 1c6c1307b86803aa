//! Primitive 3D shapes
//!
//! Shapes are pure geometry: vertex positions plus index lists for edges and
//! triangles. Colors and transforms live on the scene nodes that use them.

use crate::Vec3;

/// An edge as a pair of vertex indices
pub type Edge = [usize; 2];

/// A triangle as three vertex indices
pub type Triangle = [usize; 3];

/// Trait for shapes that can be drawn as filled triangles or as line edges
pub trait Shape3D: Send + Sync {
    /// Vertices in local space
    fn vertices(&self) -> &[Vec3];

    /// Outline edges (what an edge-set wireframe draws)
    fn edges(&self) -> &[Edge];

    /// Triangle decomposition (what a filled mesh draws)
    fn triangles(&self) -> &[Triangle];

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

/// Quads of the box, each listed in cyclic order
const BOX_QUADS: [[usize; 4]; 6] = [
    [0, 4, 6, 2], // -x
    [1, 3, 7, 5], // +x
    [0, 1, 5, 4], // -y
    [2, 6, 7, 3], // +y
    [0, 2, 3, 1], // -z
    [4, 5, 7, 6], // +z
];

/// An axis-aligned box centered at the origin
///
/// Vertex `i` takes the sign of each coordinate from the bits of `i`
/// (bit 0 = x, bit 1 = y, bit 2 = z; clear = negative), giving the order
/// `(-,-,-), (+,-,-), (-,+,-), (+,+,-), (-,-,+), (+,-,+), (-,+,+), (+,+,+)`.
#[derive(Clone, Debug)]
pub struct BoxShape {
    half_size: f32,
    vertices: [Vec3; 8],
    edges: [Edge; 12],
    triangles: [Triangle; 12],
}

impl BoxShape {
    /// Create a cube with the given full side length
    pub fn new(size: f32) -> Self {
        let h = size * 0.5;
        let mut vertices = [Vec3::ZERO; 8];
        for (i, v) in vertices.iter_mut().enumerate() {
            *v = Self::corner(i, h);
        }

        Self {
            half_size: h,
            vertices,
            edges: Self::compute_edges(),
            triangles: Self::compute_triangles(),
        }
    }

    /// Position of corner `index` for a box of half-extent `h`
    pub fn corner(index: usize, h: f32) -> Vec3 {
        let sign = |bit: usize| if index & (1 << bit) != 0 { h } else { -h };
        Vec3::new(sign(0), sign(1), sign(2))
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.half_size
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.half_size * 2.0
    }

    /// Vertex pairs that differ in exactly one coordinate
    fn compute_edges() -> [Edge; 12] {
        let mut edges = [[0usize; 2]; 12];
        let mut n = 0;
        for i in 0usize..8 {
            for j in (i + 1)..8 {
                if (i ^ j).count_ones() == 1 {
                    edges[n] = [i, j];
                    n += 1;
                }
            }
        }
        edges
    }

    fn compute_triangles() -> [Triangle; 12] {
        let mut triangles = [[0usize; 3]; 12];
        for (q, quad) in BOX_QUADS.iter().enumerate() {
            triangles[q * 2] = [quad[0], quad[1], quad[2]];
            triangles[q * 2 + 1] = [quad[0], quad[2], quad[3]];
        }
        triangles
    }
}

impl Shape3D for BoxShape {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

/// A square in the local XY plane, centered at the origin
#[derive(Clone, Debug)]
pub struct Quad {
    size: f32,
    vertices: [Vec3; 4],
}

const QUAD_EDGES: [Edge; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];
const QUAD_TRIANGLES: [Triangle; 2] = [[0, 1, 2], [0, 2, 3]];

impl Quad {
    /// Create a square with the given side length
    pub fn new(size: f32) -> Self {
        let h = size * 0.5;
        Self {
            size,
            vertices: [
                Vec3::new(-h, -h, 0.0),
                Vec3::new(h, -h, 0.0),
                Vec3::new(h, h, 0.0),
                Vec3::new(-h, h, 0.0),
            ],
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Shape3D for Quad {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &QUAD_EDGES
    }

    fn triangles(&self) -> &[Triangle] {
        &QUAD_TRIANGLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_box_vertex_order() {
        let b = BoxShape::new(2.0);
        let expected = [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        assert_eq!(b.vertices(), &expected);
    }

    #[test]
    fn test_box_has_twelve_unit_edges() {
        let b = BoxShape::new(2.0);
        assert_eq!(b.edge_count(), 12);
        for [i, j] in b.edges() {
            let d = b.vertices()[*j] - b.vertices()[*i];
            assert!((d.length() - 2.0).abs() < 1e-6, "edge ({}, {}) has length {}", i, j, d.length());
        }
    }

    #[test]
    fn test_box_triangles_cover_all_vertices() {
        let b = BoxShape::new(1.0);
        assert_eq!(b.triangles().len(), 12);
        let used: HashSet<usize> = b.triangles().iter().flatten().copied().collect();
        assert_eq!(used.len(), 8);
    }

    #[test]
    fn test_box_size() {
        let b = BoxShape::new(3.0);
        assert_eq!(b.size(), 3.0);
        assert_eq!(b.half_size(), 1.5);
    }

    #[test]
    fn test_quad_lies_in_xy_plane() {
        let q = Quad::new(2.0);
        assert_eq!(q.vertex_count(), 4);
        assert!(q.vertices().iter().all(|v| v.z == 0.0));
        assert!(q.vertices().iter().all(|v| v.x.abs() == 1.0 && v.y.abs() == 1.0));
        assert_eq!(q.edge_count(), 4);
        assert_eq!(q.triangles().len(), 2);
    }
}
