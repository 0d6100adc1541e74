//! # Polygon for BSP Operations
//!
//! Convex planar polygon carried through BSP construction and clipping.

use super::plane::Plane;
use super::vertex::Vertex;
use glam::DVec3;

/// A convex polygon with the plane it lies in.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    vertices: Vec<Vertex>,
    plane: Plane,
}

impl Polygon {
    /// Builds a polygon from points, deriving the plane from the first three.
    ///
    /// Returns `None` for fewer than three points or a degenerate leading
    /// triangle.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let [a, b, c, ..] = points else {
            return None;
        };
        let plane = Plane::from_points(*a, *b, *c)?;
        Some(Self {
            vertices: points.iter().copied().map(Vertex::new).collect(),
            plane,
        })
    }

    /// Builds a polygon on a known plane (used for split fragments).
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding and plane orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Fan-triangulates the polygon as `(0, i, i + 1)` triples.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        let first = self.vertices[0].pos;
        self.vertices
            .windows(2)
            .skip(1)
            .map(move |w| [first, w[0].pos, w[1].pos])
    }
}
