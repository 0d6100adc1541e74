//! # Plane for BSP Operations
//!
//! Oriented plane with point classification and polygon splitting.

use super::polygon::Polygon;
use super::vertex::Vertex;
use config::constants::CSG_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
///
/// Values are bit flags so per-vertex classes can be OR-ed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Classification {
    Coplanar = 0,
    Front = 1,
    Back = 2,
    Spanning = 3,
}

impl Classification {
    fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Self::Coplanar,
            1 => Self::Front,
            2 => Self::Back,
            _ => Self::Spanning,
        }
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal · p = w` with unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub w: f64,
}

impl Plane {
    /// Plane through three points, oriented by counter-clockwise winding.
    ///
    /// Returns `None` for collinear or coincident points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from point to plane (positive = front).
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    pub fn classify_point(&self, point: DVec3) -> Classification {
        let t = self.signed_distance(point);
        if t < -CSG_EPSILON {
            Classification::Back
        } else if t > CSG_EPSILON {
            Classification::Front
        } else {
            Classification::Coplanar
        }
    }

    /// Splits `polygon` by this plane, pushing the pieces into the given lists.
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back` depending
    /// on whether they face the same way as the plane. Spanning polygons are
    /// cut in two; pieces keep the original polygon's plane.
    pub fn split_polygon(
        &self,
        polygon: Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let types: Vec<Classification> = polygon
            .vertices()
            .iter()
            .map(|v| self.classify_point(v.pos))
            .collect();
        let polygon_type = Classification::from_bits(types.iter().fold(0, |acc, t| acc | *t as u8));

        match polygon_type {
            Classification::Coplanar => {
                if self.normal.dot(polygon.plane().normal) > 0.0 {
                    coplanar_front.push(polygon);
                } else {
                    coplanar_back.push(polygon);
                }
            }
            Classification::Front => front.push(polygon),
            Classification::Back => back.push(polygon),
            Classification::Spanning => {
                let vertices = polygon.vertices();
                let n = vertices.len();
                let mut f = Vec::with_capacity(n + 1);
                let mut b = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (vertices[i], vertices[j]);

                    if ti != Classification::Back {
                        f.push(vi);
                    }
                    if ti != Classification::Front {
                        b.push(vi);
                    }
                    if (ti as u8 | tj as u8) == Classification::Spanning as u8 {
                        let t = (self.w - self.normal.dot(vi.pos))
                            / self.normal.dot(vj.pos - vi.pos);
                        let v: Vertex = vi.interpolate(&vj, t);
                        f.push(v);
                        b.push(v);
                    }
                }

                let plane = *polygon.plane();
                if f.len() >= 3 {
                    front.push(Polygon::with_plane(f, plane));
                }
                if b.len() >= 3 {
                    back.push(Polygon::with_plane(b, plane));
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_plane() -> Plane {
        Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap()
    }

    fn triangle(a: DVec3, b: DVec3, c: DVec3) -> Polygon {
        Polygon::from_points(&[a, b, c]).unwrap()
    }

    #[test]
    fn test_plane_from_points() {
        let plane = xy_plane();
        assert_eq!(plane.normal, DVec3::Z);
        assert_eq!(plane.w, 0.0);
    }

    #[test]
    fn test_plane_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = Plane::from_points(DVec3::Z, DVec3::Z + DVec3::X, DVec3::Z + DVec3::Y).unwrap();
        plane.flip();
        assert_eq!(plane.normal, -DVec3::Z);
        assert_eq!(plane.w, -1.0);
        assert_eq!(plane.classify_point(DVec3::ZERO), Classification::Front);
    }

    #[test]
    fn test_classify_point() {
        let plane = xy_plane();
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, 1.0)), Classification::Front);
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, -1.0)), Classification::Back);
        assert_eq!(plane.classify_point(DVec3::new(5.0, 5.0, 1e-9)), Classification::Coplanar);
    }

    #[test]
    fn test_split_spanning_triangle() {
        let plane = xy_plane();
        let tri = triangle(
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        );
        let (mut cf, mut cb, mut f, mut b) = (vec![], vec![], vec![], vec![]);
        plane.split_polygon(tri, &mut cf, &mut cb, &mut f, &mut b);

        assert!(cf.is_empty() && cb.is_empty());
        assert_eq!(f.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(f[0].vertices().len(), 4);
        assert_eq!(b[0].vertices().len(), 3);
        for v in f[0].vertices() {
            assert!(v.pos.z >= -CSG_EPSILON);
        }
    }

    #[test]
    fn test_split_coplanar_by_facing() {
        let plane = xy_plane();
        let up = triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        let down = triangle(DVec3::ZERO, DVec3::Y, DVec3::X);
        let (mut cf, mut cb, mut f, mut b) = (vec![], vec![], vec![], vec![]);
        plane.split_polygon(up, &mut cf, &mut cb, &mut f, &mut b);
        plane.split_polygon(down, &mut cf, &mut cb, &mut f, &mut b);
        assert_eq!(cf.len(), 1);
        assert_eq!(cb.len(), 1);
    }
}
