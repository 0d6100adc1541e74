//! # Mesh Data Structure
//!
//! Indexed triangle mesh shared by every stage of the pipeline.

use config::constants::EPSILON;
use glam::{DMat4, DVec3};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the three corner positions of every triangle.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles.iter().map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            for &i in tri {
                normals[i as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or two zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Signed enclosed volume (divergence theorem).
    ///
    /// Positive for closed meshes with outward-facing (counter-clockwise)
    /// winding. Meaningless for open meshes.
    pub fn volume(&self) -> f64 {
        self.triangle_positions()
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Total surface area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.triangle_positions()
            .map(|[a, b, c]| (b - a).cross(c - a).length() * 0.5)
            .sum()
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, offsetting its indices past this mesh's vertices.
    ///
    /// Normals survive only when both meshes carry them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            _ => None,
        };
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() >= EPSILON
        })
    }

    /// Exports vertices as a flattened `[x, y, z, ...]` f32 array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as a flattened u32 array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as a flattened f32 array.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}
