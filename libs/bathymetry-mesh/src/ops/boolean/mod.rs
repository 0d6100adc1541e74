//! # Boolean Operations
//!
//! Mesh difference via BSP trees (csg.js algorithm by Evan Wallace).
//!
//! ## Algorithm
//!
//! ```text
//! A - B = ~(~A ∪ B)
//!
//! a.invert(); a.clip_to(b); b.clip_to(a);
//! b.invert(); b.clip_to(a); b.invert();
//! a.build(b.polygons); a.invert();
//! ```
//!
//! Inputs must be closed meshes with outward winding. Output polygons are
//! fan-triangulated without vertex welding.

pub mod bsp;
pub mod plane;
pub mod polygon;
pub mod vertex;


use crate::mesh::Mesh;
use crate::solid::Solid;
use bsp::BspNode;
use config::constants::CSG_EPSILON;
use polygon::Polygon;
use tracing::trace;

/// Subtracts `b` from `a`.
///
/// Both operands have their pending transforms baked first. The result
/// keeps `a`'s depth and has no pending transform.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::{primitives::create_cube, subtract, Solid};
/// use glam::DVec3;
///
/// let slab = Solid::new(create_cube(DVec3::splat(4.0), true).unwrap(), 4.0);
/// let notch = Solid::new(create_cube(DVec3::splat(2.0), true).unwrap(), 2.0)
///     .with_position(DVec3::new(0.0, 2.0, 0.0));
/// let carved = subtract(slab, notch);
/// assert!((carved.volume() - (64.0 - 4.0)).abs() < 1e-6);
/// ```
pub fn subtract(a: Solid, b: Solid) -> Solid {
    let depth = a.depth();
    let a = a.bake();
    let b = b.bake();
    Solid::new(difference(a.mesh(), b.mesh()), depth)
}

/// Computes the difference of two meshes (A - B).
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    if a.is_empty() || b.is_empty() || !bounds_overlap(a, b) {
        return a.clone();
    }

    let mut a_tree = BspNode::new(mesh_to_polygons(a));
    let mut b_tree = BspNode::new(mesh_to_polygons(b));

    a_tree.invert();
    a_tree.clip_to(&b_tree);
    b_tree.clip_to(&a_tree);
    b_tree.invert();
    b_tree.clip_to(&a_tree);
    b_tree.invert();
    a_tree.build(b_tree.into_polygons());
    a_tree.invert();

    let result = polygons_to_mesh(&a_tree.into_polygons());
    trace!(
        a_triangles = a.triangle_count(),
        b_triangles = b.triangle_count(),
        result_triangles = result.triangle_count(),
        "mesh difference"
    );
    result
}

/// Converts mesh triangles to BSP polygons, skipping zero-area triangles.
pub fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangle_positions()
        .filter_map(|tri| Polygon::from_points(&tri))
        .collect()
}

/// Fan-triangulates polygons into a mesh.
pub fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let vertex_count = polygons.iter().map(|p| p.vertices().len()).sum();
    let triangle_count = polygons.iter().map(|p| p.vertices().len() - 2).sum();
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    for polygon in polygons {
        let base = mesh.vertex_count() as u32;
        for v in polygon.vertices() {
            mesh.add_vertex(v.pos);
        }
        for i in 1..polygon.vertices().len() as u32 - 1 {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh
}

fn bounds_overlap(a: &Mesh, b: &Mesh) -> bool {
    let (a_min, a_max) = a.bounding_box();
    let (b_min, b_max) = b.bounding_box();
    (a_min.cmple(b_max + CSG_EPSILON) & b_min.cmple(a_max + CSG_EPSILON)).all()
}
