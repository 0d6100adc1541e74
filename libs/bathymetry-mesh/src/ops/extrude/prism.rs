//! # Prism Extrusion
//!
//! Extrudes a 2D shape with holes into a closed prism between `z = 0` and
//! `z = depth`.
//!
//! ## Algorithm
//!
//! 1. Strip closing duplicates, drop repeated points, and orient rings
//!    (outer counter-clockwise, holes clockwise)
//! 2. Triangulate the cap once with `earcutr` (outer ring plus hole starts)
//! 3. Emit bottom cap (reversed), top cap, and one quad per ring edge
//!
//! Degenerate rings (fewer than three distinct points) enclose no area. A
//! degenerate outer ring yields an empty mesh; degenerate holes are skipped.

use crate::error::{BathymetryError, Result};
use crate::mesh::Mesh;
use crate::shape::Shape;
use crate::solid::Solid;
use config::constants::approx_zero;
use earcutr::earcut;
use glam::{DVec2, DVec3};
use tracing::debug;

/// Extrudes one shape along +Z.
pub fn extrude_shape(shape: &Shape, depth: f64) -> Result<Solid> {
    let Some(outer) = prepare_ring(shape.outer_ring(), true) else {
        debug!("degenerate outer ring; emitting empty solid");
        return Ok(Solid::new(Mesh::new(), depth));
    };
    let holes: Vec<Vec<DVec2>> = shape
        .hole_rings()
        .filter_map(|ring| prepare_ring(ring, false))
        .collect();

    // Flatten outer ring followed by holes
    let mut points = outer;
    let mut ring_starts = vec![0];
    for hole in &holes {
        ring_starts.push(points.len());
        points.extend_from_slice(hole);
    }
    let n = points.len();

    let coords: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    let cap = earcut(&coords, &ring_starts[1..], 2)
        .map_err(|e| BathymetryError::malformed(format!("cap triangulation failed: {e:?}")))?;

    let mut mesh = Mesh::with_capacity(2 * n, cap.len() / 3 * 2 + 2 * n);

    // Bottom ring [0, n), top ring [n, 2n)
    for p in &points {
        mesh.add_vertex(DVec3::new(p.x, p.y, 0.0));
    }
    for p in &points {
        mesh.add_vertex(DVec3::new(p.x, p.y, depth));
    }

    for tri in cap.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let cross = (points[b] - points[a]).perp_dot(points[c] - points[a]);
        if approx_zero(cross) {
            continue;
        }
        let (b, c) = if cross > 0.0 { (b, c) } else { (c, b) };
        let (a, b, c) = (a as u32, b as u32, c as u32);
        let top = n as u32;
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(top + a, top + b, top + c);
    }

    // Side walls: for CCW outer / CW holes the solid lies left of each edge
    let ring_ends = ring_starts.iter().skip(1).copied().chain([n]);
    for (start, end) in ring_starts.iter().copied().zip(ring_ends) {
        let top = n as u32;
        for i in start..end {
            let j = if i + 1 == end { start } else { i + 1 };
            let (i, j) = (i as u32, j as u32);
            mesh.add_triangle(i, j, top + j);
            mesh.add_triangle(i, top + j, top + i);
        }
    }

    Ok(Solid::new(mesh, depth))
}

/// Removes closing and repeated points and applies the requested winding.
///
/// Returns `None` if fewer than three distinct points remain.
fn prepare_ring(ring: &[DVec2], counter_clockwise: bool) -> Option<Vec<DVec2>> {
    let mut points = ring.to_vec();
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }
    if (signed_area(&points) > 0.0) != counter_clockwise {
        points.reverse();
    }
    Some(points)
}

/// Shoelace area, positive for counter-clockwise rings.
pub(crate) fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}
