//! # Shape Builder
//!
//! Traces contour rings into closed 2D outlines ready for extrusion.
//!
//! Each outline visits every input vertex in order and then returns to its
//! first vertex, so a traced path always ends where it started. Rings whose
//! data already repeat the first vertex therefore carry it twice at the end;
//! [`Shape::outer_ring`] and [`Shape::hole_rings`] strip that closing run,
//! treating points within `EPSILON` of the first vertex as closers.

use crate::contour::{PolygonWithHoles, Ring};
use crate::error::{BathymetryError, Result};
use config::constants::approx_equal;
use glam::DVec2;
use tracing::warn;

/// A closed 2D outline with optional cut-out hole paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    outline: Vec<DVec2>,
    holes: Vec<Vec<DVec2>>,
}

impl Shape {
    /// Traced outer path, including the closing vertex.
    pub fn outline(&self) -> &[DVec2] {
        &self.outline
    }

    /// Traced hole paths, including their closing vertices.
    pub fn holes(&self) -> &[Vec<DVec2>] {
        &self.holes
    }

    /// Outer ring with trailing points equal to the first one removed.
    pub fn outer_ring(&self) -> &[DVec2] {
        strip_closing(&self.outline)
    }

    /// Hole rings with trailing points equal to their first one removed.
    pub fn hole_rings(&self) -> impl Iterator<Item = &[DVec2]> {
        self.holes.iter().map(|h| strip_closing(h))
    }

    /// Returns true if the outer ring cannot enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.outer_ring().len() < 3
    }
}

/// Builds a [`Shape`] from a polygon with holes.
///
/// A ring with no vertices is a [`BathymetryError::MalformedContour`]. Rings
/// with one or two vertices are accepted with a warning and yield a shape
/// that encloses no area.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::{build_shape, PolygonWithHoles, Ring};
/// use glam::DVec2;
///
/// let square = Ring::new(vec![DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y]);
/// let shape = build_shape(&PolygonWithHoles::new(square, vec![])).unwrap();
/// assert_eq!(shape.outline().len(), 5);
/// assert_eq!(shape.outline()[4], DVec2::ZERO);
/// ```
pub fn build_shape(polygon: &PolygonWithHoles) -> Result<Shape> {
    let outline = trace(&polygon.outer, "outer ring")?;
    let holes = polygon
        .holes
        .iter()
        .enumerate()
        .map(|(i, hole)| trace(hole, &format!("hole {i}")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Shape { outline, holes })
}

fn trace(ring: &Ring, what: &str) -> Result<Vec<DVec2>> {
    let Some(&first) = ring.points().first() else {
        return Err(BathymetryError::malformed(format!("{what} has no vertices")));
    };

    if ring.is_degenerate() {
        warn!(vertices = ring.len(), "{what} has fewer than 3 vertices; shape will be degenerate");
    }

    let mut path = Vec::with_capacity(ring.len() + 1);
    path.extend_from_slice(ring.points());
    path.push(first);
    Ok(path)
}

fn strip_closing(path: &[DVec2]) -> &[DVec2] {
    let Some(&first) = path.first() else {
        return path;
    };
    let mut end = path.len();
    while end > 1 && same_point(path[end - 1], first) {
        end -= 1;
    }
    &path[..end]
}

fn same_point(a: DVec2, b: DVec2) -> bool {
    approx_equal(a.x, b.x) && approx_equal(a.y, b.y)
}
