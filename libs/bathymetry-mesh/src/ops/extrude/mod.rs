//! # Extrusion Operations
//!
//! Turns traced contour shapes into prism solids:
//! - **extrude_shape**: one shape, one straight step along +Z, no bevel
//! - **extrude_layer**: every shape of a layer, sized and stacked for its
//!   position in the layer stack
//!
//! ## Layer Stacking
//!
//! With `N` layers and a maximum water depth `D`, every layer is `D / N`
//! thick. Layer `i` is shifted by `(-0.5, -0.5, i · D / N)`, which centres the
//! unit contour coordinates on the origin and places the layer's base at
//! its own depth. The offset is computed from the index directly, so no
//! error accumulates across layers.

mod prism;

#[cfg(test)]
mod tests;

pub use prism::extrude_shape;

use crate::error::{BathymetryError, Result};
use crate::shape::Shape;
use crate::solid::Solid;
use config::constants::CONTOUR_CENTER_OFFSET;
use glam::DVec3;

/// Thickness of each layer when `layer_count` layers share `max_water_depth`.
pub fn depth_per_layer(max_water_depth: f64, layer_count: usize) -> Result<f64> {
    if layer_count == 0 {
        return Err(BathymetryError::EmptyLayerStack);
    }
    Ok(max_water_depth / layer_count as f64)
}

/// Offset applied to every solid of layer `layer_index`.
pub fn layer_offset(layer_index: usize, depth: f64) -> DVec3 {
    DVec3::new(
        -CONTOUR_CENTER_OFFSET,
        -CONTOUR_CENTER_OFFSET,
        layer_index as f64 * depth,
    )
}

/// Extrudes every shape of one layer and moves it into place.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::ops::extrude::extrude_layer;
/// use bathymetry_mesh::{build_shape, PolygonWithHoles, Ring};
/// use glam::DVec2;
///
/// let square = Ring::new(vec![DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y]);
/// let shape = build_shape(&PolygonWithHoles::new(square, vec![])).unwrap();
/// let solids = extrude_layer(&[shape], 1, 4, 0.8).unwrap();
///
/// let (min, max) = solids[0].mesh().bounding_box();
/// assert!((min.z - 0.2).abs() < 1e-12);
/// assert!((max.z - 0.4).abs() < 1e-12);
/// assert!((min.x + 0.5).abs() < 1e-12);
/// ```
pub fn extrude_layer(
    shapes: &[Shape],
    layer_index: usize,
    layer_count: usize,
    max_water_depth: f64,
) -> Result<Vec<Solid>> {
    let depth = depth_per_layer(max_water_depth, layer_count)?;
    let offset = layer_offset(layer_index, depth);

    shapes
        .iter()
        .map(|shape| Ok(extrude_shape(shape, depth)?.translate(offset)))
        .collect()
}
