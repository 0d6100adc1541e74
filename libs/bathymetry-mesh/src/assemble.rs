//! # Bathymetry Assembler
//!
//! Extrudes every layer of a contour stack once and produces:
//! - one merged "water" solid holding every shape of every layer
//! - one merged solid per layer, used later to carve the slab
//!
//! The water solid receives the configured XYZ Euler rotation as a pending
//! transform. Per-layer solids stay untransformed; the carver applies the
//! same rotation before each subtraction.

use crate::contour::Layer;
use crate::error::{BathymetryError, Result};
use crate::ops::extrude::extrude_layer;
use crate::ops::merge::merge_solids;
use crate::shape::build_shape;
use crate::solid::{Solid, Transform};
use config::constants::SlabConfig;
use tracing::{debug, error, info};

/// Output of [`assemble`].
#[derive(Debug, Clone)]
pub struct BathymetryAssembly {
    /// Every extruded shape, merged, with the water rotation pending.
    pub water: Solid,
    /// One merged solid per layer, shallowest first.
    pub layers: Vec<Solid>,
}

/// Builds the water solid and per-layer solids from a contour stack.
///
/// # Errors
///
/// - [`BathymetryError::EmptyLayerStack`] for zero layers
/// - [`BathymetryError::MalformedContour`] for rings with no vertices
/// - [`BathymetryError::EmptyMerge`] for a layer with no polygons
pub fn assemble(layers: &[Layer], config: &SlabConfig) -> Result<BathymetryAssembly> {
    if layers.is_empty() {
        return Err(BathymetryError::EmptyLayerStack);
    }

    let layer_count = layers.len();
    let max_depth = config.max_water_depth();

    let per_layer = layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let shapes = layer
                .polygons
                .iter()
                .map(build_shape)
                .collect::<Result<Vec<_>>>()?;
            debug!(layer = i, shapes = shapes.len(), "extruding layer");
            extrude_layer(&shapes, i, layer_count, max_depth)
        })
        .collect::<Result<Vec<_>>>()?;

    let water = merge_solids(per_layer.iter().flatten())?
        .with_rotation(Transform::from_euler_xyz(config.water_rotation).rotation);

    let layers = per_layer
        .into_iter()
        .enumerate()
        .map(|(i, solids)| {
            merge_solids(solids).inspect_err(|e| error!(layer = i, "cannot merge layer: {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        layers = layer_count,
        water_vertices = water.mesh().vertex_count(),
        "assembled bathymetry"
    );

    Ok(BathymetryAssembly { water, layers })
}
