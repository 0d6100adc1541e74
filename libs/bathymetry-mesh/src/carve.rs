//! # Slab Carver
//!
//! Subtracts each per-layer solid from the slab, one at a time and in
//! layer order. Every layer is rotated into the water's placement before
//! it is subtracted, so the carved cavity lines up with the displayed water.

use crate::cancel::CancelFlag;
use crate::error::Result;
use crate::ops::boolean::subtract;
use crate::solid::{Solid, Transform};
use config::constants::SlabConfig;
use tracing::{debug, warn};

/// A slab after carving, plus how many layers were subtracted.
#[derive(Debug, Clone)]
pub struct CarvedSlab {
    solid: Solid,
    layers_carved: usize,
}

impl CarvedSlab {
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn into_solid(self) -> Solid {
        self.solid
    }

    pub fn layers_carved(&self) -> usize {
        self.layers_carved
    }

    /// True when no layer was subtracted and the slab is the plain box.
    pub fn is_uncarved(&self) -> bool {
        self.layers_carved == 0
    }
}

/// Carves `layers` out of `base`.
///
/// An empty layer list returns the base unchanged (with its pending
/// transform baked) and logs a warning. The cancel flag is checked before
/// each subtraction.
///
/// # Errors
///
/// [`BathymetryError::Cancelled`](crate::BathymetryError::Cancelled) if the
/// flag is raised mid-carve.
pub fn carve(
    base: Solid,
    layers: Vec<Solid>,
    config: &SlabConfig,
    cancel: &CancelFlag,
) -> Result<CarvedSlab> {
    if layers.is_empty() {
        warn!("no layers to carve; slab left uncarved");
        return Ok(CarvedSlab {
            solid: base.bake(),
            layers_carved: 0,
        });
    }

    let rotation = Transform::from_euler_xyz(config.water_rotation).rotation;
    let total = layers.len();
    let mut slab = base;

    for (i, layer) in layers.into_iter().enumerate() {
        cancel.check()?;
        slab = subtract(slab, layer.with_rotation(rotation));
        debug!(
            layer = i,
            of = total,
            triangles = slab.mesh().triangle_count(),
            "carved layer"
        );
    }

    Ok(CarvedSlab {
        solid: slab,
        layers_carved: total,
    })
}
