//! # Bathymetry Pipeline
//!
//! End-to-end orchestration:
//!
//! ```text
//! fetch_layers → assemble → slab_base → carve → BathymetryModel → SceneSink
//! ```
//!
//! The water mesh is complete once assembly finishes; the slab follows after
//! every layer has been subtracted. Both are handed to the renderer together
//! through [`BathymetryModel::attach_to`].

use crate::assemble::assemble;
use crate::cancel::CancelFlag;
use crate::carve::{carve, CarvedSlab};
use crate::contour::Layer;
use crate::error::Result;
use crate::mesh::Mesh;
use crate::primitives::slab_base;
use crate::source::{fetch_layers, LayerSource};
use config::constants::{
    SlabConfig, SLAB_DROP_FACTOR, SLAB_HEIGHT, SLAB_LONG_DIM, SLAB_SHORT_DIM, WATER_DEPTH_RATIO,
    WATER_ROTATION,
};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Serializable slab parameters; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::SlabParams;
///
/// let params: SlabParams = serde_json::from_str(r#"{"height": 0.2}"#).unwrap();
/// let config = params.into_config().unwrap();
/// assert_eq!(config.height, 0.2);
/// assert_eq!(config.long_dim, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabParams {
    pub long_dim: f64,
    pub short_dim: f64,
    pub height: f64,
    pub water_depth_ratio: f64,
    pub drop_factor: f64,
    pub water_rotation: [f64; 3],
}

impl Default for SlabParams {
    fn default() -> Self {
        Self {
            long_dim: SLAB_LONG_DIM,
            short_dim: SLAB_SHORT_DIM,
            height: SLAB_HEIGHT,
            water_depth_ratio: WATER_DEPTH_RATIO,
            drop_factor: SLAB_DROP_FACTOR,
            water_rotation: WATER_ROTATION,
        }
    }
}

impl SlabParams {
    /// Validates the parameters.
    pub fn into_config(self) -> Result<SlabConfig> {
        let config = SlabConfig {
            long_dim: self.long_dim,
            short_dim: self.short_dim,
            height: self.height,
            water_depth_ratio: self.water_depth_ratio,
            drop_factor: self.drop_factor,
            water_rotation: self.water_rotation,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<SlabConfig> for SlabParams {
    fn from(config: SlabConfig) -> Self {
        Self {
            long_dim: config.long_dim,
            short_dim: config.short_dim,
            height: config.height,
            water_depth_ratio: config.water_depth_ratio,
            drop_factor: config.drop_factor,
            water_rotation: config.water_rotation,
        }
    }
}

// =============================================================================
// SCENE HAND-OFF
// =============================================================================

/// Which finished mesh is being attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshRole {
    /// Translucent water layers.
    Water,
    /// Carved table slab.
    Slab,
}

/// Receiver of finished meshes (typically a renderer's scene graph).
pub trait SceneSink {
    fn attach(&mut self, role: MeshRole, mesh: Mesh);
}

impl SceneSink for Vec<(MeshRole, Mesh)> {
    fn attach(&mut self, role: MeshRole, mesh: Mesh) {
        self.push((role, mesh));
    }
}

/// Finished water and slab geometry, in world placement.
#[derive(Debug, Clone)]
pub struct BathymetryModel {
    water: Mesh,
    slab: CarvedSlab,
    layer_count: usize,
}

impl BathymetryModel {
    pub fn water(&self) -> &Mesh {
        &self.water
    }

    pub fn slab(&self) -> &CarvedSlab {
        &self.slab
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Consumes the model, returning `(water, slab)` meshes.
    pub fn into_meshes(self) -> (Mesh, Mesh) {
        (self.water, self.slab.into_solid().into_mesh())
    }

    /// Hands both meshes to `sink`, water first.
    pub fn attach_to<S: SceneSink + ?Sized>(self, sink: &mut S) {
        let (water, slab) = self.into_meshes();
        sink.attach(MeshRole::Water, water);
        sink.attach(MeshRole::Slab, slab);
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Builds water and carved slab from already-loaded layers.
pub fn carve_layers(
    layers: &[Layer],
    config: &SlabConfig,
    cancel: &CancelFlag,
) -> Result<BathymetryModel> {
    config.validate()?;
    let assembly = assemble(layers, config)?;
    let water = assembly.water.bake().into_mesh();

    cancel.check()?;
    let slab = carve(slab_base(config)?, assembly.layers, config, cancel)?;

    info!(
        layers = layers.len(),
        water_triangles = water.triangle_count(),
        slab_triangles = slab.solid().mesh().triangle_count(),
        "bathymetry model ready"
    );

    Ok(BathymetryModel {
        water,
        slab,
        layer_count: layers.len(),
    })
}

/// Fetches every layer from `source`, then builds water and carved slab.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::{load_bathymetry, CancelFlag, MemoryLayerSource, SlabConfig};
///
/// # tokio_test_block(async {
/// let source = MemoryLayerSource::from_json([
///     r#"[{"simplified": [[0,0],[1,0],[1,1],[0,1]]}]"#,
/// ]).unwrap();
/// let model = load_bathymetry(&source, &SlabConfig::default(), &CancelFlag::new())
///     .await
///     .unwrap();
/// assert_eq!(model.layer_count(), 1);
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn load_bathymetry<S: LayerSource>(
    source: &S,
    config: &SlabConfig,
    cancel: &CancelFlag,
) -> Result<BathymetryModel> {
    config.validate()?;
    let layers = fetch_layers(source, cancel).await?;
    carve_layers(&layers, config, cancel)
}
