//! # Bathymetry Mesh
//!
//! Turns stacked bathymetric contour layers into two triangle meshes: a
//! "water" mesh and a table slab with that water volume carved out of it.
//!
//! ## Architecture
//!
//! ```text
//! LayerSource → contour layers → shapes → extruded solids
//!                                            ├─ merge (all)        → water mesh
//!                                            └─ merge (per layer)  → carve slab → slab mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Boolean difference**: BSP trees (csg.js algorithm)
//! - **Cap triangulation**: Ear clipping with holes (`earcutr`)
//! - **Merge**: Buffer concatenation with index offsets
//!
//! ## Usage
//!
//! ```rust
//! use bathymetry_mesh::{carve_layers, CancelFlag, Layer, SlabConfig};
//!
//! let json = r#"[{"simplified": [[0,0],[1,0],[1,1],[0,1],[0,0]]}]"#;
//! let layer = Layer::from_json(0, json).unwrap();
//! let model = carve_layers(&[layer], &SlabConfig::default(), &CancelFlag::new()).unwrap();
//! assert_eq!(model.layer_count(), 1);
//! assert!(model.slab().layers_carved() == 1);
//! ```

pub mod assemble;
pub mod cancel;
pub mod carve;
pub mod contour;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod pipeline;
pub mod primitives;
pub mod shape;
pub mod solid;
pub mod source;

pub use cancel::CancelFlag;
pub use carve::{carve, CarvedSlab};
pub use config::constants::SlabConfig;
pub use contour::{ContourRecord, Layer, PolygonWithHoles, Ring};
pub use error::{BathymetryError, Result};
pub use mesh::Mesh;
pub use ops::boolean::subtract;
pub use ops::merge::merge_solids;
pub use pipeline::{carve_layers, load_bathymetry, BathymetryModel, MeshRole, SceneSink, SlabParams};
pub use shape::{build_shape, Shape};
pub use solid::{Solid, Transform};
pub use source::{fetch_layers, LayerSource, MemoryLayerSource};

#[cfg(feature = "fs")]
pub use source::DirectoryLayerSource;
