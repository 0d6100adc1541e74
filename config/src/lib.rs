//! # Config Crate
//!
//! Centralized configuration constants for the bathymetry coaster pipeline.
//! Slab dimensions, the water layer orientation, boolean tolerances and the
//! scroll/hover tuning all live here so the geometry and presentation crates
//! never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SlabConfig, SLAB_HEIGHT, WATER_DEPTH_RATIO};
//!
//! let slab = SlabConfig::default();
//! let depth = slab.max_water_depth();
//! assert!((depth - SLAB_HEIGHT * WATER_DEPTH_RATIO).abs() < 1e-12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated Runtime Values**: `SlabConfig::new` rejects impossible slabs

pub mod constants;
