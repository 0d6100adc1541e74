//! # Primitives
//!
//! Closed meshes built directly from dimensions.

pub mod cube;

pub use cube::{create_cube, slab_base};
