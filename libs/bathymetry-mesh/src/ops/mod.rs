//! # Mesh Operations
//!
//! - **extrude**: contour shapes to prism solids
//! - **merge**: concatenate solids into one
//! - **boolean**: BSP difference for carving

pub mod boolean;
pub mod extrude;
pub mod merge;
