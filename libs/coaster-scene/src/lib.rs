//! # Coaster Scene
//!
//! Presentation-side state for a coaster model on a scrolling page.
//!
//! - [`scroll`]: the scroll collaborator contract and two implementations
//! - [`orientation`]: keyframe interpolation driven by scroll position
//! - [`hover`]: idle sinusoidal bob and roll
//! - [`model`]: combines the above into one [`Pose`] per frame
//! - [`targets`]: the closed set of coaster targets and their assets
//!
//! ## Usage
//!
//! ```rust
//! use coaster_scene::{resolve_target, ScrollOffset, ScrollReactiveModel};
//!
//! let spec = resolve_target("San Francisco Bay").unwrap();
//! let mut model = ScrollReactiveModel::from_target(&spec).unwrap();
//! let pose = model.frame(&ScrollOffset::new(0.3), 1.5);
//! assert!(pose.rotation.is_normalized());
//! ```

pub mod error;
pub mod hover;
pub mod model;
pub mod orientation;
pub mod scroll;
pub mod targets;

pub use error::SceneError;
pub use hover::HoverMotion;
pub use model::{Pose, PoseTarget, ScrollReactiveModel};
pub use orientation::OrientationSequencer;
pub use scroll::{DampedScroll, ScrollOffset, ScrollState};
pub use targets::{resolve_target, CoasterTarget, TargetSpec};
