//! # Scene Errors

use thiserror::Error;

/// Errors raised while setting up a coaster scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The requested coaster target is not in the registry
    #[error("Unknown target {name}")]
    UnknownTarget { name: String },

    /// An orientation sequence needs at least one keyframe
    #[error("Orientation sequence is empty")]
    EmptyOrientationSequence,
}

impl SceneError {
    pub fn unknown_target(name: impl Into<String>) -> Self {
        Self::UnknownTarget { name: name.into() }
    }
}
