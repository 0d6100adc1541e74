//! # Scroll-Reactive Model
//!
//! Per-frame pose of a coaster model: scroll-driven keyframe orientation
//! with the idle hover layered on top.
//!
//! ```text
//! rotation = sequencer(scroll) · hover_roll(t) · import_rotation
//! position = base_position + hover_offset(t)
//! ```

use crate::error::SceneError;
use crate::hover::HoverMotion;
use crate::orientation::OrientationSequencer;
use crate::scroll::ScrollState;
use crate::targets::TargetSpec;
use glam::{Quat, Vec3};
use serde::Serialize;

/// Position and orientation for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// `[px, py, pz, qx, qy, qz, qw]`
    pub fn to_array(&self) -> [f32; 7] {
        let [px, py, pz] = self.position.to_array();
        let [qx, qy, qz, qw] = self.rotation.to_array();
        [px, py, pz, qx, qy, qz, qw]
    }
}

/// Receiver of per-frame poses (a renderer's scene node).
pub trait PoseTarget {
    fn set_pose(&mut self, pose: Pose);
}

impl PoseTarget for Pose {
    fn set_pose(&mut self, pose: Pose) {
        *self = pose;
    }
}

/// A model that turns with the page scroll and hovers while idle.
#[derive(Debug, Clone)]
pub struct ScrollReactiveModel {
    sequencer: OrientationSequencer,
    hover: HoverMotion,
    base_position: Vec3,
    import_rotation: Quat,
}

impl ScrollReactiveModel {
    pub fn new(sequencer: OrientationSequencer) -> Self {
        Self {
            sequencer,
            hover: HoverMotion::default(),
            base_position: Vec3::ZERO,
            import_rotation: Quat::IDENTITY,
        }
    }

    /// Builds the model for a registered coaster target.
    pub fn from_target(spec: &TargetSpec) -> Result<Self, SceneError> {
        let sequencer = OrientationSequencer::new(spec.orientation_sequence.clone())?;
        Ok(Self::new(sequencer).with_import_rotation(spec.import_rotation))
    }

    pub fn with_hover(mut self, hover: HoverMotion) -> Self {
        self.hover = hover;
        self
    }

    pub fn with_base_position(mut self, position: Vec3) -> Self {
        self.base_position = position;
        self
    }

    /// Rotation about +Y applied to the imported geometry.
    pub fn with_import_rotation(mut self, angle: f32) -> Self {
        self.import_rotation = Quat::from_rotation_y(angle);
        self
    }

    pub fn sequencer(&self) -> &OrientationSequencer {
        &self.sequencer
    }

    /// Computes this frame's pose.
    pub fn frame<S: ScrollState + ?Sized>(&mut self, scroll: &S, elapsed_secs: f32) -> Pose {
        let orientation = self.sequencer.update(scroll);
        Pose {
            position: self.base_position + self.hover.offset(elapsed_secs),
            rotation: (orientation * self.hover.roll(elapsed_secs) * self.import_rotation)
                .normalize(),
        }
    }

    /// Computes this frame's pose and hands it to `target`.
    pub fn drive<S, T>(&mut self, scroll: &S, elapsed_secs: f32, target: &mut T)
    where
        S: ScrollState + ?Sized,
        T: PoseTarget + ?Sized,
    {
        target.set_pose(self.frame(scroll, elapsed_secs));
    }
}
