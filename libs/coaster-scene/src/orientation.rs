//! # Orientation Sequencer
//!
//! Maps a scroll offset to an orientation by interpolating between
//! keyframes. With `N + 1` keyframes the scroll range is split into `N`
//! equal pages; page `k` (1-based) covers `[(k-1)/N, (k-1)/N + 1/N]` and
//! blends keyframe `k-1` into keyframe `k`.
//!
//! Page boundaries belong to both neighbouring pages. Pages are evaluated
//! in order and each visible page overwrites the result, so at a boundary
//! the later page wins (its progress is 0, which lands on the shared
//! keyframe anyway).

use crate::error::SceneError;
use crate::scroll::ScrollState;
use glam::Quat;
use tracing::trace;

/// Keyframe orientations plus the last orientation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationSequencer {
    keyframes: Vec<Quat>,
    current: Quat,
}

impl OrientationSequencer {
    /// Creates a sequencer; keyframes are normalized.
    ///
    /// # Errors
    ///
    /// [`SceneError::EmptyOrientationSequence`] if `keyframes` is empty.
    pub fn new(keyframes: Vec<Quat>) -> Result<Self, SceneError> {
        let keyframes: Vec<Quat> = keyframes.into_iter().map(Quat::normalize).collect();
        let current = *keyframes
            .first()
            .ok_or(SceneError::EmptyOrientationSequence)?;
        Ok(Self { keyframes, current })
    }

    pub fn keyframes(&self) -> &[Quat] {
        &self.keyframes
    }

    /// Number of scroll pages (keyframes minus one).
    pub fn page_count(&self) -> usize {
        self.keyframes.len() - 1
    }

    /// Orientation produced by the last [`update`](Self::update).
    pub fn current(&self) -> Quat {
        self.current
    }

    /// Recomputes the orientation for this frame's scroll state.
    ///
    /// With a single keyframe the orientation never changes. If no page is
    /// visible the previous orientation is kept.
    pub fn update<S: ScrollState + ?Sized>(&mut self, scroll: &S) -> Quat {
        let pages = self.page_count();
        if pages == 0 {
            return self.current;
        }

        let length = 1.0 / pages as f64;
        for (k, pair) in self.keyframes.windows(2).enumerate() {
            let start = k as f64 / pages as f64;
            if !scroll.visible(start, length) {
                continue;
            }
            let progress = scroll.range(start, length) as f32;
            self.current = slerp_shortest(pair[0], pair[1], progress);
            trace!(page = k + 1, progress, "orientation page");
        }

        self.current
    }
}

/// Spherical interpolation along the shorter arc.
pub fn slerp_shortest(from: Quat, to: Quat, t: f32) -> Quat {
    let to = if from.dot(to) < 0.0 { -to } else { to };
    from.slerp(to, t).normalize()
}
