//! # Scroll State
//!
//! The page scroll collaborator, reduced to what the orientation sequencer
//! needs: a normalized offset in `[0, 1]` and two window queries over it.
//!
//! | Query | Result |
//! |-------|--------|
//! | `visible(start, length)` | `start ≤ offset ≤ start + length` |
//! | `range(start, length)` | `clamp((offset - start) / length, 0, 1)` |

use config::constants::SCROLL_DAMPING;

/// Offset below which [`DampedScroll`] snaps to its target.
const SETTLE_EPSILON: f64 = 1e-6;

/// Read-only view of the page scroll position.
pub trait ScrollState {
    /// Normalized scroll offset in `[0, 1]`.
    fn offset(&self) -> f64;

    /// Whether the offset lies in `[start, start + length]` (inclusive).
    fn visible(&self, start: f64, length: f64) -> bool {
        let offset = self.offset();
        start <= offset && offset <= start + length
    }

    /// Progress through `[start, start + length]`, clamped to `[0, 1]`.
    fn range(&self, start: f64, length: f64) -> f64 {
        let offset = self.offset();
        if length <= 0.0 {
            return if offset >= start { 1.0 } else { 0.0 };
        }
        ((offset - start) / length).clamp(0.0, 1.0)
    }
}

/// A fixed scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Clamps `offset` into `[0, 1]`; NaN becomes 0.
    pub fn new(offset: f64) -> Self {
        if offset.is_nan() {
            return Self(0.0);
        }
        Self(offset.clamp(0.0, 1.0))
    }
}

impl ScrollState for ScrollOffset {
    fn offset(&self) -> f64 {
        self.0
    }
}

/// Scroll offset that eases toward the raw scroll position.
///
/// Each [`advance`](DampedScroll::advance) closes a fraction
/// `1 - e^(-damping · dt)` of the remaining gap, so the approach is the same
/// at any frame rate and never overshoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedScroll {
    target: f64,
    current: f64,
    damping: f64,
}

impl Default for DampedScroll {
    fn default() -> Self {
        Self::new(SCROLL_DAMPING)
    }
}

impl DampedScroll {
    pub fn new(damping: f64) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            damping: damping.max(0.0),
        }
    }

    /// Sets the raw scroll position the offset eases toward.
    pub fn scroll_to(&mut self, raw: f64) {
        self.target = ScrollOffset::new(raw).0;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Moves the displayed offset toward the target by `dt` seconds' worth.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt > 0.0 {
            let alpha = 1.0 - (-self.damping * dt).exp();
            self.current += (self.target - self.current) * alpha;
            if (self.target - self.current).abs() < SETTLE_EPSILON {
                self.current = self.target;
            }
        }
        self.current
    }

    /// Jumps straight to the target.
    pub fn settle(&mut self) {
        self.current = self.target;
    }
}

impl ScrollState for DampedScroll {
    fn offset(&self) -> f64 {
        self.current
    }
}
