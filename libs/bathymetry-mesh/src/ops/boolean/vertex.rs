//! # Vertex for BSP Operations
//!
//! Position-only vertex with linear interpolation.

use glam::DVec3;

/// Vertex carried through BSP splitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: DVec3,
}

impl Vertex {
    #[inline]
    pub fn new(pos: DVec3) -> Self {
        Self { pos }
    }

    /// Point at parameter `t` along the segment from `self` to `other`.
    #[inline]
    pub fn interpolate(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex::new(self.pos.lerp(other.pos, t))
    }
}

impl From<DVec3> for Vertex {
    fn from(pos: DVec3) -> Self {
        Self::new(pos)
    }
}
