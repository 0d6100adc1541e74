//! Idle hover: a slow vertical bob plus a slight roll, driven by elapsed
//! wall-clock time and independent of scroll.

use config::constants::{HOVER_ANGULAR_FREQUENCY, HOVER_HEIGHT, HOVER_TILT};
use glam::{Quat, Vec3};

/// Sinusoidal hover parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMotion {
    /// Half the bob amplitude; the offset ranges over `[0, 2 · height]`.
    pub height: f32,
    /// Radians per second.
    pub angular_frequency: f32,
    /// Peak roll angle about the x axis, radians.
    pub tilt: f32,
}

impl Default for HoverMotion {
    fn default() -> Self {
        Self {
            height: HOVER_HEIGHT as f32,
            angular_frequency: HOVER_ANGULAR_FREQUENCY as f32,
            tilt: HOVER_TILT as f32,
        }
    }
}

impl HoverMotion {
    /// No motion at all.
    pub const STILL: Self = Self {
        height: 0.0,
        angular_frequency: 0.0,
        tilt: 0.0,
    };

    fn phase(&self, elapsed_secs: f32) -> f32 {
        (self.angular_frequency * elapsed_secs).sin()
    }

    /// Vertical offset at `elapsed_secs`.
    pub fn offset(&self, elapsed_secs: f32) -> Vec3 {
        Vec3::new(0.0, self.height * (1.0 + self.phase(elapsed_secs)), 0.0)
    }

    /// Roll angle at `elapsed_secs`.
    pub fn roll_angle(&self, elapsed_secs: f32) -> f32 {
        self.tilt * self.phase(elapsed_secs)
    }

    /// Roll rotation at `elapsed_secs`.
    pub fn roll(&self, elapsed_secs: f32) -> Quat {
        Quat::from_rotation_x(self.roll_angle(elapsed_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_starts_at_rest_height() {
        let hover = HoverMotion::default();
        assert_relative_eq!(hover.offset(0.0).y, hover.height);
        assert_eq!(hover.roll_angle(0.0), 0.0);
    }

    #[test]
    fn test_peak_and_trough() {
        let hover = HoverMotion {
            height: 0.1,
            angular_frequency: 1.0,
            tilt: 0.05,
        };
        assert_relative_eq!(hover.offset(PI / 2.0).y, 0.2, epsilon = 1e-6);
        assert_relative_eq!(hover.offset(3.0 * PI / 2.0).y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(hover.roll_angle(PI / 2.0), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_stays_within_bounds() {
        let hover = HoverMotion::default();
        for step in 0..2_000 {
            let t = step as f32 * 0.037;
            let y = hover.offset(t).y;
            assert!((0.0..=2.0 * hover.height + 1e-6).contains(&y), "y = {y} at t = {t}");
            assert!(hover.roll_angle(t).abs() <= hover.tilt + 1e-6);
            assert_eq!(hover.offset(t).x, 0.0);
        }
    }

    #[test]
    fn test_still_is_identity() {
        assert_eq!(HoverMotion::STILL.offset(12.0), Vec3::ZERO);
        assert_eq!(HoverMotion::STILL.roll(12.0), Quat::IDENTITY);
    }
}
