//! # Solids
//!
//! A [`Solid`] is a closed mesh plus the bookkeeping the pipeline needs:
//! the extrusion depth it was built with, the offset already baked into its
//! vertices, and a pending rigid transform that has not been applied yet.
//!
//! ## Pending Transforms
//!
//! Rotation and position set through [`Solid::with_rotation`] and
//! [`Solid::with_position`] are recorded, not applied. [`Solid::bake`]
//! writes them into the vertices and resets the pending transform to
//! identity. Boolean operations bake their operands first, so a solid is
//! always carved in the placement it is displayed in.

use crate::mesh::Mesh;
use glam::{DMat4, DQuat, DVec3, EulerRot};
use std::borrow::Cow;

/// Rigid transform: rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: DQuat,
    pub translation: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Rotation from XYZ Euler angles in radians (x applied last).
    pub fn from_euler_xyz(angles: [f64; 3]) -> Self {
        Self {
            rotation: DQuat::from_euler(EulerRot::XYZ, angles[0], angles[1], angles[2]),
            translation: DVec3::ZERO,
        }
    }

    pub fn matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.translation)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// A closed triangle mesh with extrusion metadata and a pending transform.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    mesh: Mesh,
    depth: f64,
    offset: DVec3,
    transform: Transform,
}

impl Solid {
    /// Wraps a mesh that was built with the given extrusion depth.
    pub fn new(mesh: Mesh, depth: f64) -> Self {
        Self {
            mesh,
            depth,
            offset: DVec3::ZERO,
            transform: Transform::IDENTITY,
        }
    }

    /// Vertices as stored, without the pending transform.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.bake().mesh
    }

    /// Extent of the extrusion along its own axis.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Sum of all offsets baked in through [`Solid::translate`].
    #[inline]
    pub fn offset(&self) -> DVec3 {
        self.offset
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_baked(&self) -> bool {
        self.transform.is_identity()
    }

    /// Moves the vertices immediately.
    pub fn translate(mut self, offset: DVec3) -> Self {
        self.mesh.translate(offset);
        self.offset += offset;
        self
    }

    /// Sets the pending rotation.
    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Sets the pending position.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.transform.translation = position;
        self
    }

    /// Applies the pending transform to the vertices and resets it.
    ///
    /// Baking an already baked solid leaves it unchanged.
    pub fn bake(mut self) -> Self {
        if !self.transform.is_identity() {
            self.mesh.transform(&self.transform.matrix());
            self.transform = Transform::IDENTITY;
        }
        self
    }

    /// Mesh in world placement, borrowing when nothing is pending.
    pub fn world_mesh(&self) -> Cow<'_, Mesh> {
        if self.transform.is_identity() {
            Cow::Borrowed(&self.mesh)
        } else {
            let mut mesh = self.mesh.clone();
            mesh.transform(&self.transform.matrix());
            Cow::Owned(mesh)
        }
    }

    /// Enclosed volume in world placement.
    pub fn volume(&self) -> f64 {
        // Rigid transforms preserve volume.
        self.mesh.volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cube;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn cube() -> Solid {
        Solid::new(create_cube(DVec3::ONE, false).unwrap(), 1.0)
    }

    #[test]
    fn test_translate_is_immediate() {
        let solid = cube().translate(DVec3::new(0.0, 0.0, 2.0));
        let (min, _) = solid.mesh().bounding_box();
        assert_eq!(min.z, 2.0);
        assert_eq!(solid.offset(), DVec3::new(0.0, 0.0, 2.0));
        assert!(solid.is_baked());
    }

    #[test]
    fn test_pending_transform_until_baked() {
        let solid = cube().with_position(DVec3::new(5.0, 0.0, 0.0));
        assert!(!solid.is_baked());
        assert_eq!(solid.mesh().bounding_box().0.x, 0.0);
        assert_eq!(solid.world_mesh().bounding_box().0.x, 5.0);

        let baked = solid.bake();
        assert!(baked.is_baked());
        assert_eq!(baked.mesh().bounding_box().0.x, 5.0);
    }

    #[test]
    fn test_bake_is_idempotent() {
        let once = cube()
            .with_rotation(DQuat::from_rotation_x(FRAC_PI_2))
            .with_position(DVec3::Y)
            .bake();
        let twice = once.clone().bake();
        assert_eq!(once.mesh().vertices(), twice.mesh().vertices());
    }

    #[test]
    fn test_rotation_then_translation() {
        // +90° about x sends +z to -y
        let solid = cube()
            .with_rotation(DQuat::from_rotation_x(FRAC_PI_2))
            .with_position(DVec3::new(0.0, 10.0, 0.0))
            .bake();
        let (min, max) = solid.mesh().bounding_box();
        assert_relative_eq!(min.y, 9.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 10.0, epsilon = 1e-12);
        assert_relative_eq!(solid.volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_euler_xyz_applies_z_first() {
        let t = Transform::from_euler_xyz([FRAC_PI_2, 0.0, FRAC_PI_2]);
        // z-rotation takes +x to +y, then x-rotation takes +y to +z
        let v = t.rotation * DVec3::X;
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-12);
    }
}
