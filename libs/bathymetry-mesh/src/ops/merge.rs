//! # Solid Merge
//!
//! Concatenates solids into one without any boolean union. Overlapping
//! inputs simply overlap in the output.

use crate::error::{BathymetryError, Result};
use crate::mesh::Mesh;
use crate::solid::Solid;
use glam::DQuat;
use std::borrow::Borrow;

/// Merges solids into a single solid with no pending transform.
///
/// Each input contributes its world-placed vertices, in order. The merged
/// depth spans from the lowest input base to the highest input top along Z.
/// Unrotated inputs contribute `offset.z .. offset.z + depth`; a rotated
/// input contributes the Z extent of its world bounding box instead.
/// Accepts owned solids or references, so one set of solids can feed more
/// than one merge.
///
/// # Errors
///
/// [`BathymetryError::EmptyMerge`] if `solids` is empty.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::{merge_solids, primitives::create_cube, Solid};
/// use glam::DVec3;
///
/// let a = Solid::new(create_cube(DVec3::ONE, false).unwrap(), 1.0);
/// let b = a.clone().translate(DVec3::new(0.0, 0.0, 1.0));
/// let merged = merge_solids([&a, &b]).unwrap();
/// assert_eq!(merged.mesh().vertex_count(), 16);
/// assert_eq!(merged.depth(), 2.0);
/// ```
pub fn merge_solids<I>(solids: I) -> Result<Solid>
where
    I: IntoIterator,
    I::Item: Borrow<Solid>,
{
    let mut mesh = Mesh::new();
    let mut span: Option<(f64, f64)> = None;

    for item in solids {
        let solid = item.borrow();
        let world = solid.world_mesh();
        mesh.merge(&world);

        let (base, top) = if solid.transform().rotation == DQuat::IDENTITY || world.is_empty() {
            let base = solid.offset().z + solid.transform().translation.z;
            (base, base + solid.depth())
        } else {
            let (min, max) = world.bounding_box();
            (min.z, max.z)
        };
        span = Some(match span {
            Some((lo, hi)) => (lo.min(base), hi.max(top)),
            None => (base, top),
        });
    }

    let (lo, hi) = span.ok_or(BathymetryError::EmptyMerge)?;
    Ok(Solid::new(mesh, hi - lo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cube;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn unit() -> Solid {
        Solid::new(create_cube(DVec3::ONE, false).unwrap(), 1.0)
    }

    #[test]
    fn test_merge_empty_fails() {
        let none: Vec<Solid> = Vec::new();
        assert!(matches!(merge_solids(none), Err(BathymetryError::EmptyMerge)));
    }

    #[test]
    fn test_merge_single_preserves_geometry() {
        let solid = unit();
        let merged = merge_solids([&solid]).unwrap();
        assert_eq!(merged.mesh().vertices(), solid.mesh().vertices());
        assert_eq!(merged.mesh().triangles(), solid.mesh().triangles());
    }

    #[test]
    fn test_merge_counts_and_order() {
        let a = unit();
        let b = unit().translate(DVec3::new(3.0, 0.0, 0.0));
        let merged = merge_solids(vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(merged.mesh().vertex_count(), 16);
        assert_eq!(merged.mesh().triangle_count(), 24);
        assert_eq!(&merged.mesh().vertices()[..8], a.mesh().vertices());
        assert_eq!(&merged.mesh().vertices()[8..], b.mesh().vertices());
        assert_eq!(merged.mesh().triangles()[12], [8, 11, 10]);
    }

    #[test]
    fn test_merge_applies_pending_transforms() {
        let moved = unit().with_position(DVec3::new(0.0, 5.0, 0.0));
        let merged = merge_solids([&moved]).unwrap();
        assert!(merged.is_baked());
        assert_eq!(merged.mesh().bounding_box().0.y, 5.0);
    }

    #[test]
    fn test_merge_overlapping_is_not_a_union() {
        let merged = merge_solids([unit(), unit()]).unwrap();
        assert_relative_eq!(merged.volume(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_merge_depth_spans_stack() {
        let layers: Vec<_> = (0..4)
            .map(|i| unit().translate(DVec3::new(0.0, 0.0, i as f64)))
            .collect();
        let merged = merge_solids(&layers).unwrap();
        assert_eq!(merged.depth(), 4.0);
    }

    #[test]
    fn test_merge_depth_of_rotated_solid_uses_world_extent() {
        // A quarter turn about x lays the 3-unit y side along z.
        let tall = Solid::new(create_cube(DVec3::new(1.0, 3.0, 1.0), false).unwrap(), 1.0)
            .with_rotation(DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2));
        let merged = merge_solids([&tall]).unwrap();
        assert_relative_eq!(merged.depth(), 3.0, epsilon = 1e-9);
    }
}
