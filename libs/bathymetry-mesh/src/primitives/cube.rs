//! # Box Primitive
//!
//! Rectangular prisms, including the table slab the water is carved from.

use crate::error::Result;
use crate::mesh::Mesh;
use crate::solid::Solid;
use config::constants::{ConfigError, SlabConfig};
use glam::DVec3;

/// Creates a box mesh with outward (counter-clockwise) winding.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::splat(10.0), false).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(size: DVec3, center: bool) -> Result<Mesh> {
    for (name, value) in [("size.x", size.x), ("size.y", size.y), ("size.z", size.z)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::InvalidDimension { name, value }.into());
        }
    }

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec3::ZERO, size)
    };

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom ring (z = min.z) then top ring (z = max.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    for [a, b, c, d] in [
        [v0, v3, v2, v1], // -z
        [v4, v5, v6, v7], // +z
        [v0, v1, v5, v4], // -y
        [v2, v3, v7, v6], // +y
        [v3, v0, v4, v7], // -x
        [v1, v2, v6, v5], // +x
    ] {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    Ok(mesh)
}

/// Builds the uncarved slab: `short_dim × height × long_dim`, centred on the
/// origin, with a pending position that drops it just below `y = 0`.
///
/// # Example
///
/// ```rust
/// use bathymetry_mesh::{primitives::slab_base, SlabConfig};
///
/// let config = SlabConfig::default();
/// let slab = slab_base(&config).unwrap();
/// assert!(!slab.is_baked());
/// assert!(slab.transform().translation.y < 0.0);
/// ```
pub fn slab_base(config: &SlabConfig) -> Result<Solid> {
    config.validate()?;
    let size = DVec3::new(config.short_dim, config.height, config.long_dim);
    let mesh = create_cube(size, true)?;
    Ok(Solid::new(mesh, config.height).with_position(DVec3::new(0.0, config.slab_center_y(), 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BathymetryError;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_not_centered() {
        let mesh = create_cube(DVec3::splat(10.0), false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::splat(10.0));
    }

    #[test]
    fn test_cube_centered() {
        let mesh = create_cube(DVec3::splat(10.0), true).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-5.0));
        assert_eq!(max, DVec3::splat(5.0));
    }

    #[test]
    fn test_cube_outward_winding() {
        let mesh = create_cube(DVec3::new(1.0, 2.0, 3.0), true).unwrap();
        assert!(mesh.validate());
        assert_relative_eq!(mesh.volume(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cube_rejects_non_positive_size() {
        let err = create_cube(DVec3::new(1.0, 0.0, 1.0), false).unwrap_err();
        assert!(matches!(err, BathymetryError::InvalidConfig(_)));
    }

    #[test]
    fn test_slab_base_dimensions() {
        let config = SlabConfig::new(2.0, 1.0, 0.1, 0.8).unwrap();
        let slab = slab_base(&config).unwrap().bake();
        let (min, max) = slab.mesh().bounding_box();
        assert_relative_eq!(max.x - min.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(max.y - min.y, 0.1, epsilon = 1e-12);
        assert_relative_eq!(max.z - min.z, 2.0, epsilon = 1e-12);
        // Top face sits a hair below the water surface
        assert_relative_eq!(max.y, 1.01 * -0.05 + 0.05, epsilon = 1e-12);
        assert!(max.y < 0.0);
    }
}
