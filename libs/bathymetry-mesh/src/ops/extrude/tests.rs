//! # Extrusion Tests

use super::prism::signed_area;
use super::*;
use crate::contour::{PolygonWithHoles, Ring};
use crate::shape::build_shape;
use approx::assert_relative_eq;
use glam::DVec2;

fn shape(outer: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> Shape {
    let ring = |pts: &[(f64, f64)]| Ring::new(pts.iter().map(|&(x, y)| DVec2::new(x, y)).collect());
    let polygon = PolygonWithHoles::new(ring(outer), holes.iter().map(|h| ring(*h)).collect());
    build_shape(&polygon).unwrap()
}

const UNIT_SQUARE: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

// =============================================================================
// SINGLE SHAPE
// =============================================================================

#[test]
fn test_extrude_square() {
    let solid = extrude_shape(&shape(UNIT_SQUARE, &[]), 0.5).unwrap();
    let mesh = solid.mesh();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.validate());
    assert_relative_eq!(mesh.volume(), 0.5, epsilon = 1e-12);
    assert_eq!(solid.depth(), 0.5);

    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::ZERO);
    assert_eq!(max, DVec3::new(1.0, 1.0, 0.5));
}

#[test]
fn test_closing_vertex_is_ignored() {
    let closed = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
    let solid = extrude_shape(&shape(&closed, &[]), 1.0).unwrap();
    assert_eq!(solid.mesh().vertex_count(), 8);
    assert_relative_eq!(solid.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_clockwise_outer_is_reoriented() {
    let clockwise: Vec<_> = UNIT_SQUARE.iter().rev().copied().collect();
    let solid = extrude_shape(&shape(&clockwise, &[]), 1.0).unwrap();
    assert_relative_eq!(solid.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_hole_is_cut_out() {
    let hole: &[(f64, f64)] = &[(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75), (0.25, 0.25)];
    let solid = extrude_shape(&shape(UNIT_SQUARE, &[hole]), 2.0).unwrap();
    assert!(solid.mesh().validate());
    assert_relative_eq!(solid.volume(), (1.0 - 0.25) * 2.0, epsilon = 1e-12);
    // 4 outer + 4 hole points on each cap
    assert_eq!(solid.mesh().vertex_count(), 16);
}

#[test]
fn test_concave_outline() {
    let l_shape = [(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)];
    let solid = extrude_shape(&shape(&l_shape, &[]), 1.0).unwrap();
    assert_relative_eq!(solid.volume(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_degenerate_outer_yields_empty_solid() {
    let solid = extrude_shape(&shape(&[(0.0, 0.0), (1.0, 0.0)], &[]), 1.0).unwrap();
    assert!(solid.mesh().is_empty());
    assert_eq!(solid.volume(), 0.0);
}

#[test]
fn test_degenerate_hole_is_skipped() {
    let hole: &[(f64, f64)] = &[(0.5, 0.5)];
    let solid = extrude_shape(&shape(UNIT_SQUARE, &[hole]), 1.0).unwrap();
    assert_eq!(solid.mesh().vertex_count(), 8);
    assert_relative_eq!(solid.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_signed_area() {
    let square: Vec<_> = UNIT_SQUARE.iter().map(|&(x, y)| DVec2::new(x, y)).collect();
    assert_relative_eq!(signed_area(&square), 1.0);
    let reversed: Vec<_> = square.iter().rev().copied().collect();
    assert_relative_eq!(signed_area(&reversed), -1.0);
}

// =============================================================================
// LAYERS
// =============================================================================

#[test]
fn test_depth_per_layer() {
    assert_relative_eq!(depth_per_layer(0.8, 4).unwrap(), 0.2);
    assert!(matches!(
        depth_per_layer(0.8, 0),
        Err(BathymetryError::EmptyLayerStack)
    ));
}

#[test]
fn test_layer_offsets_do_not_drift() {
    let depth = depth_per_layer(0.0944, 37).unwrap();
    let last = layer_offset(36, depth);
    assert_eq!(last.z, 36.0 * (0.0944 / 37.0));
}

#[test]
fn test_extrude_layer_places_shapes() {
    let shapes = [shape(UNIT_SQUARE, &[]), shape(&[(0.0, 0.0), (0.5, 0.0), (0.0, 0.5)], &[])];
    let solids = extrude_layer(&shapes, 3, 4, 0.8).unwrap();
    assert_eq!(solids.len(), 2);

    for solid in &solids {
        assert_relative_eq!(solid.depth(), 0.2);
        assert_eq!(solid.offset(), layer_offset(3, 0.8 / 4.0));
        let (min, max) = solid.mesh().bounding_box();
        assert_relative_eq!(min.z, 0.6, epsilon = 1e-12);
        assert_relative_eq!(max.z, 0.8, epsilon = 1e-12);
        assert_relative_eq!(min.x, -0.5, epsilon = 1e-12);
    }
}

#[test]
fn test_extrude_layer_with_no_layers() {
    let err = extrude_layer(&[shape(UNIT_SQUARE, &[])], 0, 0, 0.8).unwrap_err();
    assert!(matches!(err, BathymetryError::EmptyLayerStack));
}
