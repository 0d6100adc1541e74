//! Tests for the WASM-facing pipeline helpers.

use super::*;
use approx::assert_relative_eq;

const TWO_LAYERS: &str = r#"[
    [{"simplified": [[0.1,0.1],[0.9,0.1],[0.9,0.9],[0.1,0.9]]}],
    [{"simplified": [[0.3,0.3],[0.7,0.3],[0.7,0.7],[0.3,0.7]],
      "holes": [{"simplified": [[0.45,0.45],[0.55,0.45],[0.55,0.55],[0.45,0.55]]}]}]
]"#;

/// Carving two layers yields non-empty water and slab buffers.
#[test]
fn carve_layers_produces_both_meshes() {
    let result = carve_layers_internal(TWO_LAYERS, None).expect("carving succeeds");

    assert_eq!(result.layer_count(), 2);
    assert_eq!(result.layers_carved(), 2);
    assert!(result.carved());
    assert!(!result.water().is_empty());
    assert!(!result.slab().is_empty());

    let slab = result.slab();
    assert_eq!(slab.vertex_buffer().len(), slab.vertex_count() as usize * 3);
    assert_eq!(slab.index_buffer().len(), slab.triangle_count() as usize * 3);
    assert_eq!(slab.normal_buffer().len(), slab.vertex_buffer().len());
}

/// Every index in the exported buffers points at an exported vertex.
#[test]
fn carve_layers_indices_in_range() {
    let result = carve_layers_internal(TWO_LAYERS, None).unwrap();
    for handle in [result.water(), result.slab()] {
        let count = handle.vertex_count();
        assert!(handle.index_buffer().iter().all(|&i| i < count));
    }
}

#[test]
fn carve_layers_rejects_empty_stack() {
    let err = carve_layers_internal("[]", None).unwrap_err();
    assert!(matches!(err, BathymetryError::EmptyLayerStack));
}

#[test]
fn carve_layers_rejects_malformed_json() {
    let err = carve_layers_internal(r#"[[{"simplified": "nope"}]]"#, None).unwrap_err();
    assert!(matches!(err, BathymetryError::MalformedContour { .. }));
    assert!(!err.to_string().is_empty());
}

#[test]
fn carve_layers_applies_params() {
    let result = carve_layers_internal(TWO_LAYERS, Some(r#"{"height": 0.3}"#)).unwrap();
    let slab = result.slab();
    let ys: Vec<f32> = slab.vertex_buffer().iter().skip(1).step_by(3).copied().collect();
    let max_y = ys.iter().copied().fold(f32::MIN, f32::max);
    let min_y = ys.iter().copied().fold(f32::MAX, f32::min);
    assert_relative_eq!(max_y - min_y, 0.3, epsilon = 1e-4);
}

#[test]
fn parse_params_defaults() {
    assert_eq!(parse_params(None).unwrap(), SlabConfig::default());
    assert_eq!(parse_params(Some("  ")).unwrap(), SlabConfig::default());
}

#[test]
fn parse_params_rejects_invalid() {
    assert!(matches!(
        parse_params(Some(r#"{"water_depth_ratio": 1.5}"#)),
        Err(BathymetryError::InvalidConfig(_))
    ));
    assert!(matches!(
        parse_params(Some("{not json")),
        Err(BathymetryError::MalformedContour { .. })
    ));
}

#[test]
fn loader_cancel_is_shared_with_clones() {
    let loader = BathymetryLoader::new();
    let clone = loader.clone();
    assert!(!clone.cancelled());
    loader.cancel();
    assert!(clone.cancelled());
}

#[test]
fn target_info_resolves_known_targets() {
    let info = resolve_target_internal("lake-tahoe").expect("known target");
    assert_eq!(info.name(), "lake-tahoe");
    assert_eq!(info.spec().water_model_urls.len(), 2);
    assert!(info.contour_layers_url().ends_with("lake-tahoe"));

    let sf = resolve_target_internal("San Francisco Bay").unwrap();
    assert_eq!(sf.orientation_keyframes().len(), 5 * 4);
}

#[test]
fn target_info_rejects_unknown() {
    let err = resolve_target_internal("atlantis").unwrap_err();
    assert_eq!(err.to_string(), "Unknown target atlantis");
}

#[test]
fn scroll_model_frame_is_pose_array() {
    let mut model = ScrollModel::for_target("san-francisco-bay").unwrap();
    assert_eq!(model.page_count(), 4);
    assert_eq!(model.scroll_pages(), 5);

    let frame = model.frame(0.5, 0.0);
    assert_eq!(frame.len(), 7);
    let norm: f32 = frame[3..].iter().map(|c| c * c).sum::<f32>().sqrt();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
}

#[test]
fn scroll_model_damped_frame_eases() {
    let mut damped = ScrollModel::for_target("san-francisco-bay").unwrap();
    let mut direct = ScrollModel::for_target("san-francisco-bay").unwrap();

    // A long step settles onto the raw offset.
    let eased = damped.frame_damped(1.0, 100.0, 0.0);
    let settled = direct.frame(1.0, 0.0);
    for (a, b) in eased.iter().zip(&settled) {
        assert_relative_eq!(*a, *b, epsilon = 1e-4);
    }
}
