//! # Contour Data Model
//!
//! Per-depth contour layers as they arrive from the asset pipeline, and the
//! typed 2D rings they decode into.
//!
//! ## Wire Format
//!
//! Each layer file is a JSON array of records:
//!
//! ```text
//! [
//!   { "simplified": [[x, y], ...], "holes": [ { "simplified": [[x, y], ...] } ] },
//!   ...
//! ]
//! ```
//!
//! Coordinates are normalized to roughly `[0, 1]` with the first vertex
//! repeated at the end. Extra coordinates per vertex are ignored; `holes`
//! may be omitted.

use crate::error::{BathymetryError, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// WIRE RECORDS
// =============================================================================

/// One contour record as found in a layer file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourRecord {
    /// Outer boundary vertices.
    pub simplified: Vec<Vec<f64>>,
    /// Hole boundaries (may be absent).
    #[serde(default)]
    pub holes: Vec<HoleRecord>,
}

/// One hole inside a [`ContourRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleRecord {
    pub simplified: Vec<Vec<f64>>,
}

/// Decodes one layer file body into its contour records.
pub fn decode_layer(json: &str) -> Result<Vec<ContourRecord>> {
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// TYPED GEOMETRY
// =============================================================================

/// An ordered sequence of 2D points tracing a closed boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring(Vec<DVec2>);

impl Ring {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self(points)
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the ring cannot enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < 3
    }

    fn from_coordinates(coords: &[Vec<f64>], what: &str) -> Result<Self> {
        coords
            .iter()
            .enumerate()
            .map(|(i, c)| match c.as_slice() {
                [x, y, ..] => Ok(DVec2::new(*x, *y)),
                _ => Err(BathymetryError::malformed(format!(
                    "{what} vertex {i} has {} coordinate(s), expected at least 2",
                    c.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

/// An outer ring and zero or more hole rings.
///
/// Holes are not checked for containment within the outer ring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonWithHoles {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl PolygonWithHoles {
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }
}

impl TryFrom<&ContourRecord> for PolygonWithHoles {
    type Error = BathymetryError;

    fn try_from(record: &ContourRecord) -> Result<Self> {
        let outer = Ring::from_coordinates(&record.simplified, "outer ring")?;
        let holes = record
            .holes
            .iter()
            .enumerate()
            .map(|(i, hole)| Ring::from_coordinates(&hole.simplified, &format!("hole {i}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { outer, holes })
    }
}

/// One depth slice of the stack. Index 0 is the shallowest layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub index: usize,
    pub polygons: Vec<PolygonWithHoles>,
}

impl Layer {
    pub fn new(index: usize, polygons: Vec<PolygonWithHoles>) -> Self {
        Self { index, polygons }
    }

    /// Builds a layer from decoded records.
    pub fn from_records(index: usize, records: &[ContourRecord]) -> Result<Self> {
        let polygons = records
            .iter()
            .map(PolygonWithHoles::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { index, polygons })
    }

    /// Decodes a layer file body.
    pub fn from_json(index: usize, json: &str) -> Result<Self> {
        Self::from_records(index, &decode_layer(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_outer_and_holes() {
        let json = r#"[
            {"simplified": [[0,0],[1,0],[1,1],[0,1],[0,0]],
             "holes": [{"simplified": [[0.25,0.25],[0.75,0.25],[0.75,0.75],[0.25,0.25]]}]}
        ]"#;
        let layer = Layer::from_json(2, json).unwrap();
        assert_eq!(layer.index, 2);
        assert_eq!(layer.polygons.len(), 1);
        assert_eq!(layer.polygons[0].outer.len(), 5);
        assert_eq!(layer.polygons[0].holes.len(), 1);
        assert_eq!(layer.polygons[0].holes[0].points()[1], DVec2::new(0.75, 0.25));
    }

    #[test]
    fn test_holes_default_to_empty() {
        let json = r#"[{"simplified": [[0,0],[1,0],[0,1]]}]"#;
        let layer = Layer::from_json(0, json).unwrap();
        assert!(layer.polygons[0].holes.is_empty());
    }

    #[test]
    fn test_extra_coordinates_ignored() {
        let json = r#"[{"simplified": [[0,0,9],[1,0,9],[0,1,9]]}]"#;
        let layer = Layer::from_json(0, json).unwrap();
        assert_eq!(layer.polygons[0].outer.points()[1], DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_short_vertex_is_malformed() {
        let json = r#"[{"simplified": [[0,0],[1],[0,1]]}]"#;
        let err = Layer::from_json(0, json).unwrap_err();
        assert!(matches!(err, BathymetryError::MalformedContour { .. }));
        assert!(err.to_string().contains("vertex 1"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = decode_layer("{ not json").unwrap_err();
        assert!(matches!(err, BathymetryError::MalformedContour { .. }));
    }

    #[test]
    fn test_missing_simplified_is_malformed() {
        let err = decode_layer(r#"[{"holes": []}]"#).unwrap_err();
        assert!(matches!(err, BathymetryError::MalformedContour { .. }));
    }

    #[test]
    fn test_empty_layer_file() {
        let layer = Layer::from_json(0, "[]").unwrap();
        assert!(layer.polygons.is_empty());
    }

    #[test]
    fn test_ring_degenerate() {
        assert!(Ring::new(vec![DVec2::ZERO, DVec2::X]).is_degenerate());
        assert!(!Ring::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]).is_degenerate());
    }
}
