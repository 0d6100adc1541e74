//! # Bathymetry Errors
//!
//! Error types for the contour-to-slab pipeline.

use config::constants::ConfigError;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BathymetryError>;

/// Errors that can occur while loading, building or carving bathymetry.
#[derive(Debug, Error)]
pub enum BathymetryError {
    /// A contour record could not be turned into a shape
    #[error("Malformed contour: {message}")]
    MalformedContour { message: String },

    /// The layer source produced zero layers
    #[error("No contour layers were loaded")]
    EmptyLayerStack,

    /// A merge was requested over an empty list of solids
    #[error("Cannot merge an empty list of solids")]
    EmptyMerge,

    /// A layer existed but could not be retrieved
    #[error("Failed to fetch '{resource}': {message}")]
    Fetch { resource: String, message: String },

    /// Slab parameters failed validation
    #[error("Invalid slab configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The pipeline was cancelled before it finished
    #[error("Pipeline cancelled")]
    Cancelled,
}

impl BathymetryError {
    /// Creates a malformed contour error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedContour {
            message: message.into(),
        }
    }

    /// Creates a fetch error for the given resource.
    pub fn fetch(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for BathymetryError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("invalid layer JSON: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BathymetryError::fetch("layer_3_contours.json", "HTTP 500");
        assert_eq!(
            err.to_string(),
            "Failed to fetch 'layer_3_contours.json': HTTP 500"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: BathymetryError = ConfigError::InvalidWaterRatio(2.0).into();
        assert!(matches!(err, BathymetryError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_error_is_malformed() {
        let json_err = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let err: BathymetryError = json_err.into();
        assert!(matches!(err, BathymetryError::MalformedContour { .. }));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BathymetryError>();
    }
}
