//! # Layer Sources
//!
//! Contour layers live at `<base>/layer_<i>_contours.json` for
//! `i = 0, 1, 2, ...`. The first missing index ends the stack; layers are
//! fetched strictly in order, one at a time.
//!
//! | Source | Backing store | "Missing" means |
//! |--------|---------------|-----------------|
//! | [`MemoryLayerSource`] | `Vec` of decoded layers | index past the end |
//! | [`DirectoryLayerSource`] | local directory (`fs` feature) | file not found |
//!
//! The browser build supplies its own HTTP source.

use crate::cancel::CancelFlag;
use crate::contour::{decode_layer, ContourRecord, Layer};
use crate::error::{BathymetryError, Result};
use tracing::{debug, info};

/// Async provider of contour layer files.
///
/// Futures are not required to be `Send`; browser fetch futures are not.
#[allow(async_fn_in_trait)]
pub trait LayerSource {
    /// Fetches layer `index`.
    ///
    /// Returns `Ok(None)` when the layer does not exist, which ends the
    /// stack. Any other failure is an error.
    async fn fetch_layer(&self, index: usize) -> Result<Option<Vec<ContourRecord>>>;

    /// Human-readable location of layer `index`, for logs and errors.
    fn describe(&self, index: usize) -> String {
        config::constants::layer_file_name(index)
    }
}

/// Fetches layers `0, 1, 2, ...` until the first missing one.
///
/// # Errors
///
/// - [`BathymetryError::EmptyLayerStack`] if layer 0 is missing
/// - [`BathymetryError::Cancelled`] if `cancel` is raised between fetches
/// - any fetch or decode error from the source
pub async fn fetch_layers<S: LayerSource>(source: &S, cancel: &CancelFlag) -> Result<Vec<Layer>> {
    let mut layers = Vec::new();

    loop {
        cancel.check()?;
        let index = layers.len();
        let Some(records) = source.fetch_layer(index).await? else {
            debug!(index, resource = %source.describe(index), "end of layer stack");
            break;
        };
        layers.push(Layer::from_records(index, &records)?);
    }

    if layers.is_empty() {
        return Err(BathymetryError::EmptyLayerStack);
    }
    info!(count = layers.len(), "fetched contour layers");
    Ok(layers)
}

// =============================================================================
// IN-MEMORY SOURCE
// =============================================================================

/// Serves pre-decoded layers from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayerSource {
    layers: Vec<Vec<ContourRecord>>,
}

impl MemoryLayerSource {
    pub fn new(layers: Vec<Vec<ContourRecord>>) -> Self {
        Self { layers }
    }

    /// Decodes one JSON body per layer.
    pub fn from_json<'a>(bodies: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let layers = bodies
            .into_iter()
            .map(decode_layer)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { layers })
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl LayerSource for MemoryLayerSource {
    async fn fetch_layer(&self, index: usize) -> Result<Option<Vec<ContourRecord>>> {
        Ok(self.layers.get(index).cloned())
    }
}

// =============================================================================
// DIRECTORY SOURCE
// =============================================================================

#[cfg(feature = "fs")]
pub use directory::DirectoryLayerSource;

#[cfg(feature = "fs")]
mod directory {
    use super::*;
    use config::constants::layer_file_name;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// Reads layer files from a local directory with `tokio::fs`.
    #[derive(Debug, Clone)]
    pub struct DirectoryLayerSource {
        root: PathBuf,
    }

    impl DirectoryLayerSource {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        fn path(&self, index: usize) -> PathBuf {
            self.root.join(layer_file_name(index))
        }
    }

    impl LayerSource for DirectoryLayerSource {
        async fn fetch_layer(&self, index: usize) -> Result<Option<Vec<ContourRecord>>> {
            let path = self.path(index);
            match tokio::fs::read_to_string(&path).await {
                Ok(body) => decode_layer(&body).map(Some),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(BathymetryError::fetch(path.display().to_string(), e.to_string())),
            }
        }

        fn describe(&self, index: usize) -> String {
            self.path(index).display().to_string()
        }
    }
}
