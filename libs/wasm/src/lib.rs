//! WASM-facing entry points for the bathymetry coaster.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests go through the `*_internal` helpers, which
//! return Rust error types and never touch a JS host.
//!
//! ```
//! let layers = r#"[[{"simplified": [[0.2,0.2],[0.8,0.2],[0.8,0.8],[0.2,0.8]]}]]"#;
//! let result = bathymetry_wasm::carve_layers_internal(layers, None).unwrap();
//! assert_eq!(result.layer_count(), 1);
//! assert!(result.carved());
//! ```

mod http_source;
mod mesh_handle;
mod scene;

pub use http_source::HttpLayerSource;
pub use mesh_handle::MeshHandle;
pub use scene::{resolve_target, resolve_target_internal, ScrollModel, TargetInfo};

use bathymetry_mesh::contour::ContourRecord;
use bathymetry_mesh::{
    BathymetryError, BathymetryModel, CancelFlag, Layer, SlabConfig, SlabParams,
};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "bathymetry-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Water and carved slab meshes, ready for Three.js.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct BathymetryResult {
    water: MeshHandle,
    slab: MeshHandle,
    layer_count: u32,
    layers_carved: u32,
}

#[wasm_bindgen]
impl BathymetryResult {
    #[wasm_bindgen(getter)]
    pub fn water(&self) -> MeshHandle {
        self.water.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn slab(&self) -> MeshHandle {
        self.slab.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    #[wasm_bindgen(getter)]
    pub fn layers_carved(&self) -> u32 {
        self.layers_carved
    }

    /// False when the slab came back uncarved.
    #[wasm_bindgen(getter)]
    pub fn carved(&self) -> bool {
        self.layers_carved > 0
    }
}

impl From<BathymetryModel> for BathymetryResult {
    fn from(model: BathymetryModel) -> Self {
        let layer_count = u32::try_from(model.layer_count()).unwrap_or(u32::MAX);
        let layers_carved = u32::try_from(model.slab().layers_carved()).unwrap_or(u32::MAX);
        let (water, slab) = model.into_meshes();
        Self {
            water: MeshHandle::from_mesh(water),
            slab: MeshHandle::from_mesh(slab),
            layer_count,
            layers_carved,
        }
    }
}

/// Carves the slab from layers already in hand.
///
/// `layers_json` is an array with one entry per layer, each entry being the
/// contents of a `layer_<i>_contours.json` file. `params_json` optionally
/// overrides slab parameters, e.g. `{"height": 0.2}`.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when decoding or carving fails.
#[wasm_bindgen]
pub fn carve_layers(
    layers_json: &str,
    params_json: Option<String>,
) -> Result<BathymetryResult, JsValue> {
    carve_layers_internal(layers_json, params_json.as_deref()).map_err(to_js_error)
}

/// Host-only variant of [`carve_layers`] with Rust errors.
pub fn carve_layers_internal(
    layers_json: &str,
    params_json: Option<&str>,
) -> Result<BathymetryResult, BathymetryError> {
    let config = parse_params(params_json)?;
    let records: Vec<Vec<ContourRecord>> = serde_json::from_str(layers_json)?;
    if records.is_empty() {
        return Err(BathymetryError::EmptyLayerStack);
    }
    let layers = records
        .iter()
        .enumerate()
        .map(|(index, layer)| Layer::from_records(index, layer))
        .collect::<Result<Vec<_>, _>>()?;

    bathymetry_mesh::carve_layers(&layers, &config, &CancelFlag::new()).map(BathymetryResult::from)
}

/// Fetches every layer under `base_url` and carves the slab.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const result = await load_bathymetry("assets/contour-layers/lake-tahoe");
/// // scene.add(meshFrom(result.water), meshFrom(result.slab));
/// ```
#[wasm_bindgen]
pub async fn load_bathymetry(
    base_url: String,
    params_json: Option<String>,
) -> Result<BathymetryResult, JsValue> {
    BathymetryLoader::new()
        .run(&base_url, params_json.as_deref())
        .await
        .map_err(to_js_error)
}

/// Cancellable loader: the page calls `cancel()` when the scene is torn
/// down before loading finishes.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct BathymetryLoader {
    cancel: CancelFlag,
}

#[wasm_bindgen]
impl BathymetryLoader {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BathymetryLoader {
        Self::default()
    }

    /// Starts loading; resolves to a [`BathymetryResult`].
    #[wasm_bindgen]
    pub fn load(&self, base_url: String, params_json: Option<String>) -> js_sys::Promise {
        let loader = self.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            loader
                .run(&base_url, params_json.as_deref())
                .await
                .map(JsValue::from)
                .map_err(to_js_error)
        })
    }

    #[wasm_bindgen]
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl BathymetryLoader {
    async fn run(
        &self,
        base_url: &str,
        params_json: Option<&str>,
    ) -> Result<BathymetryResult, BathymetryError> {
        let config = parse_params(params_json)?;
        let source = HttpLayerSource::new(base_url);
        bathymetry_mesh::load_bathymetry(&source, &config, &self.cancel)
            .await
            .map(BathymetryResult::from)
    }
}

/// Parses optional slab overrides; missing or blank input means defaults.
pub fn parse_params(params_json: Option<&str>) -> Result<SlabConfig, BathymetryError> {
    match params_json.map(str::trim) {
        None | Some("") => Ok(SlabConfig::default()),
        Some(json) => serde_json::from_str::<SlabParams>(json)
            .map_err(|err| BathymetryError::malformed(format!("invalid slab parameters: {err}")))?
            .into_config(),
    }
}

fn to_js_error(err: BathymetryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
