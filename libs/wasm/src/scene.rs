//! # Scene Bindings
//!
//! Target lookup and the scroll-reactive coaster pose, exposed to the
//! page's render loop.

use coaster_scene::{DampedScroll, Pose, SceneError, ScrollOffset, ScrollReactiveModel, TargetSpec};
use config::constants::SCROLL_PAGES;
use wasm_bindgen::prelude::*;

/// Asset locations for one coaster.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct TargetInfo {
    spec: TargetSpec,
}

#[wasm_bindgen]
impl TargetInfo {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.spec.target.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn coaster_model_url(&self) -> String {
        self.spec.coaster_model_url.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn contour_layers_url(&self) -> String {
        self.spec.contour_layers_url.clone()
    }

    /// Water model URLs as a JS array of strings.
    #[wasm_bindgen]
    pub fn water_model_urls(&self) -> js_sys::Array {
        self.spec
            .water_model_urls
            .iter()
            .map(|url| JsValue::from_str(url))
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn import_rotation(&self) -> f32 {
        self.spec.import_rotation
    }

    /// Orientation keyframes flattened as `[x, y, z, w, ...]`.
    #[wasm_bindgen]
    pub fn orientation_keyframes(&self) -> Vec<f32> {
        self.spec
            .orientation_sequence
            .iter()
            .flat_map(|q| q.to_array())
            .collect()
    }
}

impl TargetInfo {
    pub fn spec(&self) -> &TargetSpec {
        &self.spec
    }
}

/// Looks up a coaster target by name such as `"san-francisco-bay"` or `"lake tahoe"`.
#[wasm_bindgen]
pub fn resolve_target(name: &str) -> Result<TargetInfo, JsValue> {
    resolve_target_internal(name).map_err(|err| JsValue::from_str(&err.to_string()))
}

pub fn resolve_target_internal(name: &str) -> Result<TargetInfo, SceneError> {
    coaster_scene::resolve_target(name).map(|spec| TargetInfo { spec })
}

/// Per-frame pose driver for the coaster model.
///
/// `frame` returns `[px, py, pz, qx, qy, qz, qw]`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const model = new ScrollModel("san-francisco-bay");
/// renderer.setAnimationLoop((t) => {
///     const [px, py, pz, qx, qy, qz, qw] =
///         model.frame_damped(scroll.offset, clock.getDelta(), t / 1000);
///     coaster.position.set(px, py, pz);
///     coaster.quaternion.set(qx, qy, qz, qw);
/// });
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ScrollModel {
    model: ScrollReactiveModel,
    scroll: DampedScroll,
}

#[wasm_bindgen]
impl ScrollModel {
    #[wasm_bindgen(constructor)]
    pub fn new(target_name: &str) -> Result<ScrollModel, JsValue> {
        Self::for_target(target_name).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Scroll container height, in viewport heights, the host should use.
    #[wasm_bindgen(getter)]
    pub fn scroll_pages(&self) -> u32 {
        SCROLL_PAGES
    }

    /// Keyframe pages (keyframes minus one).
    #[wasm_bindgen(getter)]
    pub fn page_count(&self) -> u32 {
        u32::try_from(self.model.sequencer().page_count()).unwrap_or(u32::MAX)
    }

    /// Pose for an already-damped scroll offset in `[0, 1]`.
    #[wasm_bindgen]
    pub fn frame(&mut self, offset: f64, elapsed_secs: f32) -> Vec<f32> {
        self.model
            .frame(&ScrollOffset::new(offset), elapsed_secs)
            .to_array()
            .to_vec()
    }

    /// Pose for a raw scroll offset, eased over `delta_secs`.
    #[wasm_bindgen]
    pub fn frame_damped(&mut self, raw_offset: f64, delta_secs: f64, elapsed_secs: f32) -> Vec<f32> {
        self.scroll.scroll_to(raw_offset);
        self.scroll.advance(delta_secs);
        self.model.frame(&self.scroll, elapsed_secs).to_array().to_vec()
    }
}

impl ScrollModel {
    pub fn for_target(target_name: &str) -> Result<Self, SceneError> {
        let spec = coaster_scene::resolve_target(target_name)?;
        Ok(Self {
            model: ScrollReactiveModel::from_target(&spec)?,
            scroll: DampedScroll::default(),
        })
    }

    pub fn pose(&mut self, offset: f64, elapsed_secs: f32) -> Pose {
        self.model.frame(&ScrollOffset::new(offset), elapsed_secs)
    }
}
