//! # HTTP Layer Source
//!
//! Fetches `layer_<i>_contours.json` files through the browser's
//! `window.fetch`. A 404 ends the layer stack; any other non-success status
//! is a fetch error.

use bathymetry_mesh::contour::{decode_layer, ContourRecord};
use bathymetry_mesh::{BathymetryError, LayerSource, Result};
use config::constants::layer_file_name;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

const NOT_FOUND: u16 = 404;

/// Layer source rooted at a URL prefix, e.g.
/// `assets/contour-layers/lake-tahoe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpLayerSource {
    base_url: String,
}

impl HttpLayerSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of layer `index`.
    pub fn layer_url(&self, index: usize) -> String {
        if self.base_url.is_empty() {
            layer_file_name(index)
        } else {
            format!("{}/{}", self.base_url, layer_file_name(index))
        }
    }
}

impl LayerSource for HttpLayerSource {
    async fn fetch_layer(&self, index: usize) -> Result<Option<Vec<ContourRecord>>> {
        let url = self.layer_url(index);
        let window = web_sys::window()
            .ok_or_else(|| BathymetryError::fetch(&url, "no window available"))?;

        let response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|err| BathymetryError::fetch(&url, describe_js_error(&err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| BathymetryError::fetch(&url, "fetch did not yield a Response"))?;

        if response.status() == NOT_FOUND {
            return Ok(None);
        }
        if !response.ok() {
            return Err(BathymetryError::fetch(
                &url,
                format!("HTTP {} {}", response.status(), response.status_text()),
            ));
        }

        let text_promise = response
            .text()
            .map_err(|err| BathymetryError::fetch(&url, describe_js_error(&err)))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|err| BathymetryError::fetch(&url, describe_js_error(&err)))?;
        let body = body
            .as_string()
            .ok_or_else(|| BathymetryError::fetch(&url, "response body is not text"))?;

        decode_layer(&body).map(Some)
    }

    fn describe(&self, index: usize) -> String {
        self.layer_url(index)
    }
}

fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_url() {
        let source = HttpLayerSource::new("assets/contour-layers/lake-tahoe/");
        assert_eq!(source.base_url(), "assets/contour-layers/lake-tahoe");
        assert_eq!(
            source.layer_url(3),
            "assets/contour-layers/lake-tahoe/layer_3_contours.json"
        );
    }

    #[test]
    fn test_layer_url_without_base() {
        let source = HttpLayerSource::new("");
        assert_eq!(source.layer_url(0), "layer_0_contours.json");
        assert_eq!(source.describe(0), "layer_0_contours.json");
    }
}
