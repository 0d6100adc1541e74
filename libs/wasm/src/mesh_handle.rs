//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use bathymetry_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const result = await load_bathymetry("assets/contour-layers/lake-tahoe");
/// const slab = result.slab;
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(slab.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(slab.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(slab.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the per-vertex normals as a Float32Array.
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }
}

impl MeshHandle {
    /// Flattens a mesh into GPU-ready buffers, computing normals if the mesh
    /// carries none.
    pub fn from_mesh(mut mesh: Mesh) -> Self {
        if mesh.normals().is_none() {
            mesh.compute_normals();
        }

        Self {
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
        }
    }

    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn normal_buffer(&self) -> &[f32] {
        &self.normals
    }
}
