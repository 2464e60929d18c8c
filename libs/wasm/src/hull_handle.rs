//! # Hull Handle
//!
//! WASM-friendly wrapper for hull data that can be transferred to JavaScript.

use convex_hull::ConvexHull;
use wasm_bindgen::prelude::*;

/// A handle to a computed hull that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const hull = build_convex_hull(positions, positions.length, 8);
///
/// const triangleCount = hull.triangle_count;
/// const indices = hull.indices();        // Uint32Array, point indices
/// const normals = hull.face_normals();   // Float32Array, one per triangle
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.InterleavedBufferAttribute(buffer, 3, 0));
/// geometry.setIndex(new THREE.BufferAttribute(indices, 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct HullHandle {
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Outward face normals as [nx, ny, nz, ...]
    face_normals: Vec<f32>,
    /// Distinct point indices on the hull
    vertex_indices: Vec<u32>,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl HullHandle {
    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns one outward unit normal per triangle as a Float32Array.
    #[wasm_bindgen]
    pub fn face_normals(&self) -> Vec<f32> {
        self.face_normals.clone()
    }

    /// Returns the distinct point indices on the hull, ascending.
    #[wasm_bindgen]
    pub fn vertex_indices(&self) -> Vec<u32> {
        self.vertex_indices.clone()
    }

    /// Returns true if the hull has no triangles.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }
}

impl HullHandle {
    /// Creates a HullHandle from a computed hull.
    pub fn from_hull(hull: ConvexHull) -> Self {
        let triangle_count = u32::try_from(hull.triangle_count()).unwrap_or(u32::MAX);
        let face_normals = hull.normals().iter().flat_map(|n| n.to_array()).collect();
        let vertex_indices = hull.vertex_indices();

        Self {
            indices: hull.into_indices(),
            face_normals,
            vertex_indices,
            triangle_count,
        }
    }
}
