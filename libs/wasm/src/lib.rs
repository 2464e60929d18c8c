//! WASM-facing entry points for the convex hull kernel.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helpers
//! (`build_convex_hull_internal`, `parse_options`) to avoid depending on a
//! JS host.
//!
//! ```
//! let cube = [
//!     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
//!     0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0,
//! ];
//! let hull = convex_hull_wasm::build_convex_hull_internal(&cube, 24, 3, None).unwrap();
//! assert_eq!(hull.triangle_count(), 12);
//! ```

use config::constants::{HullConfig, MAX_FACES};
use convex_hull::{build_convex_hull_with_config, HullError};
use wasm_bindgen::prelude::*;

mod hull_handle;
mod options;

pub use hull_handle::HullHandle;
pub use options::{parse_options, HullOptions, OptionsError};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "convex_hull_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default face limit of a single hull invocation.
///
/// # Examples
/// ```
/// assert_eq!(convex_hull_wasm::max_faces(), 65_535);
/// ```
#[wasm_bindgen]
pub fn max_faces() -> u32 {
    u32::try_from(MAX_FACES).unwrap_or(u32::MAX)
}

/// Computes the convex hull of a vertex buffer with default limits.
///
/// `vertex_float_count` is the number of floats to read from `vertices`
/// (not the point count); `stride` is the number of floats per vertex.
///
/// # Errors
/// Throws a JavaScript `Error` whose `status` property carries the numeric
/// status code (`-1` insufficient input, `-2` degenerate input, `-3`
/// capacity exceeded, `-4` invalid stride).
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const hull = build_convex_hull(positions, positions.length, 3);
/// // geometry.setIndex(new THREE.BufferAttribute(hull.indices(), 1));
/// ```
#[wasm_bindgen]
pub fn build_convex_hull(
    vertices: &[f32],
    vertex_float_count: u32,
    stride: u32,
) -> Result<HullHandle, JsValue> {
    build_convex_hull_internal(vertices, vertex_float_count as usize, stride as usize, None)
        .map_err(|err| hull_error_to_js(&err))
}

/// Computes the convex hull with limits supplied as JSON, e.g.
/// `{"maxFaces": 1024, "coplanarTolerance": 0.001}`. Missing fields keep
/// their defaults.
///
/// # Errors
/// Throws for malformed options (without a `status`) or for any hull error
/// as described on [`build_convex_hull`].
#[wasm_bindgen]
pub fn build_convex_hull_with_options(
    vertices: &[f32],
    vertex_float_count: u32,
    stride: u32,
    options_json: &str,
) -> Result<HullHandle, JsValue> {
    let config = parse_options(options_json)
        .map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))?;
    build_convex_hull_internal(
        vertices,
        vertex_float_count as usize,
        stride as usize,
        Some(config),
    )
    .map_err(|err| hull_error_to_js(&err))
}

/// Host-only helper that runs the hull over the first `vertex_float_count`
/// floats of `vertices`.
///
/// A float count larger than the buffer is clamped to the buffer length.
pub fn build_convex_hull_internal(
    vertices: &[f32],
    vertex_float_count: usize,
    stride: usize,
    config: Option<HullConfig>,
) -> Result<HullHandle, HullError> {
    let floats = &vertices[..vertex_float_count.min(vertices.len())];
    let config = config.unwrap_or_default();
    let hull = build_convex_hull_with_config(floats, stride, &config)?;
    Ok(HullHandle::from_hull(hull))
}

fn hull_error_to_js(err: &HullError) -> JsValue {
    let error = js_sys::Error::new(&err.to_string());
    // setting a property on a fresh Error object cannot fail
    let _ = js_sys::Reflect::set(
        &error,
        &JsValue::from_str("status"),
        &JsValue::from_f64(f64::from(err.status_code())),
    );
    error.into()
}
