//! # Convex Hull
//!
//! Incremental 3D convex hull triangulation over flat, possibly interleaved
//! vertex buffers, for graphics callers on the other side of a foreign
//! boundary.
//!
//! ## Architecture
//!
//! ```text
//! vec3 → predicates → extremes → face → horizon → builder → ConvexHull
//! ```
//!
//! ## Algorithms
//!
//! - **Seeding**: axis-extreme points, first non-coplanar quadruple
//! - **Growth**: per point, remove visible faces and fan the horizon
//! - **Output**: triangle indices into the caller's buffer, outward wound
//!
//! ## Usage
//!
//! ```rust
//! use convex_hull::build_convex_hull;
//!
//! // unit cube corners, three floats per point
//! let cube = [
//!     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
//!     0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0,
//! ];
//! let hull = build_convex_hull(&cube, 3)?;
//! assert_eq!(hull.triangle_count(), 12);
//! # Ok::<(), convex_hull::HullError>(())
//! ```

pub mod builder;
pub mod error;
pub mod extremes;
pub mod face;
pub mod horizon;
pub mod hull;
pub mod points;
pub mod predicates;
pub mod vec3;

pub use builder::HullBuilder;
pub use config::constants::HullConfig;
pub use error::{HullError, HullResult};
pub use hull::ConvexHull;
pub use points::PointBuffer;

/// Computes the convex hull of `vertices` with the default configuration.
///
/// Every `stride` floats form one point; only the first three are read.
/// The returned triangles index points, not floats.
///
/// # Errors
/// See [`HullError`]; no partial output is produced on failure.
pub fn build_convex_hull(vertices: &[f32], stride: usize) -> HullResult<ConvexHull> {
    build_convex_hull_with_config(vertices, stride, &HullConfig::default())
}

/// Computes the convex hull of `vertices` with an explicit configuration.
///
/// # Examples
/// ```
/// use convex_hull::{build_convex_hull_with_config, HullConfig, HullError};
///
/// let config = HullConfig::default().with_max_faces(4).unwrap();
/// let data = [
///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
///     1.0, 1.0, 1.0,
/// ];
/// let err = build_convex_hull_with_config(&data, 3, &config).unwrap_err();
/// assert_eq!(err, HullError::CapacityExceeded { max: 4 });
/// ```
pub fn build_convex_hull_with_config(
    vertices: &[f32],
    stride: usize,
    config: &HullConfig,
) -> HullResult<ConvexHull> {
    let points = PointBuffer::new(vertices, stride)?;
    HullBuilder::new(*config).build(&points)
}
