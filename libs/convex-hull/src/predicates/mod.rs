//! # Geometry Predicates
//!
//! Plane normals and coplanarity tests. The operand order of
//! [`plane_normal`] fixes the winding convention used by face construction.

use crate::vec3::{cross, dot, normalize, sub, Vec3};

/// Unit normal of the plane through `a`, `b`, `c`, computed as
/// `normalize(cross(c - b, a - b))`.
///
/// Collinear or coincident points yield the zero vector.
///
/// # Examples
/// ```
/// use convex_hull::predicates::plane_normal;
/// use convex_hull::vec3::Vec3;
/// let n = plane_normal(Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0));
/// assert_eq!(n, Vec3::Z);
/// ```
pub fn plane_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    normalize(cross(sub(c, b), sub(a, b)))
}

/// Returns true when `d` lies within `tolerance` of the plane through
/// `a`, `b`, `c`.
///
/// A degenerate plane (collinear or coincident `a`, `b`, `c`) always counts
/// as coplanar.
pub fn are_coplanar(a: Vec3, b: Vec3, c: Vec3, d: Vec3, tolerance: f32) -> bool {
    let normal = plane_normal(a, b, c);
    dot(sub(d, a), normal).abs() < tolerance
}
