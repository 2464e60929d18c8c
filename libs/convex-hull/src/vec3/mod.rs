//! Thin helpers around `glam::Vec3` used by every hull stage.
//!
//! The operations mirror the small vector vocabulary the algorithm is
//! written in. They are plain component-wise `f32` arithmetic so that two
//! runs over the same buffer produce bit-identical results.

pub use glam::Vec3;

/// Returns `a + b`.
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Returns `a - b`.
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Dot product, summed x then y then z.
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product.
///
/// # Examples
/// ```
/// use convex_hull::vec3::{cross, Vec3};
/// assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
/// ```
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Returns `a * s`.
pub fn multiply_scalar(a: Vec3, s: f32) -> Vec3 {
    Vec3::new(a.x * s, a.y * s, a.z * s)
}

/// Returns `a + b * s`.
///
/// # Examples
/// ```
/// use convex_hull::vec3::{scale_and_add, Vec3};
/// let out = scale_and_add(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-2.0, -4.0, -6.0), 0.25);
/// assert_eq!(out, Vec3::new(0.5, 1.0, 1.5));
/// ```
pub fn scale_and_add(a: Vec3, b: Vec3, s: f32) -> Vec3 {
    Vec3::new(a.x + b.x * s, a.y + b.y * s, a.z + b.z * s)
}

/// Scales `a` to unit length.
///
/// A zero-length vector is returned unchanged instead of producing NaNs.
///
/// # Examples
/// ```
/// use convex_hull::vec3::{normalize, Vec3};
/// assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
/// assert_eq!(normalize(Vec3::new(0.0, 3.0, 0.0)), Vec3::Y);
/// ```
pub fn normalize(a: Vec3) -> Vec3 {
    let len = dot(a, a).sqrt();
    if len > 0.0 {
        Vec3::new(a.x / len, a.y / len, a.z / len)
    } else {
        a
    }
}

/// Component-wise equality within an absolute tolerance.
pub fn equals(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance && (a.z - b.z).abs() < tolerance
}

/// Returns `a * a`.
pub fn sqr(a: f32) -> f32 {
    a * a
}

/// Arithmetic mean of the given points, or the origin for an empty set.
///
/// Each point is scaled by `1 / n` before it is added to the sum.
///
/// # Examples
/// ```
/// use convex_hull::vec3::{centroid, Vec3};
/// let c = centroid(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(7.0, 8.0, 9.0)]);
/// assert_eq!(c, Vec3::new(4.0, 5.0, 6.0));
/// ```
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    let n = points.len() as f32;
    points
        .iter()
        .fold(Vec3::ZERO, |acc, p| add(acc, multiply_scalar(*p, 1.0 / n)))
}
