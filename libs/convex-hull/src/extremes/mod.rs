//! # Extreme Points
//!
//! Axis-extreme point selection used to seed the hull with a well-spread
//! tetrahedron.

use crate::points::PointBuffer;

/// Finds the points holding the minimum and maximum coordinate on each axis.
///
/// Candidates are reported in the order min-x, max-x, min-y, max-y, min-z,
/// max-z with duplicates dropped, so up to six distinct point indices are
/// returned. Comparisons are strict: on ties the first point seen wins.
/// An empty buffer yields no candidates.
///
/// # Examples
/// ```
/// use convex_hull::{extremes::find_extreme_points, PointBuffer};
/// let data = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
/// let points = PointBuffer::new(&data, 3).unwrap();
/// assert_eq!(find_extreme_points(&points), vec![0, 1, 2, 3]);
/// ```
pub fn find_extreme_points(points: &PointBuffer<'_>) -> Vec<u32> {
    if points.is_empty() {
        return Vec::new();
    }

    let first = points.point(0);
    let mut min_axis = first.to_array();
    let mut max_axis = first.to_array();
    // [min_x, min_y, min_z, max_x, max_y, max_z]
    let mut extremes = [0usize; 6];

    for (i, p) in points.iter().enumerate().skip(1) {
        for (axis, v) in p.to_array().into_iter().enumerate() {
            if v < min_axis[axis] {
                min_axis[axis] = v;
                extremes[axis] = i;
            }
            if v > max_axis[axis] {
                max_axis[axis] = v;
                extremes[axis + 3] = i;
            }
        }
    }

    let ordered = [
        extremes[0],
        extremes[3],
        extremes[1],
        extremes[4],
        extremes[2],
        extremes[5],
    ];

    let mut unique = Vec::with_capacity(ordered.len());
    for index in ordered {
        let index = index as u32;
        if !unique.contains(&index) {
            unique.push(index);
        }
    }
    unique
}
