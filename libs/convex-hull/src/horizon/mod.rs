//! # Horizon Edges
//!
//! Given a point outside the current hull, find the faces it can see and the
//! boundary loop left behind when those faces are removed.
//!
//! Both functions write into caller-owned scratch vectors so a single
//! allocation can be reused for every inserted point.

use crate::face::FaceSet;
use crate::points::PointBuffer;
use crate::vec3::{dot, normalize, sub, Vec3};

/// An edge between two point indices. Edges compare undirected during
/// horizon extraction.
pub type Edge = (u32, u32);

/// Collects the slots of every face that `point` lies strictly in front of.
///
/// A face is facing when `dot(normalize(point - v0), normal) > 0`; points
/// exactly on a face's plane do not count. Slots are reported in storage
/// order. `out` is cleared first.
pub fn facing_faces(faces: &FaceSet, points: &PointBuffer<'_>, point: Vec3, out: &mut Vec<usize>) {
    out.clear();
    for (slot, face) in faces.iter().enumerate() {
        let to_point = normalize(sub(point, points.point(face.vertices[0] as usize)));
        if dot(to_point, face.normal) > 0.0 {
            out.push(slot);
        }
    }
}

/// Computes the horizon of the facing faces at `facing`.
///
/// Every facing face contributes its three winding edges. An edge shared by
/// two facing faces appears twice (in either direction) and both copies are
/// dropped; the survivors, in their original winding direction, form the
/// horizon. `out` is cleared first.
///
/// # Examples
/// ```
/// use convex_hull::face::{Face, FaceSet};
/// use convex_hull::horizon::outside_edges;
/// use convex_hull::vec3::Vec3;
///
/// let mut faces = FaceSet::with_capacity(4);
/// faces.push(Face { vertices: [0, 1, 2], normal: Vec3::Z }).unwrap();
/// faces.push(Face { vertices: [2, 1, 3], normal: Vec3::Z }).unwrap();
///
/// let mut edges = Vec::new();
/// outside_edges(&faces, &[0, 1], &mut edges);
/// assert_eq!(edges.len(), 4);
/// assert!(!edges.contains(&(1, 2)) && !edges.contains(&(2, 1)));
/// ```
pub fn outside_edges(faces: &FaceSet, facing: &[usize], out: &mut Vec<Edge>) {
    collect_edges(faces, facing, out);
    remove_shared_edges(out);
}

/// Appends the winding edges of every face in `facing`, in order.
pub(crate) fn collect_edges(faces: &FaceSet, facing: &[usize], out: &mut Vec<Edge>) {
    out.clear();
    for &slot in facing {
        out.extend_from_slice(&faces[slot].edges());
    }
}

/// Removes every edge that occurs twice, undirected, along with its twin.
///
/// The scan moves forward; on a match the twin and then the current edge are
/// swap-removed and the same position is examined again. Each edge is
/// assumed to be duplicated at most once.
pub(crate) fn remove_shared_edges(edges: &mut Vec<Edge>) {
    let mut i = 0;
    while i < edges.len() {
        let (a, b) = edges[i];
        let twin = edges[i + 1..]
            .iter()
            .position(|&(c, d)| (a == c && b == d) || (a == d && b == c))
            .map(|offset| i + 1 + offset);

        match twin {
            Some(j) => {
                // j > i, so removing j first never disturbs slot i
                edges.swap_remove(j);
                edges.swap_remove(i);
            }
            None => i += 1,
        }
    }
}
