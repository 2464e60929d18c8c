//! # Hull Output
//!
//! The finished triangulation, as indices into the caller's point buffer.

use crate::face::Face;
use crate::vec3::Vec3;
use config::constants::POINTS_PER_FACE;

/// A triangulated convex hull.
///
/// Triangles are stored in the builder's final face order, which is
/// deterministic for identical input. Each triangle's winding and normal
/// face outward.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    triangles: Vec<[u32; 3]>,
    normals: Vec<Vec3>,
}

impl ConvexHull {
    pub(crate) fn from_faces(faces: Vec<Face>) -> Self {
        let (triangles, normals) = faces.into_iter().map(|f| (f.vertices, f.normal)).unzip();
        Self { triangles, normals }
    }

    /// Point-index triples, one per triangle.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Outward unit normal of each triangle, parallel to [`Self::triangles`].
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true for a hull without triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flat index buffer, three entries per triangle.
    ///
    /// # Examples
    /// ```
    /// use convex_hull::build_convex_hull;
    /// let data = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    /// let hull = build_convex_hull(&data, 3).unwrap();
    /// assert_eq!(hull.indices().len(), 12);
    /// ```
    pub fn indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.triangles.len() * POINTS_PER_FACE);
        indices.extend(self.triangles.iter().flatten().copied());
        indices
    }

    /// Consumes the hull, returning the flat index buffer.
    pub fn into_indices(self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.triangles.len() * POINTS_PER_FACE);
        indices.extend(self.triangles.into_iter().flatten());
        indices
    }

    /// Distinct point indices on the hull, ascending.
    pub fn vertex_indices(&self) -> Vec<u32> {
        let mut indices = self.indices();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
