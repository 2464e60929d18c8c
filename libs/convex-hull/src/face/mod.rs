//! # Hull Faces
//!
//! Oriented triangles with cached outward normals, and the bounded face
//! storage the builder mutates while growing the hull.
//!
//! ## Orientation
//!
//! A face is always stored so that its normal points away from the interior
//! reference point it was built against. Removal is swap-with-last, so slot
//! order is only stable until the next mutation.

use crate::error::{HullError, HullResult};
use crate::points::PointBuffer;
use crate::predicates::plane_normal;
use crate::vec3::{dot, sub, Vec3};
use config::constants::INITIAL_FACE_RESERVE;

/// A triangle of the hull: three point indices and its outward unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Point indices in winding order.
    pub vertices: [u32; 3],
    /// Unit normal pointing away from the interior.
    pub normal: Vec3,
}

impl Face {
    /// Builds the face through points `a`, `b`, `c`, wound so its normal
    /// points away from `reference`.
    ///
    /// The winding is kept as `(a, b, c)` when `plane_normal(a, b, c)`
    /// already points away from `reference`, otherwise it becomes
    /// `(a, c, b)` with the normal negated.
    ///
    /// # Examples
    /// ```
    /// use convex_hull::{face::Face, PointBuffer};
    /// use convex_hull::vec3::Vec3;
    /// let data = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];
    /// let points = PointBuffer::new(&data, 3).unwrap();
    /// let face = Face::build(&points, 0, 1, 2, Vec3::new(0.5, 0.5, 1.0));
    /// assert_eq!(face.vertices, [0, 2, 1]);
    /// assert_eq!(face.normal, Vec3::new(0.0, 0.0, -1.0));
    /// ```
    pub fn build(points: &PointBuffer<'_>, a: u32, b: u32, c: u32, reference: Vec3) -> Self {
        let pa = points.point(a as usize);
        let normal = plane_normal(pa, points.point(b as usize), points.point(c as usize));

        if dot(normal, sub(pa, reference)) > 0.0 {
            Self {
                vertices: [a, b, c],
                normal,
            }
        } else {
            Self {
                vertices: [a, c, b],
                normal: -normal,
            }
        }
    }

    /// Directed edges in winding order: `(v0, v1)`, `(v1, v2)`, `(v2, v0)`.
    pub fn edges(&self) -> [(u32, u32); 3] {
        let [v0, v1, v2] = self.vertices;
        [(v0, v1), (v1, v2), (v2, v0)]
    }
}

/// Bounded, densely packed face storage.
///
/// Capacity is fixed at construction; pushing past it is reported as
/// [`HullError::CapacityExceeded`] rather than growing.
#[derive(Debug, Clone)]
pub struct FaceSet {
    faces: Vec<Face>,
    capacity: usize,
}

impl FaceSet {
    /// Creates an empty set holding at most `capacity` faces.
    ///
    /// Storage for up to [`INITIAL_FACE_RESERVE`] faces is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            faces: Vec::with_capacity(capacity.min(INITIAL_FACE_RESERVE)),
            capacity,
        }
    }

    /// Appends a face and returns its slot.
    ///
    /// # Errors
    /// [`HullError::CapacityExceeded`] when the set is already full.
    pub fn push(&mut self, face: Face) -> HullResult<usize> {
        if self.faces.len() >= self.capacity {
            return Err(HullError::CapacityExceeded { max: self.capacity });
        }
        self.faces.push(face);
        Ok(self.faces.len() - 1)
    }

    /// Removes the face at `slot` by moving the last face into it.
    ///
    /// # Panics
    /// When `slot` is out of bounds.
    pub fn swap_remove(&mut self, slot: usize) -> Face {
        self.faces.swap_remove(slot)
    }

    /// Number of faces currently stored.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true when no faces are stored.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Maximum number of faces this set accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Face at `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&Face> {
        self.faces.get(slot)
    }

    /// Faces in storage order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Iterates over faces in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Face> {
        self.faces.iter()
    }

    /// Consumes the set, returning faces in storage order.
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }
}

impl std::ops::Index<usize> for FaceSet {
    type Output = Face;

    fn index(&self, slot: usize) -> &Face {
        &self.faces[slot]
    }
}
