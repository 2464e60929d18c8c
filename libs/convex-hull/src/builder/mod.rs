//! # Hull Builder
//!
//! Incremental convex hull construction.
//!
//! ## Algorithm Steps
//!
//! 1. **Seed**: pick up to four axis-extreme points, falling back to the
//!    first point indices, and scan forward for a fourth point that is not
//!    coplanar with the first three. Build the tetrahedron around the mean
//!    of its corners.
//! 2. **Grow**: visit every remaining point in buffer order.
//!    a. Collect the faces the point lies in front of; none means the point
//!       is inside and is skipped.
//!    b. Extract the horizon of those faces.
//!    c. Pull the running reference point towards the new point.
//!    d. Swap-remove the facing faces and fan new faces from the horizon to
//!       the point.
//! 3. **Done**: the face set, in storage order, is the hull.
//!
//! The reference point is a weighted running average, not a true centroid.
//! It only has to stay inside the hull so that new faces are wound outward.

use crate::error::{HullError, HullResult};
use crate::extremes::find_extreme_points;
use crate::face::{Face, FaceSet};
use crate::horizon::{facing_faces, outside_edges, Edge};
use crate::hull::ConvexHull;
use crate::points::PointBuffer;
use crate::predicates::{are_coplanar, plane_normal};
use crate::vec3::{centroid, multiply_scalar, scale_and_add, Vec3};
use config::constants::{HullConfig, INITIAL_FACE_RESERVE, SEED_POINT_COUNT};

/// Builds convex hulls with a fixed configuration.
///
/// The builder holds no state between calls; every [`HullBuilder::build`]
/// allocates its own face storage and scratch lists.
///
/// # Examples
/// ```
/// use convex_hull::{HullBuilder, HullConfig, PointBuffer};
///
/// let data = [
///     0.0, 0.0, 0.0,
///     1.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
///     0.0, 0.0, 1.0,
/// ];
/// let points = PointBuffer::new(&data, 3).unwrap();
/// let hull = HullBuilder::new(HullConfig::default()).build(&points).unwrap();
/// assert_eq!(hull.triangle_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HullBuilder {
    config: HullConfig,
}

impl HullBuilder {
    /// Creates a builder using `config`.
    pub fn new(config: HullConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder runs with.
    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    /// Computes the hull of every point in `points`.
    ///
    /// # Errors
    /// - [`HullError::InsufficientInput`] for fewer than `min_points` points
    /// - [`HullError::DegenerateInput`] when no non-coplanar seed exists
    /// - [`HullError::CapacityExceeded`] when the hull needs more than
    ///   `max_faces` faces at any step
    pub fn build(&self, points: &PointBuffer<'_>) -> HullResult<ConvexHull> {
        if points.len() < self.config.min_points {
            return Err(HullError::InsufficientInput {
                count: points.len(),
                min: self.config.min_points,
            });
        }

        let seed = select_seed(points, self.config.coplanar_tolerance)?;
        let mut state = HullState::seed(points, seed, self.config.max_faces)?;
        log::debug!(
            "seeded hull with points {:?} from {} candidates",
            seed,
            points.len()
        );

        for index in 0..points.len() as u32 {
            if seed.contains(&index) {
                continue;
            }
            state.insert(points, index)?;
        }

        log::debug!(
            "hull complete: {} faces over {} points",
            state.faces.len(),
            points.len()
        );
        Ok(ConvexHull::from_faces(state.faces.into_faces()))
    }
}

/// Chooses four non-coplanar seed points.
///
/// The first three come from the axis extremes. When there are too few
/// distinct extremes the leading point indices fill in, skipping any index
/// already taken. A third point collinear with the first two is replaced by
/// the first point off their line. The fourth is the first point off the
/// plane of the other three, scanning from the next extreme to the end of
/// the buffer and then wrapping around to the start.
pub(crate) fn select_seed(points: &PointBuffer<'_>, tolerance: f32) -> HullResult<[u32; 4]> {
    let extremes = find_extreme_points(points);
    if extremes.len() < SEED_POINT_COUNT {
        log::warn!(
            "only {} distinct extreme points, seeding from leading indices",
            extremes.len()
        );
    }
    let count = points.len() as u32;

    let mut picked = Vec::with_capacity(3);
    for slot in 0..3 {
        let index = seed_candidate(&extremes, &picked, slot, count);
        picked.push(index);
    }
    let (a, b, mut c) = (picked[0], picked[1], picked[2]);

    let pa = points.point(a as usize);
    let pb = points.point(b as usize);
    if plane_normal(pa, pb, points.point(c as usize)) == Vec3::ZERO {
        c = (0..count)
            .filter(|&i| i != a && i != b)
            .find(|&i| plane_normal(pa, pb, points.point(i as usize)) != Vec3::ZERO)
            .ok_or(HullError::DegenerateInput)?;
        log::debug!("seed points {a} and {b} replaced collinear third point with {c}");
    }
    let pc = points.point(c as usize);

    let start = extremes.get(3).copied().unwrap_or(3).min(count);
    (start..count)
        .chain(0..start)
        .filter(|&d| d != a && d != b && d != c)
        .find(|&d| !are_coplanar(pa, pb, pc, points.point(d as usize), tolerance))
        .map(|d| [a, b, c, d])
        .ok_or(HullError::DegenerateInput)
}

/// Seed index for `slot`: the extreme in that slot, else the slot index
/// itself, else the first index not yet taken.
fn seed_candidate(extremes: &[u32], taken: &[u32], slot: usize, count: u32) -> u32 {
    if let Some(&index) = extremes.get(slot) {
        return index;
    }
    let slot = slot as u32;
    if !taken.contains(&slot) {
        return slot;
    }
    (0..count).find(|i| !taken.contains(i)).unwrap_or(slot)
}

/// Mutable state of one hull construction.
struct HullState {
    faces: FaceSet,
    reference: Vec3,
    processed: usize,
    facing: Vec<usize>,
    edges: Vec<Edge>,
}

impl HullState {
    /// Builds the seed tetrahedron.
    fn seed(points: &PointBuffer<'_>, seed: [u32; 4], max_faces: usize) -> HullResult<Self> {
        let [a, b, c, d] = seed;
        let corners = seed.map(|i| points.point(i as usize));
        let reference = centroid(&corners);

        let mut faces = FaceSet::with_capacity(max_faces);
        let reserve = max_faces.min(INITIAL_FACE_RESERVE);
        for (u, v, w) in [(a, b, c), (a, b, d), (a, c, d), (b, c, d)] {
            faces.push(Face::build(points, u, v, w, reference))?;
        }

        Ok(Self {
            faces,
            reference,
            processed: SEED_POINT_COUNT,
            facing: Vec::with_capacity(reserve),
            edges: Vec::with_capacity(reserve),
        })
    }

    /// Adds point `index` to the hull, returning whether the hull changed.
    fn insert(&mut self, points: &PointBuffer<'_>, index: u32) -> HullResult<bool> {
        let point = points.point(index as usize);
        let count = self.processed as f32;
        self.processed += 1;

        facing_faces(&self.faces, points, point, &mut self.facing);
        if self.facing.is_empty() {
            return Ok(false);
        }

        outside_edges(&self.faces, &self.facing, &mut self.edges);
        debug_assert!(
            self.edges.len() >= 3,
            "horizon of {} facing faces has {} edges",
            self.facing.len(),
            self.edges.len()
        );

        self.reference = multiply_scalar(
            scale_and_add(point, self.reference, count),
            1.0 / (count + 1.0),
        );

        // descending, so every slot past the current one is already settled
        for &slot in self.facing.iter().rev() {
            self.faces.swap_remove(slot);
        }

        for &(u, v) in &self.edges {
            self.faces
                .push(Face::build(points, u, v, index, self.reference))?;
        }

        log::trace!(
            "point {}: replaced {} faces with {}, hull now {} faces",
            index,
            self.facing.len(),
            self.edges.len(),
            self.faces.len()
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
