//! # Point Buffer
//!
//! Borrowed view over a caller-owned, possibly interleaved vertex buffer.
//! Points are addressed by index; only the first three floats of every
//! `stride`-sized record are read.

use crate::error::{HullError, HullResult};
use crate::vec3::Vec3;
use config::constants::FLOATS_PER_VERTEX;

/// A flat `f32` buffer read as a sequence of 3D points.
///
/// # Examples
/// ```
/// use convex_hull::PointBuffer;
/// // position + uv, the uv floats are skipped
/// let data = [0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 2.0, 3.0, 0.1, 0.1];
/// let points = PointBuffer::new(&data, 5).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.point(1).x, 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PointBuffer<'a> {
    data: &'a [f32],
    stride: usize,
    len: usize,
}

impl<'a> PointBuffer<'a> {
    /// Wraps `data`, treating every `stride` floats as one point.
    ///
    /// A trailing record counts as a point as long as its three position
    /// floats are present, even if its trailing attributes are cut off.
    ///
    /// # Errors
    /// [`HullError::InvalidStride`] when `stride` is smaller than a position.
    pub fn new(data: &'a [f32], stride: usize) -> HullResult<Self> {
        if stride < FLOATS_PER_VERTEX {
            return Err(HullError::InvalidStride(stride));
        }
        let len = if data.len() < FLOATS_PER_VERTEX {
            0
        } else {
            (data.len() - FLOATS_PER_VERTEX) / stride + 1
        };
        Ok(Self { data, stride, len })
    }

    /// Number of complete points in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the buffer holds no complete point.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Floats per point record.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Position of point `index`.
    ///
    /// # Panics
    /// When `index >= self.len()`.
    pub fn point(&self, index: usize) -> Vec3 {
        let start = index * self.stride;
        Vec3::from_slice(&self.data[start..start + FLOATS_PER_VERTEX])
    }

    /// Iterates over all point positions in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.len).map(move |i| self.point(i))
    }
}
