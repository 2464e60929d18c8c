//! Centralized configuration values shared by the hull kernel and its
//! WASM boundary.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance below which four points are treated as coplanar when
/// choosing the seed tetrahedron.
///
/// The value assumes roughly unit-scale coordinates; callers working in
/// larger units should scale it through [`HullConfig::new`].
///
/// # Examples
/// ```
/// use config::constants::COPLANAR_TOLERANCE;
/// assert!(COPLANAR_TOLERANCE < 1.0e-3);
/// ```
pub const COPLANAR_TOLERANCE: f32 = 1.0e-5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of faces a hull may hold at any point during construction.
///
/// This bounds the scratch storage of a single invocation and is the only
/// resource-governing knob of the algorithm.
///
/// # Examples
/// ```
/// use config::constants::MAX_FACES;
/// assert_eq!(MAX_FACES, 65_535);
/// ```
pub const MAX_FACES: usize = 65_535;

/// Largest face limit a configuration may request.
///
/// Triangle indices are `u32`, so no hull can usefully hold more faces.
///
/// # Examples
/// ```
/// use config::constants::{MAX_FACES, MAX_FACES_LIMIT};
/// assert!(MAX_FACES <= MAX_FACES_LIMIT);
/// ```
pub const MAX_FACES_LIMIT: usize = u32::MAX as usize;

/// Minimum number of points required before a hull is attempted.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of leading floats of each vertex that hold its position.
///
/// # Examples
/// ```
/// use config::constants::FLOATS_PER_VERTEX;
/// let stride = 8; // position + normal + uv
/// assert!(stride >= FLOATS_PER_VERTEX);
/// ```
pub const FLOATS_PER_VERTEX: usize = 3;

/// Number of point indices per hull triangle.
pub const POINTS_PER_FACE: usize = 3;

/// Number of points in the seed tetrahedron.
pub const SEED_POINT_COUNT: usize = 4;

/// Number of faces in the seed tetrahedron.
pub const SEED_FACE_COUNT: usize = 4;

/// Most faces reserved up front by one invocation; larger limits grow on demand.
pub const INITIAL_FACE_RESERVE: usize = MAX_FACES;

/// Tunable limits for a single hull invocation.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// let config = HullConfig::default();
/// assert!(config.coplanar_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Upper bound on the number of faces held during construction.
    pub max_faces: usize,
    /// Absolute coplanarity tolerance used while seeding.
    pub coplanar_tolerance: f32,
    /// Minimum point count accepted by the builder.
    pub min_points: usize,
}

impl HullConfig {
    /// Builds a configuration, rejecting values that would make seeding
    /// impossible.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::new(1024, 1.0e-3, 4).expect("valid config");
    /// assert_eq!(cfg.max_faces, 1024);
    /// assert!(HullConfig::new(3, 1.0e-3, 4).is_err());
    /// assert!(HullConfig::new(usize::MAX, 1.0e-3, 4).is_err());
    /// ```
    pub fn new(
        max_faces: usize,
        coplanar_tolerance: f32,
        min_points: usize,
    ) -> Result<Self, ConfigError> {
        if !(coplanar_tolerance.is_finite() && coplanar_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(coplanar_tolerance));
        }
        if !(SEED_FACE_COUNT..=MAX_FACES_LIMIT).contains(&max_faces) {
            return Err(ConfigError::InvalidMaxFaces(max_faces));
        }
        if min_points < MIN_HULL_POINTS {
            return Err(ConfigError::InvalidMinPoints(min_points));
        }
        Ok(Self {
            max_faces,
            coplanar_tolerance,
            min_points,
        })
    }

    /// Returns a copy with a different face limit, validated like [`HullConfig::new`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::default().with_max_faces(128).unwrap();
    /// assert_eq!(cfg.max_faces, 128);
    /// ```
    pub fn with_max_faces(self, max_faces: usize) -> Result<Self, ConfigError> {
        Self::new(max_faces, self.coplanar_tolerance, self.min_points)
    }

    /// Returns a copy with a different coplanarity tolerance.
    pub fn with_coplanar_tolerance(self, tolerance: f32) -> Result<Self, ConfigError> {
        Self::new(self.max_faces, tolerance, self.min_points)
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            max_faces: MAX_FACES,
            coplanar_tolerance: COPLANAR_TOLERANCE,
            min_points: MIN_HULL_POINTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative or not finite.
    InvalidTolerance(f32),
    /// Raised when the face limit cannot hold the seed tetrahedron or exceeds
    /// [`MAX_FACES_LIMIT`].
    InvalidMaxFaces(usize),
    /// Raised when the minimum point count is below what a tetrahedron needs.
    InvalidMinPoints(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "coplanar_tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidMaxFaces(value) => {
                write!(
                    f,
                    "max_faces must be between {SEED_FACE_COUNT} and {MAX_FACES_LIMIT}: {value}"
                )
            }
            ConfigError::InvalidMinPoints(value) => {
                write!(f, "min_points must be >= {MIN_HULL_POINTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
