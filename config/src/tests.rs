//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_coplanar_tolerance_is_positive() {
    assert!(COPLANAR_TOLERANCE > 0.0, "COPLANAR_TOLERANCE must be positive");
}

#[test]
fn test_coplanar_tolerance_is_small() {
    assert!(
        COPLANAR_TOLERANCE < 1e-3,
        "COPLANAR_TOLERANCE should be small relative to unit-scale input"
    );
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_faces_holds_seed() {
    assert!(MAX_FACES >= SEED_FACE_COUNT);
    assert!(MAX_FACES <= MAX_FACES_LIMIT);
    assert!(INITIAL_FACE_RESERVE <= MAX_FACES_LIMIT);
}

#[test]
fn test_min_points_forms_tetrahedron() {
    assert_eq!(MIN_HULL_POINTS, SEED_POINT_COUNT);
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_vertex_layout() {
    assert_eq!(FLOATS_PER_VERTEX, 3);
    assert_eq!(POINTS_PER_FACE, 3);
}
