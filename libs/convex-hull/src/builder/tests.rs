//! Tests for seeding and incremental growth.

use super::*;
use config::constants::MAX_FACES_LIMIT;

/// Corners of the cube [-1, 1]^3, ordered by (x, y, z) bit pattern.
const CUBE: [f32; 24] = [
    -1.0, -1.0, -1.0, //
    -1.0, -1.0, 1.0, //
    -1.0, 1.0, -1.0, //
    -1.0, 1.0, 1.0, //
    1.0, -1.0, -1.0, //
    1.0, -1.0, 1.0, //
    1.0, 1.0, -1.0, //
    1.0, 1.0, 1.0,
];

const TETRAHEDRON: [f32; 12] = [
    0.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, //
    0.0, 0.0, 1.0,
];

fn build(data: &[f32], config: HullConfig) -> HullResult<ConvexHull> {
    let points = PointBuffer::new(data, 3)?;
    HullBuilder::new(config).build(&points)
}

#[test]
fn seed_uses_distinct_extremes() {
    let points = PointBuffer::new(&CUBE, 3).unwrap();
    assert_eq!(select_seed(&points, 1e-5), Ok([0, 4, 2, 1]));
}

#[test]
fn seed_falls_back_to_leading_indices() {
    // extremes collapse onto points 0 and 1
    let data = [
        -1.0, -1.0, -1.0, //
        1.0, 1.0, 1.0, //
        -1.0, -1.0, 1.0, //
        -1.0, 1.0, -1.0,
    ];
    let points = PointBuffer::new(&data, 3).unwrap();
    assert_eq!(select_seed(&points, 1e-5), Ok([0, 1, 2, 3]));
}

#[test]
fn seed_scans_past_coplanar_candidates() {
    // the first four extremes span a flat diamond
    let data = [
        -1.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, -1.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 0.5,
    ];
    let points = PointBuffer::new(&data, 3).unwrap();
    assert_eq!(select_seed(&points, 1e-5), Ok([0, 1, 2, 4]));
}

#[test]
fn seed_wraps_to_points_before_the_next_extreme() {
    // poles first, so both lie before the equatorial max-y extreme
    let data = [
        0.0, 0.0, 1.0, //
        0.0, 0.0, -1.0, //
        1.0, 0.0, 0.0, //
        -1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, -1.0, 0.0,
    ];
    let points = PointBuffer::new(&data, 3).unwrap();
    assert_eq!(select_seed(&points, 1e-5), Ok([3, 2, 5, 0]));

    let hull = build(&data, HullConfig::default()).unwrap();
    assert_eq!(hull.triangle_count(), 8);
    assert_eq!(hull.vertex_indices(), vec![0, 1, 2, 3, 4, 5]);
    for (triangle, normal) in hull.triangles().iter().zip(hull.normals()) {
        let corner = points.point(triangle[0] as usize);
        assert!(corner.dot(*normal) > 0.0, "{triangle:?} faces inward");
    }
}

#[test]
fn seed_skips_taken_fallback_indices() {
    // point 1 holds every minimum and point 2 every maximum
    let data = [
        0.5, 0.2, 0.3, //
        0.0, 0.0, 0.0, //
        1.0, 1.0, 1.0, //
        0.2, 0.7, 0.4,
    ];
    let points = PointBuffer::new(&data, 3).unwrap();
    assert_eq!(find_extreme_points(&points), vec![1, 2]);
    assert_eq!(select_seed(&points, 1e-5), Ok([1, 2, 0, 3]));

    let hull = build(&data, HullConfig::default()).unwrap();
    assert_eq!(hull.triangle_count(), 4);
    assert_eq!(hull.vertex_indices(), vec![0, 1, 2, 3]);
}

#[test]
fn seed_replaces_collinear_third_point() {
    // points 1, 2 and 0 lie on the line y = -1, z = 0
    let data = [
        0.0, -1.0, 0.0, //
        -1.0, -1.0, 0.0, //
        1.0, -1.0, 0.0, //
        0.0, 0.0, 1.0, //
        0.0, 0.0, -1.0,
    ];
    let points = PointBuffer::new(&data, 3).unwrap();
    assert_eq!(find_extreme_points(&points), vec![1, 2, 0, 3, 4]);
    assert_eq!(select_seed(&points, 1e-5), Ok([1, 2, 3, 4]));

    let hull = build(&data, HullConfig::default()).unwrap();
    assert_eq!(hull.vertex_indices(), vec![1, 2, 3, 4]);
}

#[test]
fn tetrahedron_is_its_own_hull() {
    let hull = build(&TETRAHEDRON, HullConfig::default()).unwrap();
    assert_eq!(
        hull.triangles(),
        &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]
    );
}

#[test]
fn outside_point_replaces_visible_face() {
    let mut data = TETRAHEDRON.to_vec();
    data.extend_from_slice(&[1.0, 1.0, 1.0]);
    let hull = build(&data, HullConfig::default()).unwrap();
    assert_eq!(
        hull.triangles(),
        &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 4], [2, 3, 4], [3, 1, 4]]
    );
}

#[test]
fn cube_triangles_in_storage_order() {
    let hull = build(&CUBE, HullConfig::default()).unwrap();
    assert_eq!(
        hull.triangles(),
        &[
            [0, 2, 4],
            [0, 4, 1],
            [0, 1, 2],
            [3, 1, 5],
            [2, 1, 3],
            [1, 4, 5],
            [4, 2, 6],
            [2, 3, 6],
            [5, 4, 6],
            [3, 5, 7],
            [5, 6, 7],
            [6, 3, 7],
        ]
    );
}

#[test]
fn interior_point_leaves_hull_unchanged() {
    let points = PointBuffer::new(&TETRAHEDRON, 3).unwrap();
    let seed = select_seed(&points, 1e-5).unwrap();
    let mut state = HullState::seed(&points, seed, 16).unwrap();
    let before = state.faces.faces().to_vec();

    let mut data = TETRAHEDRON.to_vec();
    data.extend_from_slice(&[0.1, 0.1, 0.1]);
    let points = PointBuffer::new(&data, 3).unwrap();

    assert_eq!(state.insert(&points, 4), Ok(false));
    assert_eq!(state.faces.faces(), &before[..]);
    assert_eq!(state.processed, 5);
}

#[test]
fn reference_moves_towards_inserted_point() {
    let mut data = TETRAHEDRON.to_vec();
    data.extend_from_slice(&[1.0, 1.0, 1.0]);
    let points = PointBuffer::new(&data, 3).unwrap();
    let mut state = HullState::seed(&points, [0, 1, 2, 3], 16).unwrap();
    let start = state.reference;

    assert_eq!(state.insert(&points, 4), Ok(true));
    let expected = multiply_scalar(scale_and_add(Vec3::ONE, start, 4.0), 1.0 / 5.0);
    assert_eq!(state.reference, expected);
    assert_eq!(state.faces.len(), 6);
}

#[test]
fn too_few_points_is_insufficient() {
    let err = build(&TETRAHEDRON[..9], HullConfig::default()).unwrap_err();
    assert_eq!(err, HullError::InsufficientInput { count: 3, min: 4 });

    let config = HullConfig::new(64, 1e-5, 6).unwrap();
    let err = build(&TETRAHEDRON, config).unwrap_err();
    assert_eq!(err, HullError::InsufficientInput { count: 4, min: 6 });
}

#[test]
fn coplanar_points_are_degenerate() {
    let data = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        1.0, 1.0, 0.0, //
        2.0, 3.0, 0.0,
    ];
    assert_eq!(
        build(&data, HullConfig::default()),
        Err(HullError::DegenerateInput)
    );
}

#[test]
fn collinear_points_are_degenerate() {
    let data = [
        0.0, 0.0, 0.0, //
        1.0, 1.0, 1.0, //
        2.0, 2.0, 2.0, //
        3.0, 3.0, 3.0, //
        4.0, 4.0, 4.0,
    ];
    assert_eq!(
        build(&data, HullConfig::default()),
        Err(HullError::DegenerateInput)
    );
}

#[test]
fn face_limit_is_enforced() {
    let tight = HullConfig::default().with_max_faces(11).unwrap();
    assert_eq!(
        build(&CUBE, tight),
        Err(HullError::CapacityExceeded { max: 11 })
    );

    let exact = HullConfig::default().with_max_faces(12).unwrap();
    assert_eq!(build(&CUBE, exact).unwrap().triangle_count(), 12);
}

#[test]
fn largest_face_limit_reserves_lazily() {
    let widest = HullConfig::default()
        .with_max_faces(MAX_FACES_LIMIT)
        .unwrap();
    let points = PointBuffer::new(&CUBE, 3).unwrap();
    let state = HullState::seed(&points, [0, 4, 2, 1], widest.max_faces).unwrap();
    assert_eq!(state.faces.capacity(), MAX_FACES_LIMIT);
    assert_eq!(state.processed, SEED_POINT_COUNT);

    assert_eq!(build(&CUBE, widest).unwrap().triangle_count(), 12);
}
