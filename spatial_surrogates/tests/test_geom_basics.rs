use spatial_surrogates::core::math::{
    polyline_length, signed_area, vertex, LengthMode, Vertex, EARTH_RADIUS_M,
};
use spatial_surrogates::core::traits::FuzzyEq;
use spatial_surrogates::geom::{BoundingBox, MultiShape, Ring};

fn square(x0: f64, y0: f64, size: f64) -> Vec<Vertex> {
    vec![
        vertex(x0, y0),
        vertex(x0 + size, y0),
        vertex(x0 + size, y0 + size),
        vertex(x0, y0 + size),
    ]
}

#[test]
fn signed_area_sign_tracks_orientation() {
    let ccw = square(0.0, 0.0, 2.0);
    assert!(signed_area(&ccw).fuzzy_eq(4.0));

    let cw: Vec<Vertex> = ccw.iter().rev().copied().collect();
    assert!(signed_area(&cw).fuzzy_eq(-4.0));

    // triangle
    let tri = vec![vertex(0.0, 0.0), vertex(4.0, 0.0), vertex(0.0, 3.0)];
    assert!(signed_area(&tri).fuzzy_eq(6.0));
}

#[test]
fn signed_area_invariant_under_cyclic_rotation() {
    let ring = vec![
        vertex(0.0, 0.0),
        vertex(5.0, 1.0),
        vertex(6.0, 4.0),
        vertex(2.0, 6.0),
        vertex(-1.0, 3.0),
    ];
    let expected = signed_area(&ring);

    for shift in 1..ring.len() {
        let mut rotated = ring.clone();
        rotated.rotate_left(shift);
        assert!(
            signed_area(&rotated).fuzzy_eq(expected),
            "area changed under cyclic rotation by {}",
            shift
        );
    }
}

#[test]
fn flat_polyline_length() {
    let verts = vec![vertex(0.0, 0.0), vertex(3.0, 4.0), vertex(3.0, 8.0)];
    assert!(polyline_length(&verts, LengthMode::Flat).fuzzy_eq(9.0));

    // single vertex has no segments
    assert!(polyline_length(&[vertex(1.0, 1.0)], LengthMode::Flat).fuzzy_eq(0.0));
}

#[test]
fn great_circle_length_along_equator() {
    // one degree of longitude on the equator
    let verts = vec![vertex(10.0, 0.0), vertex(11.0, 0.0)];
    let expected = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
    let length = polyline_length(&verts, LengthMode::GreatCircle);
    assert!((length - expected).abs() < 1e-6);

    // meridian arc is the same angular distance
    let verts = vec![vertex(10.0, 45.0), vertex(10.0, 46.0)];
    let length = polyline_length(&verts, LengthMode::GreatCircle);
    assert!((length - expected).abs() < 1e-6);
}

#[test]
fn ring_densify_splits_long_segments() {
    let ring = Ring::from_vertices([vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 0.1)]);
    let dense = ring.densified(0.3);

    // first segment splits into 4 pieces, second is short enough already
    assert_eq!(dense.vertex_count(), 6);
    assert_eq!(dense.at(0), vertex(0.0, 0.0));
    assert!(dense.at(1).fuzzy_eq(vertex(0.25, 0.0)));
    assert!(dense.at(3).fuzzy_eq(vertex(0.75, 0.0)));
    assert_eq!(dense.at(4), vertex(1.0, 0.0));
    assert_eq!(dense.at(5), vertex(1.0, 0.1));

    // total length is preserved
    let before = ring.length(LengthMode::Flat);
    let after = dense.length(LengthMode::Flat);
    assert!(before.fuzzy_eq(after));
}

#[test]
fn multi_shape_hole_flags_stay_parallel() {
    let outer = Ring::from_vertices(square(0.0, 0.0, 4.0));
    let hole: Ring = Ring::from_vertices(square(1.0, 1.0, 1.0).into_iter().rev());

    let mut shape = MultiShape::new();
    shape.add_polygon_ring(outer);
    shape.add_polygon_ring(hole);

    assert_eq!(shape.ring_count(), 2);
    assert_eq!(shape.is_hole(0), Some(false));
    assert_eq!(shape.is_hole(1), Some(true));

    // hole subtracts from the net area
    assert!(shape.area().fuzzy_eq(15.0));
}

#[test]
fn multi_shape_bounding_box_covers_all_rings() {
    let shape = MultiShape::from_rings([
        (Ring::from_vertices(square(0.0, 0.0, 1.0)), false),
        (Ring::from_vertices(square(3.0, 2.0, 1.0)), false),
    ]);

    assert_eq!(
        shape.bounding_box(),
        Some(BoundingBox::new(0.0, 0.0, 4.0, 3.0))
    );

    let empty: MultiShape = MultiShape::new();
    assert!(empty.is_empty());
    assert_eq!(empty.bounding_box(), None);
}
