//! Shape round trips through the command stream.
//!
//! The projection shifts by 10 units in each axis, so geographic inputs on
//! the integer lattice come back exactly.

use geo_types::{coord, line_string, point, polygon, Coord, MultiLineString, MultiPoint};
use geometry::{decode, encode, RawShape, Shape};

fn project(c: Coord<f64>) -> Coord<i32> {
    coord! { x: c.x as i32 - 10, y: c.y as i32 - 10 }
}

fn unproject(c: Coord<i32>) -> Coord<f64> {
    coord! { x: f64::from(c.x) + 10.0, y: f64::from(c.y) + 10.0 }
}

fn round_trip(shape: &Shape) -> Shape {
    let words = encode(shape, project).expect("encode");
    decode(&words, shape.kind(), unproject).expect("decode")
}

#[test]
fn raw_shape() {
    let shape = Shape::Raw(RawShape::new(vec![9, 48, 4]));
    assert_eq!(round_trip(&shape), shape);
}

#[test]
fn single_point() {
    let shape = Shape::Point(point! { x: 34.0, y: 12.0 });
    assert_eq!(round_trip(&shape), shape);
}

#[test]
fn multi_point() {
    let shape = Shape::MultiPoint(MultiPoint(vec![
        point! { x: 34.0, y: 12.0 },
        point! { x: 78.0, y: 56.0 },
    ]));
    assert_eq!(round_trip(&shape), shape);
}

#[test]
fn line_string() {
    let shape = Shape::LineString(line_string![
        (x: 34.0, y: 12.0),
        (x: 78.0, y: 56.0),
        (x: 12.0, y: 90.0),
        (x: 56.0, y: 34.0),
    ]);
    assert_eq!(round_trip(&shape), shape);
}

#[test]
fn multi_line_string() {
    let shape = Shape::MultiLineString(MultiLineString(vec![
        line_string![(x: 12.0, y: 34.0), (x: 56.0, y: 78.0), (x: 90.0, y: 12.0)],
        line_string![
            (x: 23.0, y: 45.0),
            (x: 67.0, y: 89.0),
            (x: 12.0, y: 34.0),
            (x: 56.0, y: 78.0),
        ],
    ]));
    assert_eq!(round_trip(&shape), shape);
}

#[test]
fn polygon_with_hole() {
    // Exterior wound clockwise in screen space, interior the other way.
    let shape = Shape::Polygon(polygon!(
        exterior: [
            (x: 7.0, y: 7.0),
            (x: 4.0, y: 8.0),
            (x: 3.0, y: 4.0),
            (x: 5.0, y: 2.0),
            (x: 7.0, y: 3.0),
        ],
        interiors: [[
            (x: 4.0, y: 4.0),
            (x: 4.0, y: 6.0),
            (x: 5.0, y: 7.0),
            (x: 6.0, y: 4.0),
        ]],
    ));

    let decoded = round_trip(&shape);
    assert_eq!(decoded, shape);

    // Both rings come back explicitly closed.
    let Shape::Polygon(polygon) = decoded else {
        panic!("expected Polygon");
    };
    let exterior = &polygon.exterior().0;
    assert_eq!(exterior.first(), exterior.last());
    let interior = &polygon.interiors()[0].0;
    assert_eq!(interior.first(), interior.last());
}

#[test]
fn multi_polygon() {
    let with_hole = polygon!(
        exterior: [
            (x: 7.0, y: 7.0),
            (x: 4.0, y: 8.0),
            (x: 3.0, y: 4.0),
            (x: 5.0, y: 2.0),
            (x: 7.0, y: 3.0),
        ],
        interiors: [[
            (x: 4.0, y: 4.0),
            (x: 4.0, y: 6.0),
            (x: 5.0, y: 7.0),
            (x: 6.0, y: 4.0),
        ]],
    );
    let plain = polygon![(x: 7.0, y: 7.0), (x: 3.0, y: 4.0), (x: 5.0, y: 2.0)];

    let shape = Shape::MultiPolygon(geo_types::MultiPolygon(vec![with_hole, plain]));
    assert_eq!(round_trip(&shape), shape);
}

#[test]
fn ring_order_determines_grouping() {
    // Encode CW, CCW, CW rings: the decoder must yield two polygons, the
    // first with a hole.
    let shape = Shape::MultiPolygon(geo_types::MultiPolygon(vec![
        polygon!(
            exterior: [
                (x: 10.0, y: 10.0),
                (x: 20.0, y: 10.0),
                (x: 20.0, y: 20.0),
                (x: 10.0, y: 20.0),
            ],
            interiors: [[
                (x: 13.0, y: 13.0),
                (x: 13.0, y: 17.0),
                (x: 17.0, y: 17.0),
                (x: 17.0, y: 13.0),
            ]],
        ),
        polygon![(x: 30.0, y: 30.0), (x: 40.0, y: 30.0), (x: 40.0, y: 40.0)],
    ]));

    let decoded = round_trip(&shape);
    let Shape::MultiPolygon(polygons) = &decoded else {
        panic!("expected MultiPolygon, got {decoded:?}");
    };
    assert_eq!(polygons.0.len(), 2);
    assert_eq!(polygons.0[0].interiors().len(), 1);
    assert_eq!(polygons.0[1].interiors().len(), 0);
    assert_eq!(decoded, shape);
}

#[test]
fn zero_delta_runs_survive() {
    let shape = Shape::LineString(line_string![
        (x: 34.0, y: 12.0),
        (x: 34.0, y: 12.0),
        (x: 56.0, y: 34.0),
    ]);
    assert_eq!(round_trip(&shape), shape);
}
