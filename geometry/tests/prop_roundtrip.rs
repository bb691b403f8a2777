use geo_types::{coord, Coord, LineString, MultiLineString, MultiPoint, Point, Polygon};
use geometry::{
    decode, encode, CommandId, CommandInteger, ParameterInteger, Shape, ShapeKind,
    MAX_COMMAND_COUNT, MAX_PARAMETER_VALUE, MIN_PARAMETER_VALUE,
};
use proptest::prelude::*;

/// Identity projection over the integer lattice.
fn project(c: Coord<f64>) -> Coord<i32> {
    coord! { x: c.x as i32, y: c.y as i32 }
}

fn unproject(c: Coord<i32>) -> Coord<f64> {
    coord! { x: f64::from(c.x), y: f64::from(c.y) }
}

/// Lattice coordinates small enough that chained deltas stay in range.
fn lattice_coord() -> impl Strategy<Value = Coord<f64>> {
    (-10_000i32..=10_000, -10_000i32..=10_000)
        .prop_map(|(x, y)| coord! { x: f64::from(x), y: f64::from(y) })
}

fn command_id() -> impl Strategy<Value = CommandId> {
    prop_oneof![
        Just(CommandId::MoveTo),
        Just(CommandId::LineTo),
        Just(CommandId::ClosePath),
    ]
}

/// An axis-aligned rectangle ring wound clockwise in screen space, closed.
fn clockwise_rect(x: i32, y: i32, w: i32, h: i32) -> LineString<f64> {
    let (x, y, w, h) = (f64::from(x), f64::from(y), f64::from(w), f64::from(h));
    LineString::new(vec![
        coord! { x: x, y: y },
        coord! { x: x + w, y: y },
        coord! { x: x + w, y: y + h },
        coord! { x: x, y: y + h },
        coord! { x: x, y: y },
    ])
}

/// The same rectangle wound the other way, for holes.
fn counter_clockwise_rect(x: i32, y: i32, w: i32, h: i32) -> LineString<f64> {
    let mut ring = clockwise_rect(x, y, w, h);
    ring.0.reverse();
    ring
}

/// A rectangle with an optional hole strictly inside it.
fn polygon_strategy() -> impl Strategy<Value = Polygon<f64>> {
    (
        -1000i32..=1000,
        -1000i32..=1000,
        8i32..=100,
        8i32..=100,
        any::<bool>(),
    )
        .prop_map(|(x, y, w, h, with_hole)| {
            let interiors = if with_hole {
                vec![counter_clockwise_rect(x + 2, y + 2, w - 4, h - 4)]
            } else {
                Vec::new()
            };
            Polygon::new(clockwise_rect(x, y, w, h), interiors)
        })
}

proptest! {
    #[test]
    fn prop_zigzag_bijective(value in MIN_PARAMETER_VALUE..=MAX_PARAMETER_VALUE) {
        let param = ParameterInteger::encode(value).unwrap();
        prop_assert_eq!(i64::from(param.value()), value);

        let reencoded = ParameterInteger::encode(i64::from(param.value())).unwrap();
        prop_assert_eq!(reencoded.raw(), param.raw());
    }

    #[test]
    fn prop_command_word_round_trip(id in command_id(), count in 0u32..=MAX_COMMAND_COUNT) {
        let word = CommandInteger::new(id, count).unwrap().raw();
        let cmd = CommandInteger::decode(word).unwrap();
        prop_assert_eq!(cmd.id(), id);
        prop_assert_eq!(cmd.count(), count);
    }

    #[test]
    fn prop_point_round_trip(c in lattice_coord()) {
        let shape = Shape::Point(Point(c));
        let words = encode(&shape, project).unwrap();
        prop_assert_eq!(decode(&words, ShapeKind::Point, unproject).unwrap(), shape);
    }

    #[test]
    fn prop_multi_point_round_trip(coords in prop::collection::vec(lattice_coord(), 1..16)) {
        let shape = Shape::MultiPoint(MultiPoint(coords.into_iter().map(Point).collect()));
        let words = encode(&shape, project).unwrap();
        prop_assert_eq!(decode(&words, ShapeKind::Point, unproject).unwrap(), shape);
    }

    #[test]
    fn prop_line_string_round_trip(coords in prop::collection::vec(lattice_coord(), 2..32)) {
        let shape = Shape::LineString(LineString::new(coords));
        let words = encode(&shape, project).unwrap();
        prop_assert_eq!(decode(&words, ShapeKind::LineString, unproject).unwrap(), shape);
    }

    #[test]
    fn prop_multi_line_string_round_trip(
        lines in prop::collection::vec(prop::collection::vec(lattice_coord(), 2..8), 2..6),
    ) {
        let shape = Shape::MultiLineString(MultiLineString(
            lines.into_iter().map(LineString::new).collect(),
        ));
        let words = encode(&shape, project).unwrap();
        prop_assert_eq!(decode(&words, ShapeKind::LineString, unproject).unwrap(), shape);
    }

    #[test]
    fn prop_polygon_round_trip(polygon in polygon_strategy()) {
        let shape = Shape::Polygon(polygon);
        let words = encode(&shape, project).unwrap();
        prop_assert_eq!(decode(&words, ShapeKind::Polygon, unproject).unwrap(), shape);
    }

    #[test]
    fn prop_multi_polygon_round_trip(
        polygons in prop::collection::vec(polygon_strategy(), 2..5),
    ) {
        let shape = Shape::MultiPolygon(geo_types::MultiPolygon(polygons));
        let words = encode(&shape, project).unwrap();
        prop_assert_eq!(decode(&words, ShapeKind::Polygon, unproject).unwrap(), shape);
    }

    #[test]
    fn prop_decode_never_panics(words in prop::collection::vec(any::<u32>(), 0..64)) {
        for kind in [
            ShapeKind::Unknown,
            ShapeKind::Point,
            ShapeKind::LineString,
            ShapeKind::Polygon,
        ] {
            let _ = decode(&words, kind, unproject);
        }
    }
}
