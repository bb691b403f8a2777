#![no_main]

use geo_types::{coord, Coord};
use geometry::ShapeKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte selects the declared kind; the rest become command words.
    let kind = match data[0] % 4 {
        0 => ShapeKind::Unknown,
        1 => ShapeKind::Point,
        2 => ShapeKind::LineString,
        _ => ShapeKind::Polygon,
    };

    let words: Vec<u32> = data[1..]
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
        .collect();

    let unproject = |c: Coord<i32>| coord! { x: f64::from(c.x), y: f64::from(c.y) };
    let _ = geometry::decode(&words, kind, unproject);
});
