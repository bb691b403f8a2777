#![no_main]

use geo_types::{coord, Coord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let unproject = |c: Coord<i32>| coord! { x: f64::from(c.x), y: f64::from(c.y) };
    let _ = mvt::decode(data, unproject);
});
