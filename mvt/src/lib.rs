//! Mapbox vector tile (MVT) version 2 encoding and decoding.
//!
//! A tile carries named layers of features: point, line, and polygon
//! shapes with typed key/value attributes. This crate assembles and
//! disassembles whole tiles, driving the geometry command-stream codec
//! and the per-layer attribute intern pools over the protobuf envelope.
//!
//! # Design Principles
//!
//! - **Pure calls** - One encode or decode is a deterministic function of
//!   its inputs; no shared state, tiles may be processed in parallel.
//! - **Caller-owned projection** - Coordinates cross the tile boundary
//!   through caller-supplied `project`/`unproject` callbacks; no coordinate
//!   reference system is assumed.
//! - **All-or-nothing** - No partial result ever accompanies an error, and
//!   every error names the layer (and feature, where applicable) it hit.
//!
//! # Example
//!
//! ```
//! use geo_types::{coord, point, Coord};
//! use mvt::{Feature, Layer, Layers, Shape};
//!
//! let project = |c: Coord<f64>| coord! { x: c.x as i32, y: c.y as i32 };
//! let unproject = |c: Coord<i32>| coord! { x: f64::from(c.x), y: f64::from(c.y) };
//!
//! let mut layers = Layers::new();
//! let feature = Feature::new(Shape::Point(point! { x: 34.0, y: 12.0 }))
//!     .with_id(67)
//!     .with_property("kind", "peak");
//! layers.insert("poi".to_string(), Layer::with_features(4096, vec![feature]));
//!
//! let bytes = mvt::encode(&layers, project).unwrap();
//! let decoded = mvt::decode(&bytes, unproject).unwrap();
//! assert_eq!(decoded, layers);
//! ```

mod decode;
mod encode;
mod error;
mod options;
mod tags;
mod tile;
mod value;

pub use decode::decode;
pub use encode::{encode, encode_with_options};
pub use error::{MvtError, MvtResult, TagKind};
pub use options::EncodeOptions;
pub use tile::{Feature, Layer, Layers, Property, DEFAULT_EXTENT};
pub use value::Value;

pub use geometry::{GeometryError, RawShape, Shape, ShapeKind};
