//! Geometry command-stream codec for vector tiles.
//!
//! This crate encodes typed shapes into the packed 32-bit command words of
//! the tile wire format and decodes them back, reconstructing polygon ring
//! hierarchies from winding order.
//!
//! # Design Principles
//!
//! - **Bit-exact reversibility** - Encoding a shape and decoding the stream
//!   with the inverse projection yields the same shape over the integer
//!   lattice.
//! - **Bounded operations** - Command counts are validated against the
//!   remaining stream before any allocation; malformed input returns
//!   structured errors, never panics.
//! - **No CRS knowledge** - Projection callbacks are supplied by the caller;
//!   this crate never assumes a coordinate reference system.
//!
//! # Example
//!
//! ```
//! use geo_types::{coord, Coord, Point};
//! use geometry::{Shape, ShapeKind};
//!
//! let project = |c: Coord<f64>| coord! { x: c.x as i32 - 10, y: c.y as i32 - 10 };
//! let unproject = |c: Coord<i32>| coord! { x: f64::from(c.x) + 10.0, y: f64::from(c.y) + 10.0 };
//!
//! let shape = Shape::Point(Point::new(34.0, 12.0));
//! let words = geometry::encode(&shape, project).unwrap();
//! assert_eq!(words, vec![9, 48, 4]);
//!
//! let decoded = geometry::decode(&words, ShapeKind::Point, unproject).unwrap();
//! assert_eq!(decoded, shape);
//! ```

mod command;
mod cursor;
mod decode;
mod encode;
mod error;
mod parameter;
mod shape;

pub use command::{CommandId, CommandInteger, MAX_COMMAND_COUNT};
pub use cursor::Cursor;
pub use decode::decode;
pub use encode::encode;
pub use error::{GeometryError, GeometryResult};
pub use parameter::{ParameterInteger, MAX_PARAMETER_VALUE, MIN_PARAMETER_VALUE};
pub use shape::{RawShape, Shape, ShapeKind};
