//! Typed shapes and the declared geometry kind.

use std::fmt;

use geo_types::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// The geometry kind declared alongside an encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// The stream is opaque and kept verbatim.
    #[default]
    Unknown,
    /// One `MoveTo` burst: a point or multipoint.
    Point,
    /// One or more linestring segments.
    LineString,
    /// One or more closed rings classified by winding.
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Point => "point",
            Self::LineString => "linestring",
            Self::Polygon => "polygon",
        };
        write!(f, "{name}")
    }
}

/// An opaque command-word payload kept when the declared kind is unknown.
///
/// Raw shapes round-trip word-identically; no projection is applied on
/// either side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawShape(Vec<u32>);

impl RawShape {
    /// Wraps a command-word payload.
    #[must_use]
    pub const fn new(words: Vec<u32>) -> Self {
        Self(words)
    }

    /// Returns the payload words.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.0
    }

    /// Consumes the shape, returning the payload.
    #[must_use]
    pub fn into_words(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for RawShape {
    fn from(words: Vec<u32>) -> Self {
        Self(words)
    }
}

/// A feature geometry.
///
/// Geographic coordinates ride in `geo_types` primitives with `x` as
/// longitude and `y` as latitude. Polygon rings are explicitly closed
/// (first point equals last point); the first ring is the exterior and the
/// rest are interior.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Raw(RawShape),
    Point(Point<f64>),
    MultiPoint(MultiPoint<f64>),
    LineString(LineString<f64>),
    MultiLineString(MultiLineString<f64>),
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Shape {
    /// The kind declared for this shape in the tile envelope.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Raw(_) => ShapeKind::Unknown,
            Self::Point(_) | Self::MultiPoint(_) => ShapeKind::Point,
            Self::LineString(_) | Self::MultiLineString(_) => ShapeKind::LineString,
            Self::Polygon(_) | Self::MultiPolygon(_) => ShapeKind::Polygon,
        }
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{line_string, point, polygon};

    use super::*;

    #[test]
    fn kind_per_variant() {
        assert_eq!(Shape::Raw(RawShape::default()).kind(), ShapeKind::Unknown);
        assert_eq!(Shape::Point(point! { x: 1.0, y: 2.0 }).kind(), ShapeKind::Point);
        assert_eq!(
            Shape::MultiPoint(MultiPoint(vec![point! { x: 1.0, y: 2.0 }])).kind(),
            ShapeKind::Point
        );
        assert_eq!(
            Shape::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]).kind(),
            ShapeKind::LineString
        );
        assert_eq!(
            Shape::Polygon(polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0)]).kind(),
            ShapeKind::Polygon
        );
    }

    #[test]
    fn raw_shape_accessors() {
        let raw = RawShape::new(vec![9, 48, 4]);
        assert_eq!(raw.words(), &[9, 48, 4]);
        assert_eq!(raw.clone().into_words(), vec![9, 48, 4]);
        assert_eq!(RawShape::from(vec![9, 48, 4]), raw);
    }

    #[test]
    fn shape_kind_display() {
        assert_eq!(ShapeKind::Unknown.to_string(), "unknown");
        assert_eq!(ShapeKind::Polygon.to_string(), "polygon");
    }
}
