//! Command-stream to shape decoding.

use geo_types::{Coord, LineString, MultiLineString, MultiPolygon, Point, Polygon};

use crate::command::{CommandId, CommandInteger};
use crate::cursor::Cursor;
use crate::error::{GeometryError, GeometryResult};
use crate::parameter::ParameterInteger;
use crate::shape::{RawShape, Shape, ShapeKind};

/// Decodes a command-word stream into the shape its declared kind names.
///
/// `unproject` maps tile-local integer coordinates back into geographic
/// space. Given the same stream and unprojection, the output is
/// bit-identical. Streams declared [`ShapeKind::Unknown`] are wrapped as
/// [`RawShape`] without inspection.
///
/// # Errors
///
/// Returns a [`GeometryError`] when the stream does not satisfy the
/// grammar of the declared kind; decode-side variants carry the word
/// offset of the failure where one exists.
pub fn decode<U>(words: &[u32], kind: ShapeKind, unproject: U) -> GeometryResult<Shape>
where
    U: Fn(Coord<i32>) -> Coord<f64>,
{
    match kind {
        ShapeKind::Unknown => Ok(Shape::Raw(RawShape::new(words.to_vec()))),
        ShapeKind::Point => Decoder::new(words, unproject).points(),
        ShapeKind::LineString => Decoder::new(words, unproject).line_strings(),
        ShapeKind::Polygon => Decoder::new(words, unproject).polygons(),
    }
}

struct Decoder<'a, U> {
    words: &'a [u32],
    pos: usize,
    cursor: Cursor,
    unproject: U,
}

impl<'a, U> Decoder<'a, U>
where
    U: Fn(Coord<i32>) -> Coord<f64>,
{
    fn new(words: &'a [u32], unproject: U) -> Self {
        Self {
            words,
            pos: 0,
            cursor: Cursor::origin(),
            unproject,
        }
    }

    /// One `MoveTo(k)` burst consuming the whole stream.
    fn points(mut self) -> GeometryResult<Shape> {
        let offset = self.pos;
        let cmd = self.expect_command(CommandId::MoveTo)?;
        let count = cmd.count();
        if count == 0 {
            return Err(GeometryError::UnexpectedCount {
                command: CommandId::MoveTo,
                count,
                offset,
            });
        }

        let count = count as usize;
        self.require_pairs(count)?;
        let mut coords = Vec::with_capacity(count);
        for _ in 0..count {
            let projected = self.projected_pair()?;
            coords.push((self.unproject)(projected));
        }

        if !self.is_empty() {
            return Err(GeometryError::TrailingData {
                offset: self.pos,
                remaining: self.words.len() - self.pos,
            });
        }

        if coords.len() == 1 {
            Ok(Shape::Point(Point(coords[0])))
        } else {
            Ok(Shape::MultiPoint(coords.into_iter().map(Point).collect()))
        }
    }

    /// One or more linestring segments consuming the whole stream.
    fn line_strings(mut self) -> GeometryResult<Shape> {
        self.require_nonempty()?;

        let mut lines = Vec::new();
        while !self.is_empty() {
            let segment = self.segment()?;
            lines.push(self.unproject_line(&segment));
        }

        if lines.len() == 1 {
            // The single-segment case loses the multi wrapper.
            Ok(Shape::LineString(lines.remove(0)))
        } else {
            Ok(Shape::MultiLineString(MultiLineString(lines)))
        }
    }

    /// One or more rings consuming the whole stream, grouped into polygons
    /// by winding order.
    fn polygons(mut self) -> GeometryResult<Shape> {
        self.require_nonempty()?;

        let mut polygons: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();
        while !self.is_empty() {
            let offset = self.pos;
            let ring = self.ring()?;
            let geographic = self.unproject_line(&ring);

            if signed_area2(&ring) >= 0 {
                // Clockwise in screen space: a new polygon's exterior.
                polygons.push((geographic, Vec::new()));
            } else {
                match polygons.last_mut() {
                    Some((_, interiors)) => interiors.push(geographic),
                    None => return Err(GeometryError::MissingExteriorRing { offset }),
                }
            }
        }

        let mut built: Vec<Polygon<f64>> = polygons
            .into_iter()
            .map(|(exterior, interiors)| Polygon::new(exterior, interiors))
            .collect();

        if built.len() == 1 {
            Ok(Shape::Polygon(built.remove(0)))
        } else {
            Ok(Shape::MultiPolygon(MultiPolygon(built)))
        }
    }

    /// `MoveTo(1)` plus one pair, then `LineTo(m >= 1)` plus `m` pairs.
    ///
    /// Returns the projected vertices; the cursor is left on the last one.
    fn segment(&mut self) -> GeometryResult<Vec<Coord<i32>>> {
        let offset = self.pos;
        let cmd = self.expect_command(CommandId::MoveTo)?;
        if cmd.count() != 1 {
            return Err(GeometryError::UnexpectedCount {
                command: CommandId::MoveTo,
                count: cmd.count(),
                offset,
            });
        }
        let start = self.projected_pair()?;

        let offset = self.pos;
        let cmd = self.expect_command(CommandId::LineTo)?;
        if cmd.count() == 0 {
            return Err(GeometryError::UnexpectedCount {
                command: CommandId::LineTo,
                count: 0,
                offset,
            });
        }

        let count = cmd.count() as usize;
        self.require_pairs(count)?;
        let mut vertices = Vec::with_capacity(count + 1);
        vertices.push(start);
        for _ in 0..count {
            vertices.push(self.projected_pair()?);
        }
        Ok(vertices)
    }

    /// A segment followed by `ClosePath(1)`, explicitly closed on return.
    fn ring(&mut self) -> GeometryResult<Vec<Coord<i32>>> {
        let mut ring = self.segment()?;

        let offset = self.pos;
        let cmd = self.expect_command(CommandId::ClosePath)?;
        if cmd.count() != 1 {
            return Err(GeometryError::UnexpectedCount {
                command: CommandId::ClosePath,
                count: cmd.count(),
                offset,
            });
        }

        // Close in the GeoJSON style, and land the cursor where the
        // implicit closing edge ends.
        ring.push(ring[0]);
        self.cursor.jump(ring[0]);
        Ok(ring)
    }

    fn unproject_line(&self, vertices: &[Coord<i32>]) -> LineString<f64> {
        LineString::new(vertices.iter().map(|&c| (self.unproject)(c)).collect())
    }

    fn next_command(&mut self) -> GeometryResult<CommandInteger> {
        if self.is_empty() {
            return Err(GeometryError::TruncatedStream {
                needed: self.pos + 1,
                available: self.words.len(),
            });
        }
        let cmd = CommandInteger::decode(self.words[self.pos])?;
        self.pos += 1;
        Ok(cmd)
    }

    fn expect_command(&mut self, expected: CommandId) -> GeometryResult<CommandInteger> {
        let offset = self.pos;
        let cmd = self.next_command()?;
        if cmd.id() != expected {
            return Err(GeometryError::UnexpectedCommand {
                expected,
                found: cmd.id(),
                offset,
            });
        }
        Ok(cmd)
    }

    /// Reads one delta pair and advances the cursor onto it.
    fn projected_pair(&mut self) -> GeometryResult<Coord<i32>> {
        // require_pairs has run for counted runs; this guards direct use.
        match self.words.len() - self.pos {
            0 => {
                return Err(GeometryError::TruncatedStream {
                    needed: self.pos + 2,
                    available: self.words.len(),
                })
            }
            1 => return Err(GeometryError::BadParameterPair { offset: self.pos }),
            _ => {}
        }

        let dx = ParameterInteger::from_raw(self.words[self.pos]).value();
        let dy = ParameterInteger::from_raw(self.words[self.pos + 1]).value();
        self.pos += 2;
        Ok(self.cursor.apply(dx, dy))
    }

    /// Verifies `count` whole pairs remain before anything is allocated.
    fn require_pairs(&self, count: usize) -> GeometryResult<()> {
        let available = self.words.len() - self.pos;
        let needed = count * 2;
        if available >= needed {
            return Ok(());
        }
        if available % 2 == 1 {
            Err(GeometryError::BadParameterPair {
                offset: self.pos + available - 1,
            })
        } else {
            Err(GeometryError::TruncatedStream {
                needed: self.pos + needed,
                available: self.words.len(),
            })
        }
    }

    fn require_nonempty(&self) -> GeometryResult<()> {
        if self.is_empty() {
            return Err(GeometryError::TruncatedStream {
                needed: 1,
                available: 0,
            });
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.words.len()
    }
}

/// Twice the signed shoelace area over projected ring vertices.
///
/// Positive for rings wound clockwise in screen space (y axis pointing
/// down), which is the tile format's exterior-ring convention. The ring
/// arrives explicitly closed, so consecutive windows cover every edge.
fn signed_area2(ring: &[Coord<i32>]) -> i128 {
    ring.windows(2)
        .map(|edge| {
            i128::from(edge[0].x) * i128::from(edge[1].y)
                - i128::from(edge[1].x) * i128::from(edge[0].y)
        })
        .sum()
}
