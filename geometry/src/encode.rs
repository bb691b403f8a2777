//! Shape to command-stream encoding.

use geo_types::{Coord, LineString, MultiPoint, Point, Polygon};

use crate::command::{CommandId, CommandInteger};
use crate::cursor::Cursor;
use crate::error::{GeometryError, GeometryResult};
use crate::shape::Shape;

/// Encodes a typed shape into a command-word stream.
///
/// `project` maps geographic coordinates into tile-local integer space.
/// The cursor starts at the origin and persists across the linestrings and
/// rings of the shape, so emitted deltas chain exactly as the decoder
/// replays them. Raw shapes are emitted verbatim without projection.
///
/// # Errors
///
/// Structural validation runs before any output is produced:
/// [`GeometryError::EmptyShape`] for multi-part shapes with no parts,
/// [`GeometryError::ShortLine`] for linestrings with fewer than 2 points,
/// [`GeometryError::ShortRing`] for rings with fewer than 4 points
/// including the closure. [`GeometryError::OutOfRange`] and
/// [`GeometryError::CountOverflow`] propagate from emission.
pub fn encode<P>(shape: &Shape, project: P) -> GeometryResult<Vec<u32>>
where
    P: Fn(Coord<f64>) -> Coord<i32>,
{
    validate(shape)?;

    let mut encoder = Encoder {
        project,
        cursor: Cursor::origin(),
        words: Vec::new(),
    };

    match shape {
        Shape::Raw(raw) => return Ok(raw.words().to_vec()),
        Shape::Point(point) => encoder.point(point)?,
        Shape::MultiPoint(points) => encoder.multi_point(points)?,
        Shape::LineString(line) => encoder.segment(&line.0)?,
        Shape::MultiLineString(lines) => {
            for line in &lines.0 {
                encoder.segment(&line.0)?;
            }
        }
        Shape::Polygon(polygon) => encoder.polygon(polygon)?,
        Shape::MultiPolygon(polygons) => {
            for polygon in &polygons.0 {
                encoder.polygon(polygon)?;
            }
        }
    }

    Ok(encoder.words)
}

/// Checks structural minima before emission starts.
fn validate(shape: &Shape) -> GeometryResult<()> {
    match shape {
        Shape::Raw(_) | Shape::Point(_) => Ok(()),
        Shape::MultiPoint(points) => {
            if points.0.is_empty() {
                return Err(GeometryError::EmptyShape);
            }
            Ok(())
        }
        Shape::LineString(line) => validate_line(&line.0),
        Shape::MultiLineString(lines) => {
            if lines.0.is_empty() {
                return Err(GeometryError::EmptyShape);
            }
            lines.0.iter().try_for_each(|line| validate_line(&line.0))
        }
        Shape::Polygon(polygon) => validate_polygon(polygon),
        Shape::MultiPolygon(polygons) => {
            if polygons.0.is_empty() {
                return Err(GeometryError::EmptyShape);
            }
            polygons.0.iter().try_for_each(validate_polygon)
        }
    }
}

fn validate_line(points: &[Coord<f64>]) -> GeometryResult<()> {
    if points.len() < 2 {
        return Err(GeometryError::ShortLine {
            points: points.len(),
        });
    }
    Ok(())
}

fn validate_polygon(polygon: &Polygon<f64>) -> GeometryResult<()> {
    if polygon.exterior().0.is_empty() {
        return Err(GeometryError::EmptyShape);
    }
    validate_ring(polygon.exterior())?;
    polygon.interiors().iter().try_for_each(validate_ring)
}

fn validate_ring(ring: &LineString<f64>) -> GeometryResult<()> {
    if ring.0.len() < 4 {
        return Err(GeometryError::ShortRing {
            points: ring.0.len(),
        });
    }
    Ok(())
}

struct Encoder<P> {
    project: P,
    cursor: Cursor,
    words: Vec<u32>,
}

impl<P> Encoder<P>
where
    P: Fn(Coord<f64>) -> Coord<i32>,
{
    fn point(&mut self, point: &Point<f64>) -> GeometryResult<()> {
        self.command(CommandId::MoveTo, 1)?;
        self.pair(point.0)
    }

    fn multi_point(&mut self, points: &MultiPoint<f64>) -> GeometryResult<()> {
        self.command(CommandId::MoveTo, points.0.len())?;
        for point in &points.0 {
            self.pair(point.0)?;
        }
        Ok(())
    }

    /// `MoveTo(1)` onto the first point, `LineTo(n-1)` through the rest.
    fn segment(&mut self, points: &[Coord<f64>]) -> GeometryResult<()> {
        self.command(CommandId::MoveTo, 1)?;
        self.pair(points[0])?;
        self.command(CommandId::LineTo, points.len() - 1)?;
        for point in &points[1..] {
            self.pair(*point)?;
        }
        Ok(())
    }

    fn polygon(&mut self, polygon: &Polygon<f64>) -> GeometryResult<()> {
        self.ring(polygon.exterior())?;
        for interior in polygon.interiors() {
            self.ring(interior)?;
        }
        Ok(())
    }

    /// A ring is its open form as a segment plus one `ClosePath`.
    ///
    /// The trailing explicit closing point is dropped on the wire; the
    /// implicit closing edge returns the cursor to the ring's start before
    /// the next ring's `MoveTo`.
    fn ring(&mut self, ring: &LineString<f64>) -> GeometryResult<()> {
        let open = &ring.0[..ring.0.len() - 1];
        let start = (self.project)(open[0]);

        self.segment(open)?;
        self.command(CommandId::ClosePath, 1)?;
        self.cursor.jump(start);
        Ok(())
    }

    fn command(&mut self, id: CommandId, count: usize) -> GeometryResult<()> {
        let count = u32::try_from(count).map_err(|_| GeometryError::CountOverflow {
            count: count as u64,
        })?;
        self.words.push(CommandInteger::new(id, count)?.raw());
        Ok(())
    }

    fn pair(&mut self, coord: Coord<f64>) -> GeometryResult<()> {
        let target = (self.project)(coord);
        let (dx, dy) = self.cursor.delta_to(target)?;
        self.words.push(dx.raw());
        self.words.push(dy.raw());
        Ok(())
    }
}
