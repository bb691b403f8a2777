//! The running cursor threaded through encode and decode.

use geo_types::Coord;

use crate::error::GeometryResult;
use crate::parameter::ParameterInteger;

/// Cursor position in tile-local integer space.
///
/// Initialised at the origin for each feature. Every `MoveTo` and `LineTo`
/// parameter pair is a signed delta from the current position, and the
/// cursor persists across the linestrings and rings of one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    x: i32,
    y: i32,
}

impl Cursor {
    /// Creates a cursor at the origin.
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns the current position.
    #[must_use]
    pub const fn position(self) -> Coord<i32> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// Encodes the delta from the cursor to `target` and advances onto it.
    ///
    /// The delta is computed in 64-bit so that distant cursor/target pairs
    /// surface as [`GeometryError::OutOfRange`] rather than wrapping.
    ///
    /// [`GeometryError::OutOfRange`]: crate::GeometryError::OutOfRange
    pub fn delta_to(
        &mut self,
        target: Coord<i32>,
    ) -> GeometryResult<(ParameterInteger, ParameterInteger)> {
        let dx = ParameterInteger::encode(i64::from(target.x) - i64::from(self.x))?;
        let dy = ParameterInteger::encode(i64::from(target.y) - i64::from(self.y))?;
        self.x = target.x;
        self.y = target.y;
        Ok((dx, dy))
    }

    /// Applies a decoded delta pair and returns the new position.
    ///
    /// Wraps on overflow: adversarial streams can walk the cursor past the
    /// 32-bit range, and decoding must stay total.
    pub fn apply(&mut self, dx: i32, dy: i32) -> Coord<i32> {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
        self.position()
    }

    /// Places the cursor on a known position.
    ///
    /// Used after `ClosePath`, whose implicit closing edge ends on the
    /// ring's starting point.
    pub fn jump(&mut self, position: Coord<i32>) {
        self.x = position.x;
        self.y = position.y;
    }
}
