//! Packed command words.

use std::fmt;

use crate::error::{GeometryError, GeometryResult};

/// Maximum count encodable in a command word (29 bits).
pub const MAX_COMMAND_COUNT: u32 = (1 << 29) - 1;

/// The command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CommandId {
    /// Creates a point, or starts a new linestring or ring.
    MoveTo = 1,
    /// Extends the current linestring or ring.
    LineTo = 2,
    /// Closes the current ring.
    ClosePath = 7,
}

impl CommandId {
    const fn from_raw(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::MoveTo),
            2 => Some(Self::LineTo),
            7 => Some(Self::ClosePath),
            _ => None,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MoveTo => "MoveTo",
            Self::LineTo => "LineTo",
            Self::ClosePath => "ClosePath",
        };
        write!(f, "{name}")
    }
}

/// A command id packed with the number of times to execute it.
///
/// The id occupies the low 3 bits, the count the remaining 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandInteger(u32);

impl CommandInteger {
    /// Packs an id and count into a command word.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CountOverflow`] when `count` exceeds
    /// [`MAX_COMMAND_COUNT`].
    pub fn new(id: CommandId, count: u32) -> GeometryResult<Self> {
        if count > MAX_COMMAND_COUNT {
            return Err(GeometryError::CountOverflow {
                count: u64::from(count),
            });
        }
        Ok(Self((id as u32 & 0x7) | (count << 3)))
    }

    /// Unpacks a command word, validating the id.
    ///
    /// The count cannot overflow on decode; only the id is checked.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidCommand`] for unknown ids.
    pub fn decode(word: u32) -> GeometryResult<Self> {
        match CommandId::from_raw(word & 0x7) {
            Some(_) => Ok(Self(word)),
            None => Err(GeometryError::InvalidCommand { id: word & 0x7 }),
        }
    }

    /// Returns the packed word.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the command id.
    #[must_use]
    pub fn id(self) -> CommandId {
        // Constructors validate the id bits.
        match self.0 & 0x7 {
            1 => CommandId::MoveTo,
            2 => CommandId::LineTo,
            _ => CommandId::ClosePath,
        }
    }

    /// Returns the execution count.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0 >> 3
    }
}
