//! Error types for geometry codec operations.

use std::fmt;

use crate::command::CommandId;

/// Result type for geometry codec operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while encoding or decoding a command stream.
///
/// Decode-side variants carry the word offset at which the stream went
/// wrong, where one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Parameter value outside the signed 32-bit coordinate range.
    OutOfRange {
        /// The rejected coordinate delta.
        value: i64,
    },

    /// Command count exceeds the 29-bit maximum.
    CountOverflow {
        /// The rejected count.
        count: u64,
    },

    /// Unknown command id in the stream.
    InvalidCommand {
        /// The raw id bits.
        id: u32,
    },

    /// Expected one command, observed another.
    UnexpectedCommand {
        expected: CommandId,
        found: CommandId,
        /// Word offset of the observed command.
        offset: usize,
    },

    /// A command carried a count its position in the stream forbids.
    UnexpectedCount {
        command: CommandId,
        count: u32,
        /// Word offset of the command.
        offset: usize,
    },

    /// The stream ended mid-segment.
    TruncatedStream {
        /// Number of words the segment needed.
        needed: usize,
        /// Number of words available.
        available: usize,
    },

    /// A coordinate run ended on half a pair.
    BadParameterPair {
        /// Word offset of the unpaired parameter.
        offset: usize,
    },

    /// Words remain after a complete point geometry.
    TrailingData {
        /// Word offset of the first excess word.
        offset: usize,
        /// Number of excess words.
        remaining: usize,
    },

    /// A linestring with fewer than 2 points.
    ShortLine {
        /// Number of points supplied.
        points: usize,
    },

    /// A polygon ring with fewer than 4 points including the closure.
    ShortRing {
        /// Number of points supplied.
        points: usize,
    },

    /// A multi-part shape with no parts, or a polygon with no rings.
    EmptyShape,

    /// An interior ring with no preceding exterior ring.
    MissingExteriorRing {
        /// Word offset of the offending ring.
        offset: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "parameter value {value} outside the signed 32-bit range")
            }
            Self::CountOverflow { count } => {
                write!(f, "command count {count} exceeds the 29-bit maximum")
            }
            Self::InvalidCommand { id } => {
                write!(f, "invalid command id: {id}")
            }
            Self::UnexpectedCommand {
                expected,
                found,
                offset,
            } => {
                write!(
                    f,
                    "expected {expected} command, found {found} at word {offset}"
                )
            }
            Self::UnexpectedCount {
                command,
                count,
                offset,
            } => {
                write!(
                    f,
                    "{command} command with unexpected count {count} at word {offset}"
                )
            }
            Self::TruncatedStream { needed, available } => {
                write!(
                    f,
                    "truncated stream: need {needed} words, have {available}"
                )
            }
            Self::BadParameterPair { offset } => {
                write!(f, "unpaired coordinate parameter at word {offset}")
            }
            Self::TrailingData { offset, remaining } => {
                write!(
                    f,
                    "{remaining} trailing words after point geometry at word {offset}"
                )
            }
            Self::ShortLine { points } => {
                write!(f, "linestring must have at least 2 points, got {points}")
            }
            Self::ShortRing { points } => {
                write!(
                    f,
                    "polygon ring must have at least 4 points including closure, got {points}"
                )
            }
            Self::EmptyShape => {
                write!(f, "shape has no parts to encode")
            }
            Self::MissingExteriorRing { offset } => {
                write!(f, "interior ring without exterior ring at word {offset}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
