//! Zig-zag encoded coordinate parameters.

use crate::error::{GeometryError, GeometryResult};

/// Maximum coordinate delta representable by a parameter integer.
pub const MAX_PARAMETER_VALUE: i64 = i32::MAX as i64;

/// Minimum coordinate delta representable by a parameter integer.
///
/// The range is symmetric: `i32::MIN` itself is not encodable.
pub const MIN_PARAMETER_VALUE: i64 = -(i32::MAX as i64);

/// A zig-zag encoded coordinate delta carried as an argument to `MoveTo`
/// and `LineTo` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterInteger(u32);

impl ParameterInteger {
    /// Zig-zag encodes a signed coordinate delta.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `value` falls outside
    /// `MIN_PARAMETER_VALUE..=MAX_PARAMETER_VALUE`.
    pub fn encode(value: i64) -> GeometryResult<Self> {
        if !(MIN_PARAMETER_VALUE..=MAX_PARAMETER_VALUE).contains(&value) {
            return Err(GeometryError::OutOfRange { value });
        }
        Ok(Self(zigzag(value as i32)))
    }

    /// Wraps an encoded word without validation; decoding is total.
    #[must_use]
    pub const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    /// Returns the encoded word.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Decodes the signed coordinate delta.
    #[must_use]
    pub const fn value(self) -> i32 {
        unzigzag(self.0)
    }
}

const fn zigzag(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

const fn unzigzag(w: u32) -> i32 {
    ((w >> 1) as i32) ^ -((w & 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_words() {
        // Small values interleave around zero.
        let cases = [(0i64, 0u32), (-1, 1), (1, 2), (-2, 3), (2, 4), (24, 48)];
        for (value, word) in cases {
            let param = ParameterInteger::encode(value).unwrap();
            assert_eq!(param.raw(), word, "zigzag of {value}");
        }
    }

    #[test]
    fn round_trip_samples() {
        for value in [0i64, 1, -1, 24, -66, 4095, -4096, MAX_PARAMETER_VALUE, MIN_PARAMETER_VALUE] {
            let param = ParameterInteger::encode(value).unwrap();
            assert_eq!(i64::from(param.value()), value, "round trip of {value}");
        }
    }

    #[test]
    fn encode_rejects_out_of_range() {
        for value in [
            MAX_PARAMETER_VALUE + 1,
            MIN_PARAMETER_VALUE - 1,
            i64::from(i32::MIN),
            i64::MAX,
            i64::MIN,
        ] {
            let err = ParameterInteger::encode(value).unwrap_err();
            assert!(
                matches!(err, GeometryError::OutOfRange { value: v } if v == value),
                "should reject {value}"
            );
        }
    }

    #[test]
    fn decode_is_total() {
        // Every word decodes, including ones encode never produces.
        assert_eq!(ParameterInteger::from_raw(u32::MAX).value(), i32::MIN);
        assert_eq!(ParameterInteger::from_raw(u32::MAX - 1).value(), i32::MAX);
    }

    #[test]
    fn extreme_round_trips() {
        let max = ParameterInteger::encode(MAX_PARAMETER_VALUE).unwrap();
        assert_eq!(max.raw(), u32::MAX - 1);

        let min = ParameterInteger::encode(MIN_PARAMETER_VALUE).unwrap();
        assert_eq!(min.raw(), u32::MAX - 2);
    }
}
