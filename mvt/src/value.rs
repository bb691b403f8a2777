//! Typed attribute values.

use std::hash::{Hash, Hasher};
use std::mem;

/// A typed attribute value.
///
/// Exactly one variant travels in each envelope value record. Floats
/// compare and hash bitwise so that interning is byte-exact: NaN payloads
/// dedup and round-trip unchanged, and `0.0` and `-0.0` are distinct
/// values.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Float(f32),
    Double(f64),
    Int(i64),
    Uint(u64),
    Bool(bool),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::String(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Double(v) => v.to_bits().hash(state),
            Self::Int(v) => v.hash(state),
            Self::Uint(v) => v.hash(state),
            Self::Bool(v) => v.hash(state),
        }
    }
}

/// Whether a malformed value record carried no variant or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VariantError {
    None,
    Multiple,
}

impl Value {
    /// Builds the envelope record with this value's single variant set.
    ///
    /// The `sint_value` field is never produced; signed integers always
    /// travel as `int_value`.
    pub(crate) fn to_envelope(&self) -> envelope::Value {
        let mut record = envelope::Value::default();
        match self {
            Self::String(v) => record.string_value = Some(v.clone()),
            Self::Float(v) => record.float_value = Some(*v),
            Self::Double(v) => record.double_value = Some(*v),
            Self::Int(v) => record.int_value = Some(*v),
            Self::Uint(v) => record.uint_value = Some(*v),
            Self::Bool(v) => record.bool_value = Some(*v),
        }
        record
    }

    /// Reads the single set variant of an envelope record.
    ///
    /// `sint_value` is accepted and folded into [`Value::Int`].
    pub(crate) fn from_envelope(record: &envelope::Value) -> Result<Self, VariantError> {
        let mut value = None;
        let mut set = 0usize;

        if let Some(v) = &record.string_value {
            set += 1;
            value = Some(Self::String(v.clone()));
        }
        if let Some(v) = record.float_value {
            set += 1;
            value = Some(Self::Float(v));
        }
        if let Some(v) = record.double_value {
            set += 1;
            value = Some(Self::Double(v));
        }
        if let Some(v) = record.int_value {
            set += 1;
            value = Some(Self::Int(v));
        }
        if let Some(v) = record.uint_value {
            set += 1;
            value = Some(Self::Uint(v));
        }
        if let Some(v) = record.sint_value {
            set += 1;
            value = Some(Self::Int(v));
        }
        if let Some(v) = record.bool_value {
            set += 1;
            value = Some(Self::Bool(v));
        }

        match (set, value) {
            (1, Some(value)) => Ok(value),
            (0, _) => Err(VariantError::None),
            _ => Err(VariantError::Multiple),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

// Narrow integer inputs widen to the 64-bit variants before interning.

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(value: &Value) -> u64 {
        use std::hash::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn narrow_integers_widen() {
        assert_eq!(Value::from(-95i8), Value::Int(-95));
        assert_eq!(Value::from(-95i16), Value::Int(-95));
        assert_eq!(Value::from(-95i32), Value::Int(-95));
        assert_eq!(Value::from(95u8), Value::Uint(95));
        assert_eq!(Value::from(95u16), Value::Uint(95));
        assert_eq!(Value::from(95u32), Value::Uint(95));
    }

    #[test]
    fn signed_and_unsigned_are_distinct() {
        assert_ne!(Value::Int(95), Value::Uint(95));
    }

    #[test]
    fn floats_compare_bitwise() {
        assert_eq!(Value::Float(f32::NAN), Value::Float(f32::NAN));
        assert_ne!(Value::Double(0.0), Value::Double(-0.0));
        assert_ne!(Value::Float(1.0), Value::Double(1.0));
    }

    #[test]
    fn float_hash_matches_equality() {
        let a = Value::Double(f64::NAN);
        let b = Value::Double(f64::NAN);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn to_envelope_sets_one_variant() {
        let record = Value::Int(-95).to_envelope();
        assert_eq!(record.int_value, Some(-95));
        assert_eq!(record.sint_value, None, "sint is never produced");
        assert_eq!(record.string_value, None);
        assert_eq!(record.uint_value, None);
    }

    #[test]
    fn from_envelope_round_trips() {
        for value in [
            Value::String("value".to_string()),
            Value::Float(3.142),
            Value::Double(3.142),
            Value::Int(-95),
            Value::Uint(95),
            Value::Bool(true),
        ] {
            let record = value.to_envelope();
            assert_eq!(Value::from_envelope(&record).unwrap(), value);
        }
    }

    #[test]
    fn from_envelope_folds_sint() {
        let record = envelope::Value {
            sint_value: Some(-95),
            ..Default::default()
        };
        assert_eq!(Value::from_envelope(&record).unwrap(), Value::Int(-95));
    }

    #[test]
    fn from_envelope_rejects_empty_record() {
        let record = envelope::Value::default();
        assert_eq!(Value::from_envelope(&record), Err(VariantError::None));
    }

    #[test]
    fn from_envelope_rejects_two_variants() {
        let record = envelope::Value {
            string_value: Some("value".to_string()),
            bool_value: Some(true),
            ..Default::default()
        };
        assert_eq!(Value::from_envelope(&record), Err(VariantError::Multiple));
    }

    #[test]
    fn nan_payload_survives_envelope() {
        let bits = 0x7FF0_0000_0000_0001u64;
        let value = Value::Double(f64::from_bits(bits));
        let record = value.to_envelope();
        let Value::Double(back) = Value::from_envelope(&record).unwrap() else {
            panic!("expected Double");
        };
        assert_eq!(back.to_bits(), bits);
    }
}
