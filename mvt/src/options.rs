//! Encode options.

use crate::value::Value;

/// Typed metadata merged into every layer's intern pools on encode.
///
/// Entries land after the feature-derived pool entries, in the order they
/// were added. A key clash with a feature-derived key, or between two
/// option entries, fails the encode with
/// [`MvtError::DuplicateKey`](crate::MvtError::DuplicateKey).
///
/// # Example
///
/// ```
/// use mvt::EncodeOptions;
///
/// let options = EncodeOptions::new()
///     .with_string("generator", "pipeline")
///     .with_int("schema_revision", 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub(crate) metadata: Vec<(String, Value)>,
}

impl EncodeOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string value under `key` to every layer.
    #[must_use]
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), Value::String(value.into())));
        self
    }

    /// Adds a 32-bit float value under `key` to every layer.
    #[must_use]
    pub fn with_float32(mut self, key: impl Into<String>, value: f32) -> Self {
        self.metadata.push((key.into(), Value::Float(value)));
        self
    }

    /// Adds a 64-bit float value under `key` to every layer.
    #[must_use]
    pub fn with_float64(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metadata.push((key.into(), Value::Double(value)));
        self
    }

    /// Adds a signed integer value under `key` to every layer.
    #[must_use]
    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.metadata.push((key.into(), Value::Int(value)));
        self
    }

    /// Adds an unsigned integer value under `key` to every layer.
    #[must_use]
    pub fn with_uint(mut self, key: impl Into<String>, value: u64) -> Self {
        self.metadata.push((key.into(), Value::Uint(value)));
        self
    }

    /// Adds a boolean value under `key` to every layer.
    #[must_use]
    pub fn with_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.metadata.push((key.into(), Value::Bool(value)));
        self
    }
}
