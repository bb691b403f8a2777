//! Error types for tile encoding and decoding.

use std::fmt;

use geometry::GeometryError;

/// Result type for tile encoding and decoding.
pub type MvtResult<T> = Result<T, MvtError>;

/// Which layer pool a tag ordinal indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Key,
    Value,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Key => "key",
            Self::Value => "value",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while encoding or decoding a tile.
#[derive(Debug, Clone)]
pub enum MvtError {
    /// Envelope bytes failed to parse.
    Envelope(prost::DecodeError),

    /// Geometry codec failure, with the layer and feature index it hit.
    Geometry {
        layer: String,
        feature: usize,
        source: GeometryError,
    },

    /// Two layers share a name.
    DuplicateLayerName { name: String },

    /// A layer with an empty name.
    EmptyLayerName,

    /// A layer whose extent is not a positive integer.
    InvalidExtent { layer: String, extent: u32 },

    /// A layer declaring a schema version other than 2.
    UnsupportedVersion { layer: String, version: u32 },

    /// Two features in one layer share an id.
    DuplicateFeatureId { layer: String, id: u64 },

    /// Two entries in one layer's key pool share a string.
    DuplicateKey { layer: String, key: String },

    /// An empty string in a layer's key pool.
    EmptyKey { layer: String },

    /// A feature tag sequence of odd length.
    OddTagLength {
        layer: String,
        feature: usize,
        len: usize,
    },

    /// A tag ordinal beyond its layer pool.
    TagOutOfBounds {
        layer: String,
        feature: usize,
        kind: TagKind,
        index: u32,
        len: usize,
    },

    /// A value record with no variant set.
    MissingValue {
        layer: String,
        /// Index into the layer's value pool.
        index: usize,
    },

    /// A value record with more than one variant set.
    MultipleValues {
        layer: String,
        /// Index into the layer's value pool.
        index: usize,
    },

    /// A feature without a declared geometry type.
    MissingGeometryType { layer: String, feature: usize },

    /// A feature declaring a geometry type outside the schema enumeration.
    UnknownGeometryType {
        layer: String,
        feature: usize,
        value: i32,
    },
}

impl fmt::Display for MvtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Envelope(e) => write!(f, "envelope error: {e}"),
            Self::Geometry {
                layer,
                feature,
                source,
            } => {
                write!(
                    f,
                    "geometry error in layer '{layer}' feature {feature}: {source}"
                )
            }
            Self::DuplicateLayerName { name } => {
                write!(f, "layer with name '{name}' already exists")
            }
            Self::EmptyLayerName => {
                write!(f, "layer name must not be empty")
            }
            Self::InvalidExtent { layer, extent } => {
                write!(f, "layer '{layer}' extent must be positive, got {extent}")
            }
            Self::UnsupportedVersion { layer, version } => {
                write!(f, "layer '{layer}' has unsupported version {version}")
            }
            Self::DuplicateFeatureId { layer, id } => {
                write!(f, "feature with id {id} already exists in layer '{layer}'")
            }
            Self::DuplicateKey { layer, key } => {
                write!(f, "key '{key}' already exists in layer '{layer}'")
            }
            Self::EmptyKey { layer } => {
                write!(f, "layer '{layer}' has an empty key")
            }
            Self::OddTagLength {
                layer,
                feature,
                len,
            } => {
                write!(
                    f,
                    "layer '{layer}' feature {feature} has odd tag length {len}"
                )
            }
            Self::TagOutOfBounds {
                layer,
                feature,
                kind,
                index,
                len,
            } => {
                write!(
                    f,
                    "layer '{layer}' feature {feature} tag {kind} index {index} beyond pool of {len}"
                )
            }
            Self::MissingValue { layer, index } => {
                write!(f, "layer '{layer}' value {index} has no variant set")
            }
            Self::MultipleValues { layer, index } => {
                write!(
                    f,
                    "layer '{layer}' value {index} has more than one variant set"
                )
            }
            Self::MissingGeometryType { layer, feature } => {
                write!(f, "layer '{layer}' feature {feature} has no geometry type")
            }
            Self::UnknownGeometryType {
                layer,
                feature,
                value,
            } => {
                write!(
                    f,
                    "layer '{layer}' feature {feature} has unknown geometry type {value}"
                )
            }
        }
    }
}

impl std::error::Error for MvtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Envelope(e) => Some(e),
            Self::Geometry { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<prost::DecodeError> for MvtError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Envelope(err)
    }
}
