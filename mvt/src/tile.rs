//! The in-memory tile model.

use indexmap::IndexMap;

use crate::value::Value;
use geometry::Shape;

/// Default number of tile-internal coordinate units per tile edge.
pub const DEFAULT_EXTENT: u32 = 4096;

/// The layers of one tile, keyed by unique layer name.
///
/// Iteration order is insertion order; encode emits layers in that order
/// and decode rebuilds the mapping in serialized order.
pub type Layers = IndexMap<String, Layer>;

/// A named container of features.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Tile-internal coordinate units per tile edge. Must be positive.
    pub extent: u32,
    /// Features in emission order.
    pub features: Vec<Feature>,
}

impl Layer {
    /// Creates an empty layer with the given extent.
    #[must_use]
    pub const fn new(extent: u32) -> Self {
        Self {
            extent,
            features: Vec::new(),
        }
    }

    /// Creates a layer with the given extent and features.
    #[must_use]
    pub fn with_features(extent: u32, features: Vec<Feature>) -> Self {
        Self { extent, features }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENT)
    }
}

/// A single shape with optional id and typed properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Unique within the layer when present.
    pub id: Option<u64>,
    pub shape: Shape,
    /// Properties in emission order.
    pub properties: Vec<Property>,
}

impl Feature {
    /// Creates a feature with no id and no properties.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            id: None,
            shape,
            properties: Vec::new(),
        }
    }

    /// Sets the feature id.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Appends a typed property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }
}

/// A named typed attribute on one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

impl Property {
    /// Creates a property, widening narrow integer inputs.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
