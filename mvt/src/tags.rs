//! Per-layer key/value intern pools.

use indexmap::IndexSet;

use crate::error::{MvtError, MvtResult, TagKind};
use crate::tile::Property;
use crate::value::{Value, VariantError};

/// Deduplicating key and value pools for one layer, built fresh per encode.
///
/// Ordinals are insertion positions: the sequences give features stable
/// indices, the set lookups give O(1) dedup. Pool emission order is not
/// part of the format contract.
#[derive(Debug, Default)]
pub(crate) struct TagInterner {
    keys: IndexSet<String>,
    values: IndexSet<Value>,
}

impl TagInterner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Interns one property, returning its `(key, value)` ordinal pair.
    pub(crate) fn add(&mut self, property: &Property) -> (u32, u32) {
        let key = match self.keys.get_index_of(property.name.as_str()) {
            Some(index) => index,
            None => self.keys.insert_full(property.name.clone()).0,
        };
        let value = match self.values.get_index_of(&property.value) {
            Some(index) => index,
            None => self.values.insert_full(property.value.clone()).0,
        };
        (key as u32, value as u32)
    }

    /// Merges a typed metadata entry supplied via encode options.
    ///
    /// Options land after the feature-derived entries; a clash with a
    /// feature-derived key, or with another option entry, fails the layer.
    pub(crate) fn merge_metadata(&mut self, layer: &str, key: &str, value: &Value) -> MvtResult<()> {
        if self.keys.contains(key) {
            return Err(MvtError::DuplicateKey {
                layer: layer.to_string(),
                key: key.to_string(),
            });
        }
        self.keys.insert(key.to_string());
        self.values.insert(value.clone());
        Ok(())
    }

    /// Consumes the pools in ordinal order.
    pub(crate) fn into_pools(self) -> (Vec<String>, Vec<envelope::Value>) {
        let keys = self.keys.into_iter().collect();
        let values = self
            .values
            .into_iter()
            .map(|value| value.to_envelope())
            .collect();
        (keys, values)
    }
}

/// Resolves a feature's tag ordinals against its layer pools.
pub(crate) fn resolve_tags(
    layer: &str,
    feature: usize,
    tags: &[u32],
    keys: &[String],
    values: &[envelope::Value],
) -> MvtResult<Vec<Property>> {
    if tags.len() % 2 != 0 {
        return Err(MvtError::OddTagLength {
            layer: layer.to_string(),
            feature,
            len: tags.len(),
        });
    }

    let mut properties = Vec::with_capacity(tags.len() / 2);
    for pair in tags.chunks_exact(2) {
        let (key_index, value_index) = (pair[0], pair[1]);

        let name = keys
            .get(key_index as usize)
            .ok_or_else(|| MvtError::TagOutOfBounds {
                layer: layer.to_string(),
                feature,
                kind: TagKind::Key,
                index: key_index,
                len: keys.len(),
            })?;

        let record = values
            .get(value_index as usize)
            .ok_or_else(|| MvtError::TagOutOfBounds {
                layer: layer.to_string(),
                feature,
                kind: TagKind::Value,
                index: value_index,
                len: values.len(),
            })?;

        let value = Value::from_envelope(record).map_err(|err| match err {
            VariantError::None => MvtError::MissingValue {
                layer: layer.to_string(),
                index: value_index as usize,
            },
            VariantError::Multiple => MvtError::MultipleValues {
                layer: layer.to_string(),
                index: value_index as usize,
            },
        })?;

        properties.push(Property {
            name: name.clone(),
            value,
        });
    }
    Ok(properties)
}
