//! Tile disassembly: envelope bytes into layers and features.

use std::collections::HashSet;

use geo_types::Coord;
use prost::Message;

use crate::error::{MvtError, MvtResult};
use crate::tags;
use crate::tile::{Feature, Layer, Layers};
use geometry::ShapeKind;

/// Decodes tile envelope bytes into layers.
///
/// `unproject` maps tile-local integer coordinates back into geographic
/// space. Layers are rebuilt in serialized order; feature order within a
/// layer is preserved.
///
/// # Errors
///
/// Returns [`MvtError::Envelope`] for malformed bytes, and an error naming
/// the offending layer for any envelope invariant violation: a version
/// other than 2, duplicate layer names, duplicate or empty keys, a missing
/// geometry type, tag ordinals out of bounds, or a malformed geometry
/// stream.
pub fn decode<U>(bytes: &[u8], unproject: U) -> MvtResult<Layers>
where
    U: Fn(Coord<i32>) -> Coord<f64>,
{
    let tile = envelope::Tile::decode(bytes)?;

    let mut layers = Layers::new();
    for layer in &tile.layers {
        if layers.contains_key(&layer.name) {
            return Err(MvtError::DuplicateLayerName {
                name: layer.name.clone(),
            });
        }
        let decoded = decode_layer(layer, &unproject)?;
        layers.insert(layer.name.clone(), decoded);
    }
    Ok(layers)
}

fn decode_layer<U>(layer: &envelope::Layer, unproject: &U) -> MvtResult<Layer>
where
    U: Fn(Coord<i32>) -> Coord<f64>,
{
    if layer.version != 2 {
        return Err(MvtError::UnsupportedVersion {
            layer: layer.name.clone(),
            version: layer.version,
        });
    }
    if layer.name.is_empty() {
        return Err(MvtError::EmptyLayerName);
    }
    if layer.extent == 0 {
        return Err(MvtError::InvalidExtent {
            layer: layer.name.clone(),
            extent: 0,
        });
    }

    let mut seen = HashSet::with_capacity(layer.keys.len());
    for key in &layer.keys {
        if key.is_empty() {
            return Err(MvtError::EmptyKey {
                layer: layer.name.clone(),
            });
        }
        if !seen.insert(key.as_str()) {
            return Err(MvtError::DuplicateKey {
                layer: layer.name.clone(),
                key: key.clone(),
            });
        }
    }

    let mut ids = HashSet::new();
    let mut features = Vec::with_capacity(layer.features.len());
    for (index, feature) in layer.features.iter().enumerate() {
        if let Some(id) = feature.id {
            if !ids.insert(id) {
                return Err(MvtError::DuplicateFeatureId {
                    layer: layer.name.clone(),
                    id,
                });
            }
        }

        let properties = tags::resolve_tags(
            &layer.name,
            index,
            &feature.tags,
            &layer.keys,
            &layer.values,
        )?;

        let kind = shape_kind(layer, index, feature)?;
        let shape = geometry::decode(&feature.geometry, kind, unproject).map_err(|source| {
            MvtError::Geometry {
                layer: layer.name.clone(),
                feature: index,
                source,
            }
        })?;

        features.push(Feature {
            id: feature.id,
            shape,
            properties,
        });
    }

    Ok(Layer {
        extent: layer.extent,
        features,
    })
}

/// Requires a declared geometry type and maps it onto the decoder's kind.
fn shape_kind(
    layer: &envelope::Layer,
    index: usize,
    feature: &envelope::Feature,
) -> MvtResult<ShapeKind> {
    let raw = feature.r#type.ok_or_else(|| MvtError::MissingGeometryType {
        layer: layer.name.clone(),
        feature: index,
    })?;

    match envelope::GeomType::try_from(raw) {
        Ok(envelope::GeomType::Unknown) => Ok(ShapeKind::Unknown),
        Ok(envelope::GeomType::Point) => Ok(ShapeKind::Point),
        Ok(envelope::GeomType::Linestring) => Ok(ShapeKind::LineString),
        Ok(envelope::GeomType::Polygon) => Ok(ShapeKind::Polygon),
        Err(_) => Err(MvtError::UnknownGeometryType {
            layer: layer.name.clone(),
            feature: index,
            value: raw,
        }),
    }
}
