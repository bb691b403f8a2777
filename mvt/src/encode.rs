//! Tile assembly: layers and features into envelope bytes.

use std::collections::HashSet;

use geo_types::Coord;
use prost::Message;

use crate::error::{MvtError, MvtResult};
use crate::options::EncodeOptions;
use crate::tags::TagInterner;
use crate::tile::{Layer, Layers};
use geometry::{Shape, ShapeKind};

/// Encodes layers into tile envelope bytes.
///
/// `project` maps geographic coordinates into tile-local integer space.
/// Layers are emitted in iteration order; feature order is preserved.
///
/// # Errors
///
/// Returns an [`MvtError`] naming the offending layer (and feature, where
/// applicable) for any invariant violation; no bytes are produced on
/// failure.
pub fn encode<P>(layers: &Layers, project: P) -> MvtResult<Vec<u8>>
where
    P: Fn(Coord<f64>) -> Coord<i32>,
{
    encode_with_options(layers, project, &EncodeOptions::default())
}

/// Encodes layers with typed metadata merged into every layer's pools.
pub fn encode_with_options<P>(
    layers: &Layers,
    project: P,
    options: &EncodeOptions,
) -> MvtResult<Vec<u8>>
where
    P: Fn(Coord<f64>) -> Coord<i32>,
{
    let mut tile = envelope::Tile::default();
    for (name, layer) in layers {
        tile.layers.push(encode_layer(name, layer, &project, options)?);
    }
    Ok(tile.encode_to_vec())
}

fn encode_layer<P>(
    name: &str,
    layer: &Layer,
    project: &P,
    options: &EncodeOptions,
) -> MvtResult<envelope::Layer>
where
    P: Fn(Coord<f64>) -> Coord<i32>,
{
    if name.is_empty() {
        return Err(MvtError::EmptyLayerName);
    }
    if layer.extent == 0 {
        return Err(MvtError::InvalidExtent {
            layer: name.to_string(),
            extent: 0,
        });
    }

    let mut interner = TagInterner::new();
    let mut ids = HashSet::new();
    let mut features = Vec::with_capacity(layer.features.len());

    for (index, feature) in layer.features.iter().enumerate() {
        if let Some(id) = feature.id {
            if !ids.insert(id) {
                return Err(MvtError::DuplicateFeatureId {
                    layer: name.to_string(),
                    id,
                });
            }
        }

        let mut tags = Vec::with_capacity(feature.properties.len() * 2);
        for property in &feature.properties {
            if property.name.is_empty() {
                return Err(MvtError::EmptyKey {
                    layer: name.to_string(),
                });
            }
            let (key, value) = interner.add(property);
            tags.push(key);
            tags.push(value);
        }

        let words =
            geometry::encode(&feature.shape, project).map_err(|source| MvtError::Geometry {
                layer: name.to_string(),
                feature: index,
                source,
            })?;

        features.push(envelope::Feature {
            id: feature.id,
            tags,
            r#type: Some(geom_type(&feature.shape) as i32),
            geometry: words,
        });
    }

    for (key, value) in &options.metadata {
        interner.merge_metadata(name, key, value)?;
    }

    let (keys, values) = interner.into_pools();
    Ok(envelope::Layer {
        version: 2,
        name: name.to_string(),
        features,
        keys,
        values,
        extent: layer.extent,
    })
}

fn geom_type(shape: &Shape) -> envelope::GeomType {
    match shape.kind() {
        ShapeKind::Unknown => envelope::GeomType::Unknown,
        ShapeKind::Point => envelope::GeomType::Point,
        ShapeKind::LineString => envelope::GeomType::Linestring,
        ShapeKind::Polygon => envelope::GeomType::Polygon,
    }
}
