//! Inspection and debugging tools for vector tiles.
//!
//! This crate provides utilities for understanding encoded tiles:
//!
//! - Dump a tile's envelope structure and sizes
//! - Run a full decode and report what the library sees
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not
//!   afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec
//!   is doing.

use geo_types::{coord, Coord};
use prost::Message as _;
use serde::Serialize;

pub use mvt::MvtError;

/// Structure report for one tile.
#[derive(Debug, Clone, Serialize)]
pub struct TileReport {
    pub total_bytes: usize,
    pub layers: Vec<LayerReport>,
}

/// Structure report for one layer.
#[derive(Debug, Clone, Serialize)]
pub struct LayerReport {
    pub name: String,
    pub version: u32,
    pub extent: u32,
    pub key_count: usize,
    pub value_count: usize,
    pub features: Vec<FeatureReport>,
}

/// Structure report for one feature.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    pub id: Option<u64>,
    pub geometry_type: String,
    pub geometry_words: usize,
    pub tag_pairs: usize,
}

/// Parses envelope bytes into a structure report.
///
/// Only the envelope is inspected; geometry streams and tag pools are
/// reported by size, not decoded, so a structurally broken tile can still
/// be examined.
pub fn inspect_tile(bytes: &[u8]) -> Result<TileReport, prost::DecodeError> {
    let tile = envelope::Tile::decode(bytes)?;

    let layers = tile
        .layers
        .iter()
        .map(|layer| LayerReport {
            name: layer.name.clone(),
            version: layer.version,
            extent: layer.extent,
            key_count: layer.keys.len(),
            value_count: layer.values.len(),
            features: layer
                .features
                .iter()
                .map(|feature| FeatureReport {
                    id: feature.id,
                    geometry_type: geometry_type_name(feature.r#type),
                    geometry_words: feature.geometry.len(),
                    tag_pairs: feature.tags.len() / 2,
                })
                .collect(),
        })
        .collect();

    Ok(TileReport {
        total_bytes: bytes.len(),
        layers,
    })
}

fn geometry_type_name(raw: Option<i32>) -> String {
    let Some(raw) = raw else {
        return "missing".to_string();
    };
    match envelope::GeomType::try_from(raw) {
        Ok(envelope::GeomType::Unknown) => "unknown".to_string(),
        Ok(envelope::GeomType::Point) => "point".to_string(),
        Ok(envelope::GeomType::Linestring) => "linestring".to_string(),
        Ok(envelope::GeomType::Polygon) => "polygon".to_string(),
        Err(_) => format!("invalid({raw})"),
    }
}

/// Formats a structure report for terminal output.
pub fn format_report_pretty(report: &TileReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "tile: {} bytes, {} layers",
        report.total_bytes,
        report.layers.len()
    );
    for layer in &report.layers {
        let _ = writeln!(
            out,
            "layer '{}': version {}, extent {}, {} keys, {} values",
            layer.name, layer.version, layer.extent, layer.key_count, layer.value_count
        );
        for (index, feature) in layer.features.iter().enumerate() {
            let id = feature
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let _ = writeln!(
                out,
                "  feature {index}: id {id}, {} geometry, {} words, {} tag pairs",
                feature.geometry_type, feature.geometry_words, feature.tag_pairs
            );
        }
    }
    out
}

/// Runs a full decode with a pass-through unprojection.
///
/// Tile-local integer coordinates are viewed as geographic coordinates
/// directly, which is enough to exercise every envelope and geometry
/// invariant the library checks.
pub fn check_tile(bytes: &[u8]) -> Result<mvt::Layers, MvtError> {
    mvt::decode(bytes, passthrough_unproject)
}

fn passthrough_unproject(c: Coord<i32>) -> Coord<f64> {
    coord! { x: f64::from(c.x), y: f64::from(c.y) }
}
