//! The vector tile envelope: length-delimited protobuf records.
//!
//! Field tag numbers are part of the wire contract and match the Mapbox
//! vector tile schema bit-exactly, so tiles interoperate with other
//! implementations.
//!
//! See <https://github.com/mapbox/vector-tile-spec/tree/master/2.1>.
//!
//! This crate only defines the records; which fields a conforming tile
//! must populate is enforced by the layer above.

use prost::{Enumeration, Message};

/// A tile: an ordered sequence of named layers.
#[derive(Clone, PartialEq, Message)]
pub struct Tile {
    #[prost(message, repeated, tag = "3")]
    pub layers: Vec<Layer>,
}

/// A named container of features with its key/value pools.
#[derive(Clone, PartialEq, Message)]
pub struct Layer {
    /// Vector tile schema version used by this layer.
    #[prost(uint32, required, tag = "15")]
    pub version: u32,

    /// Layer name, unique within the tile.
    #[prost(string, required, tag = "1")]
    pub name: String,

    #[prost(message, repeated, tag = "2")]
    pub features: Vec<Feature>,

    /// Deduplicated tag keys referenced by feature tag pairs.
    #[prost(string, repeated, tag = "3")]
    pub keys: Vec<String>,

    /// Deduplicated tag values referenced by feature tag pairs.
    #[prost(message, repeated, tag = "4")]
    pub values: Vec<Value>,

    /// Tile-internal coordinate units per tile edge.
    #[prost(uint32, tag = "5", default = "4096")]
    pub extent: u32,
}

/// A single shape with optional id, tag pairs, and geometry words.
#[derive(Clone, PartialEq, Message)]
pub struct Feature {
    /// Unique within the layer when present.
    #[prost(uint64, optional, tag = "1")]
    pub id: Option<u64>,

    /// Flat `(key index, value index)` pairs into the layer pools.
    #[prost(uint32, repeated, tag = "2")]
    pub tags: Vec<u32>,

    /// The declared geometry type; decoding requires it.
    #[prost(enumeration = "GeomType", optional, tag = "3")]
    pub r#type: Option<i32>,

    /// The packed command-word stream.
    #[prost(uint32, repeated, tag = "4")]
    pub geometry: Vec<u32>,
}

/// The geometry type declared on a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum GeomType {
    Unknown = 0,
    Point = 1,
    Linestring = 2,
    Polygon = 3,
}

/// A typed tag value; exactly one variant is set in a valid record.
#[derive(Clone, PartialEq, Message)]
pub struct Value {
    #[prost(string, optional, tag = "1")]
    pub string_value: Option<String>,
    #[prost(float, optional, tag = "2")]
    pub float_value: Option<f32>,
    #[prost(double, optional, tag = "3")]
    pub double_value: Option<f64>,
    #[prost(int64, optional, tag = "4")]
    pub int_value: Option<i64>,
    #[prost(uint64, optional, tag = "5")]
    pub uint_value: Option<u64>,
    #[prost(sint64, optional, tag = "6")]
    pub sint_value: Option<i64>,
    #[prost(bool, optional, tag = "7")]
    pub bool_value: Option<bool>,
}
