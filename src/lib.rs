#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod common;
pub mod error;
pub mod reader;
pub mod writer;


use std::io::Cursor;

use geo_traits::GeometryTrait;

use crate::error::{GeometrySerdeError, GeometrySerdeResult};
use crate::reader::{read_geometry, Geometry};
use crate::writer::{geometry_size, write_geometry};

/// Encode a geometry into its binary representation.
///
/// Accepts any geometry exposed through the [geo_traits] capability
/// interface whose kind is in the supported set. Encoding is deterministic:
/// structurally identical geometries always produce identical bytes.
pub fn serialize(geom: &impl GeometryTrait<T = f64>) -> GeometrySerdeResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_size(geom));
    write_geometry(&mut buf, geom)?;
    Ok(buf)
}

/// Decode a geometry from its binary representation.
///
/// The buffer must contain exactly one encoded geometry; trailing bytes
/// after a complete parse are rejected rather than silently ignored. The
/// returned geometry owns all of its data.
pub fn deserialize(buf: &[u8]) -> GeometrySerdeResult<Geometry> {
    let mut reader = Cursor::new(buf);
    let geometry = read_geometry(&mut reader, 0)?;
    let trailing = buf.len() - reader.position() as usize;
    if trailing > 0 {
        return Err(GeometrySerdeError::MalformedEncoding(format!(
            "{trailing} trailing byte(s) after a complete geometry"
        )));
    }
    Ok(geometry)
}
