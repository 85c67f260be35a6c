use std::io::Write;

use byteorder::WriteBytesExt;
use geo_traits::PointTrait;

use crate::common::GeometryTypeId;
use crate::error::GeometrySerdeResult;
use crate::writer::coord::{write_coord, COORD_SIZE};
use crate::writer::ensure_xy;

/// The byte length of an encoded Point.
pub fn point_size(geom: &impl PointTrait) -> usize {
    // type tag + empty flag
    let header = 1 + 1;
    if geom.coord().is_some() {
        header + COORD_SIZE
    } else {
        header
    }
}

/// Write a Point geometry, preceded by its type tag.
///
/// An empty point is encoded as a flag byte with no coordinate payload, so
/// emptiness survives the round trip without sentinel coordinate values.
pub fn write_point<W: Write>(
    writer: &mut W,
    geom: &impl PointTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::Point.into())?;
    match geom.coord() {
        Some(coord) => {
            writer.write_u8(0)?;
            write_coord(writer, &coord)?;
        }
        None => writer.write_u8(1)?,
    }
    Ok(())
}
