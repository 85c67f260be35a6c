use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::{MultiPointTrait, PointTrait};

use crate::common::GeometryTypeId;
use crate::error::{GeometrySerdeError, GeometrySerdeResult};
use crate::writer::coord::{write_coord, COORD_SIZE};
use crate::writer::ensure_xy;

/// The byte length of an encoded MultiPoint.
pub fn multi_point_size(geom: &impl MultiPointTrait) -> usize {
    // type tag + point count
    let header = 1 + 4;
    header + geom.num_points() * COORD_SIZE
}

/// Write a MultiPoint geometry, preceded by its type tag.
pub fn write_multi_point<W: Write>(
    writer: &mut W,
    geom: &impl MultiPointTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::MultiPoint.into())?;
    writer.write_u32::<LittleEndian>(geom.num_points().try_into().unwrap())?;
    for point in geom.points() {
        let coord = point.coord().ok_or_else(|| {
            GeometrySerdeError::UnsupportedGeometry(
                "MultiPoint members must be non-empty points".to_string(),
            )
        })?;
        write_coord(writer, &coord)?;
    }
    Ok(())
}
