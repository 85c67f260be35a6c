use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::{LineStringTrait, MultiPolygonTrait, PolygonTrait};

use crate::common::GeometryTypeId;
use crate::error::GeometrySerdeResult;
use crate::writer::coord::COORD_SIZE;
use crate::writer::ensure_xy;
use crate::writer::polygon::write_polygon_body;

/// The byte length of an encoded MultiPolygon.
pub fn multi_polygon_size(geom: &impl MultiPolygonTrait) -> usize {
    // type tag + polygon count
    let mut sum = 1 + 4;
    for polygon in geom.polygons() {
        // ring count
        sum += 4;
        if let Some(ext_ring) = polygon.exterior() {
            sum += 4 + ext_ring.num_coords() * COORD_SIZE;
        }
        for int_ring in polygon.interiors() {
            sum += 4 + int_ring.num_coords() * COORD_SIZE;
        }
    }
    sum
}

/// Write a MultiPolygon geometry, preceded by its type tag. Members are
/// tag-less Polygon payloads in input order.
pub fn write_multi_polygon<W: Write>(
    writer: &mut W,
    geom: &impl MultiPolygonTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::MultiPolygon.into())?;
    writer.write_u32::<LittleEndian>(geom.num_polygons().try_into().unwrap())?;
    for polygon in geom.polygons() {
        write_polygon_body(writer, &polygon)?;
    }
    Ok(())
}
