use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::{LineStringTrait, PolygonTrait};

use crate::common::GeometryTypeId;
use crate::error::GeometrySerdeResult;
use crate::writer::coord::COORD_SIZE;
use crate::writer::ensure_xy;
use crate::writer::linestring::write_coord_seq;

/// The byte length of an encoded Polygon.
pub fn polygon_size(geom: &impl PolygonTrait) -> usize {
    // type tag + ring count
    let mut sum = 1 + 4;
    if let Some(ext_ring) = geom.exterior() {
        sum += 4 + ext_ring.num_coords() * COORD_SIZE;
    }
    for int_ring in geom.interiors() {
        sum += 4 + int_ring.num_coords() * COORD_SIZE;
    }
    sum
}

/// Write a Polygon geometry, preceded by its type tag.
///
/// Ring 0 is the exterior ring; interior rings follow in input order. Rings
/// are never reordered and their orientation is not validated.
pub fn write_polygon<W: Write>(
    writer: &mut W,
    geom: &impl PolygonTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::Polygon.into())?;
    write_polygon_body(writer, geom)
}

/// Write the tag-less Polygon payload. MultiPolygon members reuse this
/// layout directly.
pub(crate) fn write_polygon_body<W: Write>(
    writer: &mut W,
    geom: &impl PolygonTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    match geom.exterior() {
        Some(ext_ring) => {
            let num_rings = 1 + geom.num_interiors();
            writer.write_u32::<LittleEndian>(num_rings.try_into().unwrap())?;
            write_coord_seq(writer, &ext_ring)?;
            for int_ring in geom.interiors() {
                write_coord_seq(writer, &int_ring)?;
            }
        }
        // An empty polygon has zero rings.
        None => writer.write_u32::<LittleEndian>(0)?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use geo_traits::{LineStringTrait, PolygonTrait};

    use crate::test::assert_round_trip;

    #[test]
    fn round_trip() {
        let decoded = assert_round_trip("POLYGON ((30 10, 40 40, 20 40))");
        let polygon = decoded.as_polygon().unwrap();
        assert_eq!(polygon.num_interiors(), 0);
        let ext_ring = polygon.exterior().unwrap();
        let coords: Vec<(f64, f64)> = ext_ring.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, [(30., 10.), (40., 40.), (20., 40.)]);
    }

    #[test]
    fn round_trip_closed_ring() {
        assert_round_trip("POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))");
    }

    #[test]
    fn round_trip_with_hole() {
        let decoded =
            assert_round_trip("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 2))");
        let polygon = decoded.as_polygon().unwrap();
        assert_eq!(polygon.num_interiors(), 1);
        assert_eq!(polygon.interior(0).unwrap().num_coords(), 4);
    }

    #[test]
    fn round_trip_empty() {
        let decoded = assert_round_trip("POLYGON EMPTY");
        let polygon = decoded.as_polygon().unwrap();
        assert!(polygon.exterior().is_none());
        assert_eq!(polygon.num_interiors(), 0);
    }
}
