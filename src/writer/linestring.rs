use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::LineStringTrait;

use crate::common::GeometryTypeId;
use crate::error::GeometrySerdeResult;
use crate::writer::coord::{write_coord, COORD_SIZE};
use crate::writer::ensure_xy;

/// The byte length of an encoded LineString.
pub fn line_string_size(geom: &impl LineStringTrait) -> usize {
    // type tag + point count
    let header = 1 + 4;
    header + geom.num_coords() * COORD_SIZE
}

/// Write a LineString geometry, preceded by its type tag.
pub fn write_line_string<W: Write>(
    writer: &mut W,
    geom: &impl LineStringTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::LineString.into())?;
    write_coord_seq(writer, geom)
}

/// Write a length-prefixed coordinate sequence: a u32 point count followed by
/// that many coordinate pairs. Shared by every layout that embeds a line of
/// points (LineString payloads, polygon rings).
pub(crate) fn write_coord_seq<W: Write>(
    writer: &mut W,
    line: &impl LineStringTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    writer.write_u32::<LittleEndian>(line.num_coords().try_into().unwrap())?;
    for coord in line.coords() {
        write_coord(writer, &coord)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use geo_traits::LineStringTrait;

    use crate::test::assert_round_trip;

    #[test]
    fn round_trip() {
        for wkt_str in [
            "LINESTRING (0 1)",
            "LINESTRING (0 1, 2 3)",
            "LINESTRING (0 1, 2 3, 4 5)",
        ] {
            assert_round_trip(wkt_str);
        }
    }

    #[test]
    fn preserves_point_order() {
        let decoded = assert_round_trip("LINESTRING (0 1, 2 3, 4 5)");
        let line = decoded.as_line_string().unwrap();
        let xs: Vec<f64> = line.coords().map(|c| c.x).collect();
        assert_eq!(xs, [0., 2., 4.]);
    }

    #[test]
    fn round_trip_empty() {
        let decoded = assert_round_trip("LINESTRING EMPTY");
        assert_eq!(decoded.as_line_string().unwrap().num_coords(), 0);
    }
}
