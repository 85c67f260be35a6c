use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::{LineStringTrait, MultiLineStringTrait};

use crate::common::GeometryTypeId;
use crate::error::GeometrySerdeResult;
use crate::writer::coord::COORD_SIZE;
use crate::writer::ensure_xy;
use crate::writer::linestring::write_coord_seq;

/// The byte length of an encoded MultiLineString.
pub fn multi_line_string_size(geom: &impl MultiLineStringTrait) -> usize {
    // type tag + line count
    let mut sum = 1 + 4;
    for line in geom.line_strings() {
        sum += 4 + line.num_coords() * COORD_SIZE;
    }
    sum
}

/// Write a MultiLineString geometry, preceded by its type tag.
pub fn write_multi_line_string<W: Write>(
    writer: &mut W,
    geom: &impl MultiLineStringTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::MultiLineString.into())?;
    writer.write_u32::<LittleEndian>(geom.num_line_strings().try_into().unwrap())?;
    for line in geom.line_strings() {
        write_coord_seq(writer, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use geo_traits::{LineStringTrait, MultiLineStringTrait};

    use crate::test::assert_round_trip;

    #[test]
    fn round_trip() {
        for wkt_str in [
            "MULTILINESTRING ((0 1, 2 3, 4 5))",
            "MULTILINESTRING ((0 1, 2 3, 4 5), (0 1, 2 3, 4 6), (0 1, 2 3, 4 7))",
        ] {
            assert_round_trip(wkt_str);
        }
    }

    #[test]
    fn round_trip_mixed_lengths() {
        let decoded = assert_round_trip("MULTILINESTRING ((0 1, 2 3, 4 5), (1 1, 2 2))");
        let multi_line = decoded.as_multi_line_string().unwrap();
        assert_eq!(multi_line.num_line_strings(), 2);
        let lengths: Vec<usize> = multi_line
            .line_strings()
            .map(|line| line.num_coords())
            .collect();
        assert_eq!(lengths, [3, 2]);
    }

    #[test]
    fn round_trip_empty() {
        let decoded = assert_round_trip("MULTILINESTRING EMPTY");
        assert_eq!(decoded.as_multi_line_string().unwrap().num_line_strings(), 0);
    }
}
