use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::GeometryCollectionTrait;

use crate::common::GeometryTypeId;
use crate::error::GeometrySerdeResult;
use crate::writer::ensure_xy;
use crate::writer::geometry::{geometry_size, write_geometry};

/// The byte length of an encoded GeometryCollection.
pub fn geometry_collection_size(geom: &impl GeometryCollectionTrait) -> usize {
    // type tag + member count
    let mut sum = 1 + 4;
    for member in geom.geometries() {
        sum += geometry_size(&member);
    }
    sum
}

/// Write a GeometryCollection geometry, preceded by its type tag.
///
/// Each member is written as its complete self-describing encoding (its own
/// tag and payload) with no length prefix between members; nested collections
/// are handled by the same recursion.
pub fn write_geometry_collection<W: Write>(
    writer: &mut W,
    geom: &impl GeometryCollectionTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    ensure_xy(geom.dim())?;
    writer.write_u8(GeometryTypeId::GeometryCollection.into())?;
    writer.write_u32::<LittleEndian>(geom.num_geometries().try_into().unwrap())?;
    for member in geom.geometries() {
        write_geometry(writer, &member)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use geo_traits::GeometryCollectionTrait;

    use crate::test::assert_round_trip;

    #[test]
    fn round_trip() {
        for wkt_str in [
            "GEOMETRYCOLLECTION (POINT (1 2))",
            "GEOMETRYCOLLECTION (POINT (1 2), POINT (2 1), POINT EMPTY)",
            "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 2, 3 4), POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0)))",
            "GEOMETRYCOLLECTION (MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20))))",
            "GEOMETRYCOLLECTION (MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5))))",
            "GEOMETRYCOLLECTION (MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5))), POINT (1 2))",
            "GEOMETRYCOLLECTION (POINT EMPTY)",
        ] {
            assert_round_trip(wkt_str);
        }
    }

    #[test]
    fn round_trip_empty() {
        let decoded = assert_round_trip("GEOMETRYCOLLECTION EMPTY");
        let collection = decoded.as_geometry_collection().unwrap();
        assert_eq!(collection.num_geometries(), 0);
        // Distinct from an empty point.
        assert!(decoded.as_point().is_none());
    }

    #[test]
    fn round_trip_nested() {
        let decoded = assert_round_trip(
            "GEOMETRYCOLLECTION (MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20))), \
             GEOMETRYCOLLECTION (MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)))))",
        );
        let outer = decoded.as_geometry_collection().unwrap();
        assert_eq!(outer.num_geometries(), 2);
        let inner = outer.geometry(1).unwrap();
        let inner = inner.as_geometry_collection().unwrap();
        assert_eq!(inner.num_geometries(), 1);
        assert!(inner.geometry(0).unwrap().as_multi_polygon().is_some());
    }
}
