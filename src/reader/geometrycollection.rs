use std::io::Cursor;

use geo_traits::GeometryCollectionTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::geometry::{read_geometry, Geometry};
use crate::reader::read_count;

/// An owned GeometryCollection.
///
/// This implements [GeometryCollectionTrait], which you can use to extract
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    /// Construct from member geometries.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read a GeometryCollection payload: a member count, then each member's
/// complete self-describing encoding. Each member decoder consumes exactly
/// its own bytes, which is how this decoder finds the next member; nested
/// collections recurse with an incremented depth.
pub(crate) fn read_geometry_collection(
    reader: &mut Cursor<&[u8]>,
    depth: usize,
) -> GeometrySerdeResult<GeometryCollection> {
    // Each member costs at least its own type tag byte.
    let num_geometries = read_count(reader, 1)?;
    let mut geometries = Vec::with_capacity(num_geometries);
    for _ in 0..num_geometries {
        geometries.push(read_geometry(reader, depth + 1)?);
    }
    Ok(GeometryCollection(geometries))
}

impl GeometryCollectionTrait for GeometryCollection {
    type T = f64;
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        &self.0[i]
    }
}

impl GeometryCollectionTrait for &GeometryCollection {
    type T = f64;
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        &self.0[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reader::{MultiPolygon, Point};
    use crate::writer::write_geometry_collection;
    use crate::{deserialize, serialize};

    #[test]
    fn owned_round_trip() {
        let collection = GeometryCollection::new(vec![
            Geometry::Point(Point::new(1., 2.)),
            Geometry::MultiPolygon(MultiPolygon::new(vec![])),
            Geometry::GeometryCollection(GeometryCollection::new(vec![Geometry::Point(
                Point::empty(),
            )])),
        ]);
        let mut buf = Vec::new();
        write_geometry_collection(&mut buf, &collection).unwrap();
        assert_eq!(
            deserialize(&buf).unwrap(),
            Geometry::GeometryCollection(collection)
        );
    }

    #[test]
    fn empty_collection_is_not_an_empty_point() {
        let empty_collection =
            serialize(&Geometry::GeometryCollection(GeometryCollection::new(vec![]))).unwrap();
        let empty_point = serialize(&Geometry::Point(Point::empty())).unwrap();
        assert_ne!(empty_collection, empty_point);
        assert_ne!(
            deserialize(&empty_collection).unwrap(),
            deserialize(&empty_point).unwrap()
        );
    }
}
