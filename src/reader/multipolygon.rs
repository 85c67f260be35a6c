use std::io::Cursor;

use geo_traits::MultiPolygonTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::polygon::{read_polygon_body, Polygon};
use crate::reader::read_count;

/// An owned MultiPolygon.
///
/// This implements [MultiPolygonTrait], which you can use to extract data.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// Construct from member polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    /// Whether this multi polygon has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read a MultiPolygon payload: a polygon count, then one tag-less Polygon
/// payload per member.
pub(crate) fn read_multi_polygon(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<MultiPolygon> {
    // Each polygon costs at least its own 4-byte ring count.
    let num_polygons = read_count(reader, 4)?;
    let mut polygons = Vec::with_capacity(num_polygons);
    for _ in 0..num_polygons {
        polygons.push(read_polygon_body(reader)?);
    }
    Ok(MultiPolygon(polygons))
}

impl MultiPolygonTrait for MultiPolygon {
    type T = f64;
    type PolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::PolygonType<'_> {
        &self.0[i]
    }
}

impl MultiPolygonTrait for &MultiPolygon {
    type T = f64;
    type PolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::PolygonType<'_> {
        &self.0[i]
    }
}
