use std::io::Cursor;

use geo_traits::MultiPointTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::linestring::read_coord_seq;
use crate::reader::point::Point;

/// An owned MultiPoint.
///
/// This implements [MultiPointTrait], which you can use to extract data.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    /// Construct from member points.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Whether this multi point has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read a MultiPoint payload: the same count-plus-pairs layout as a
/// LineString, with each pair materialized as a point.
pub(crate) fn read_multi_point(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<MultiPoint> {
    let coords = read_coord_seq(reader)?;
    Ok(MultiPoint(coords.into_iter().map(Point::from).collect()))
}

impl MultiPointTrait for MultiPoint {
    type T = f64;
    type PointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::PointType<'_> {
        &self.0[i]
    }
}

impl MultiPointTrait for &MultiPoint {
    type T = f64;
    type PointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::PointType<'_> {
        &self.0[i]
    }
}
