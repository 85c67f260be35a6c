use std::io::Cursor;

use byteorder::ReadBytesExt;
use geo_traits::PointTrait;

use crate::error::{GeometrySerdeError, GeometrySerdeResult};
use crate::reader::coord::{read_coord, Coord};
use crate::reader::ensure_remaining;

/// An owned Point, possibly empty.
///
/// This implements [PointTrait], which you can use to extract data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Option<Coord>);

impl Point {
    /// A point at the given position.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord::new(x, y)))
    }

    /// The empty point.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Whether this point is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self(Some(coord))
    }
}

/// Read a Point payload: an empty flag byte, then one coordinate pair when
/// the flag is clear.
pub(crate) fn read_point(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<Point> {
    ensure_remaining(reader, 1)?;
    match reader.read_u8()? {
        0 => Ok(Point(Some(read_coord(reader)?))),
        1 => Ok(Point::empty()),
        flag => Err(GeometrySerdeError::MalformedEncoding(format!(
            "invalid point empty flag {flag}"
        ))),
    }
}

impl PointTrait for Point {
    type T = f64;
    type CoordType<'a>
        = &'a Coord
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.0.as_ref()
    }
}

impl PointTrait for &Point {
    type T = f64;
    type CoordType<'a>
        = &'a Coord
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.0.as_ref()
    }
}
