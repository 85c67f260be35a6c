use std::io::Cursor;

use geo_traits::LineStringTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::coord::{read_coord, Coord};
use crate::reader::read_count;
use crate::writer::COORD_SIZE;

/// An owned LineString.
///
/// This implements [LineStringTrait], which you can use to extract data.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString(Vec<Coord>);

impl LineString {
    /// Construct from a coordinate sequence.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    /// Whether this line string has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read a length-prefixed coordinate sequence. The count is validated
/// against the remaining buffer before the sequence is allocated.
pub(crate) fn read_coord_seq(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<Vec<Coord>> {
    let count = read_count(reader, COORD_SIZE)?;
    let mut coords = Vec::with_capacity(count);
    for _ in 0..count {
        coords.push(read_coord(reader)?);
    }
    Ok(coords)
}

/// Read a LineString payload.
pub(crate) fn read_line_string(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<LineString> {
    Ok(LineString(read_coord_seq(reader)?))
}

impl LineStringTrait for LineString {
    type T = f64;
    type CoordType<'a>
        = &'a Coord
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        &self.0[i]
    }
}

impl LineStringTrait for &LineString {
    type T = f64;
    type CoordType<'a>
        = &'a Coord
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        &self.0[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reader::Geometry;
    use crate::writer::write_line_string;
    use crate::{deserialize, serialize};

    #[test]
    fn owned_round_trip() {
        let line = LineString::new(vec![Coord::new(0., 1.), Coord::new(2., 3.)]);
        let mut buf = Vec::new();
        write_line_string(&mut buf, &line).unwrap();
        assert_eq!(deserialize(&buf).unwrap(), Geometry::LineString(line));
    }

    #[test]
    fn overlong_count_is_rejected_before_allocating() {
        let line = LineString::new(vec![Coord::new(0., 1.), Coord::new(2., 3.)]);
        let mut buf = serialize(&Geometry::LineString(line)).unwrap();
        // Claim 0x00ffffff points with only two points of payload behind it.
        buf[1..5].copy_from_slice(&[0xff, 0xff, 0xff, 0x00]);
        assert!(matches!(
            deserialize(&buf),
            Err(crate::error::GeometrySerdeError::MalformedEncoding(_))
        ));
    }
}
