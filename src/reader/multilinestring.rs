use std::io::Cursor;

use geo_traits::MultiLineStringTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::linestring::{read_coord_seq, LineString};
use crate::reader::read_count;

/// An owned MultiLineString.
///
/// This implements [MultiLineStringTrait], which you can use to extract data.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    /// Construct from member lines.
    pub fn new(lines: Vec<LineString>) -> Self {
        Self(lines)
    }

    /// Whether this multi line string has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read a MultiLineString payload: a line count, then one coordinate
/// sequence per line.
pub(crate) fn read_multi_line_string(
    reader: &mut Cursor<&[u8]>,
) -> GeometrySerdeResult<MultiLineString> {
    // Each line costs at least its own 4-byte point count.
    let num_lines = read_count(reader, 4)?;
    let mut lines = Vec::with_capacity(num_lines);
    for _ in 0..num_lines {
        lines.push(LineString::new(read_coord_seq(reader)?));
    }
    Ok(MultiLineString(lines))
}

impl MultiLineStringTrait for MultiLineString {
    type T = f64;
    type LineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::LineStringType<'_> {
        &self.0[i]
    }
}

impl MultiLineStringTrait for &MultiLineString {
    type T = f64;
    type LineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::LineStringType<'_> {
        &self.0[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reader::{Coord, Geometry};
    use crate::writer::write_multi_line_string;
    use crate::deserialize;

    #[test]
    fn owned_round_trip() {
        let multi_line = MultiLineString::new(vec![
            LineString::new(vec![Coord::new(0., 1.), Coord::new(2., 3.), Coord::new(4., 5.)]),
            LineString::new(vec![Coord::new(1., 1.), Coord::new(2., 2.)]),
        ]);
        let mut buf = Vec::new();
        write_multi_line_string(&mut buf, &multi_line).unwrap();
        assert_eq!(
            deserialize(&buf).unwrap(),
            Geometry::MultiLineString(multi_line)
        );
    }
}
