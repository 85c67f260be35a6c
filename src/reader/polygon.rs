use std::io::Cursor;

use geo_traits::PolygonTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::linestring::{read_coord_seq, LineString};
use crate::reader::read_count;

/// An owned Polygon.
///
/// Ring 0 is the exterior ring; any further rings are holes, kept in input
/// order. This implements [PolygonTrait], which you can use to extract data.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Vec<LineString>);

impl Polygon {
    /// Construct from rings, exterior first.
    pub fn new(rings: Vec<LineString>) -> Self {
        Self(rings)
    }

    /// Whether this polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.0
    }
}

/// Read a tag-less Polygon payload: a ring count, then one coordinate
/// sequence per ring. MultiPolygon members share this layout.
pub(crate) fn read_polygon_body(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<Polygon> {
    // Each ring costs at least its own 4-byte point count.
    let num_rings = read_count(reader, 4)?;
    let mut rings = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        rings.push(LineString::new(read_coord_seq(reader)?));
    }
    Ok(Polygon(rings))
}

impl PolygonTrait for Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.0.first()
    }

    fn num_interiors(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &self.0[i + 1]
    }
}

impl PolygonTrait for &Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.0.first()
    }

    fn num_interiors(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &self.0[i + 1]
    }
}
