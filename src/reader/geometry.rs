use std::io::Cursor;

use byteorder::ReadBytesExt;
use enum_as_inner::EnumAsInner;
use geo_traits::{GeometryTrait, UnimplementedLine, UnimplementedRect, UnimplementedTriangle};
use num_enum::TryFromPrimitive;

use crate::common::GeometryTypeId;
use crate::error::{GeometrySerdeError, GeometrySerdeResult};
use crate::reader::ensure_remaining;
use crate::reader::geometrycollection::{read_geometry_collection, GeometryCollection};
use crate::reader::linestring::{read_line_string, LineString};
use crate::reader::multilinestring::{read_multi_line_string, MultiLineString};
use crate::reader::multipoint::{read_multi_point, MultiPoint};
use crate::reader::multipolygon::{read_multi_polygon, MultiPolygon};
use crate::reader::point::{read_point, Point};
use crate::reader::polygon::{read_polygon_body, Polygon};

/// The maximum GeometryCollection nesting depth the decoder accepts.
///
/// Decoding is recursive; the limit keeps adversarially deep nesting from
/// overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// An owned geometry of any supported kind.
///
/// This implements [GeometryTrait], which you can use to extract data, and
/// structural equality: equal kind, equal part/ring/point counts, equal
/// coordinate values in order.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    /// Point geometry
    Point(Point),
    /// LineString geometry
    LineString(LineString),
    /// Polygon geometry
    Polygon(Polygon),
    /// MultiPoint geometry
    MultiPoint(MultiPoint),
    /// MultiLineString geometry
    MultiLineString(MultiLineString),
    /// MultiPolygon geometry
    MultiPolygon(MultiPolygon),
    /// GeometryCollection geometry
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The wire type tag for this geometry's kind.
    pub fn type_id(&self) -> GeometryTypeId {
        match self {
            Geometry::Point(_) => GeometryTypeId::Point,
            Geometry::LineString(_) => GeometryTypeId::LineString,
            Geometry::Polygon(_) => GeometryTypeId::Polygon,
            Geometry::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
        }
    }

    /// Whether this geometry is the empty variant of its kind.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }
}

/// Read one complete self-describing geometry (tag + payload) and advance
/// the cursor past exactly the bytes it occupied.
pub(crate) fn read_geometry(
    reader: &mut Cursor<&[u8]>,
    depth: usize,
) -> GeometrySerdeResult<Geometry> {
    if depth > MAX_NESTING_DEPTH {
        return Err(GeometrySerdeError::MaxDepthExceeded(MAX_NESTING_DEPTH));
    }
    ensure_remaining(reader, 1)?;
    let tag = reader.read_u8()?;
    let type_id = GeometryTypeId::try_from_primitive(tag).map_err(|_| {
        GeometrySerdeError::MalformedEncoding(format!("unknown geometry type tag {tag}"))
    })?;
    let geometry = match type_id {
        GeometryTypeId::Point => Geometry::Point(read_point(reader)?),
        GeometryTypeId::MultiPoint => Geometry::MultiPoint(read_multi_point(reader)?),
        GeometryTypeId::LineString => Geometry::LineString(read_line_string(reader)?),
        GeometryTypeId::MultiLineString => {
            Geometry::MultiLineString(read_multi_line_string(reader)?)
        }
        GeometryTypeId::Polygon => Geometry::Polygon(read_polygon_body(reader)?),
        GeometryTypeId::MultiPolygon => Geometry::MultiPolygon(read_multi_polygon(reader)?),
        GeometryTypeId::GeometryCollection => {
            Geometry::GeometryCollection(read_geometry_collection(reader, depth)?)
        }
    };
    Ok(geometry)
}

impl GeometryTrait for Geometry {
    type T = f64;
    type PointType<'b>
        = Point
    where
        Self: 'b;
    type LineStringType<'b>
        = LineString
    where
        Self: 'b;
    type PolygonType<'b>
        = Polygon
    where
        Self: 'b;
    type MultiPointType<'b>
        = MultiPoint
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = MultiLineString
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = MultiPolygon
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = GeometryCollection
    where
        Self: 'b;
    type RectType<'b>
        = UnimplementedRect<f64>
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> geo_traits::GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        match self {
            Geometry::Point(g) => geo_traits::GeometryType::Point(g),
            Geometry::LineString(g) => geo_traits::GeometryType::LineString(g),
            Geometry::Polygon(g) => geo_traits::GeometryType::Polygon(g),
            Geometry::MultiPoint(g) => geo_traits::GeometryType::MultiPoint(g),
            Geometry::MultiLineString(g) => geo_traits::GeometryType::MultiLineString(g),
            Geometry::MultiPolygon(g) => geo_traits::GeometryType::MultiPolygon(g),
            Geometry::GeometryCollection(g) => geo_traits::GeometryType::GeometryCollection(g),
        }
    }
}

impl GeometryTrait for &Geometry {
    type T = f64;
    type PointType<'b>
        = Point
    where
        Self: 'b;
    type LineStringType<'b>
        = LineString
    where
        Self: 'b;
    type PolygonType<'b>
        = Polygon
    where
        Self: 'b;
    type MultiPointType<'b>
        = MultiPoint
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = MultiLineString
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = MultiPolygon
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = GeometryCollection
    where
        Self: 'b;
    type RectType<'b>
        = UnimplementedRect<f64>
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> geo_traits::GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        match self {
            Geometry::Point(g) => geo_traits::GeometryType::Point(g),
            Geometry::LineString(g) => geo_traits::GeometryType::LineString(g),
            Geometry::Polygon(g) => geo_traits::GeometryType::Polygon(g),
            Geometry::MultiPoint(g) => geo_traits::GeometryType::MultiPoint(g),
            Geometry::MultiLineString(g) => geo_traits::GeometryType::MultiLineString(g),
            Geometry::MultiPolygon(g) => geo_traits::GeometryType::MultiPolygon(g),
            Geometry::GeometryCollection(g) => geo_traits::GeometryType::GeometryCollection(g),
        }
    }
}
