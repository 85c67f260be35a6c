use std::io::Write;

use geo_traits::{GeometryTrait, GeometryType};

use crate::error::{GeometrySerdeError, GeometrySerdeResult};
use crate::writer::{
    geometry_collection_size, line_string_size, multi_line_string_size, multi_point_size,
    multi_polygon_size, point_size, polygon_size, write_geometry_collection, write_line_string,
    write_multi_line_string, write_multi_point, write_multi_polygon, write_point, write_polygon,
};

/// The byte length of an encoded Geometry.
///
/// Kinds outside the supported set contribute zero; [`write_geometry`]
/// rejects them, so the value is only ever used as a capacity hint for
/// buffers that never get written.
pub fn geometry_size(geom: &impl GeometryTrait) -> usize {
    use GeometryType::*;
    match geom.as_type() {
        Point(g) => point_size(g),
        LineString(g) => line_string_size(g),
        Polygon(g) => polygon_size(g),
        MultiPoint(g) => multi_point_size(g),
        MultiLineString(g) => multi_line_string_size(g),
        MultiPolygon(g) => multi_polygon_size(g),
        GeometryCollection(g) => geometry_collection_size(g),
        Rect(_) | Triangle(_) | Line(_) => 0,
    }
}

/// Write a Geometry, dispatching on its runtime kind.
///
/// The kind set is closed; runtime kinds outside it fail with
/// [`GeometrySerdeError::UnsupportedGeometry`] rather than silently dropping
/// data.
pub fn write_geometry<W: Write>(
    writer: &mut W,
    geom: &impl GeometryTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    use GeometryType::*;
    match geom.as_type() {
        Point(g) => write_point(writer, g),
        LineString(g) => write_line_string(writer, g),
        Polygon(g) => write_polygon(writer, g),
        MultiPoint(g) => write_multi_point(writer, g),
        MultiLineString(g) => write_multi_line_string(writer, g),
        MultiPolygon(g) => write_multi_polygon(writer, g),
        GeometryCollection(g) => write_geometry_collection(writer, g),
        Rect(_) => Err(GeometrySerdeError::UnsupportedGeometry(
            "Rect has no type tag in the wire format".to_string(),
        )),
        Triangle(_) => Err(GeometrySerdeError::UnsupportedGeometry(
            "Triangle has no type tag in the wire format".to_string(),
        )),
        Line(_) => Err(GeometrySerdeError::UnsupportedGeometry(
            "Line has no type tag in the wire format".to_string(),
        )),
    }
}
