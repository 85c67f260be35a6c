use std::io::Cursor;

use byteorder::ReadBytesExt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeometrySerdeError, GeometrySerdeResult};

/// The geometry kinds supported by this crate.
///
/// Each kind maps to exactly one type tag byte in the wire format. Tag values
/// are stable across versions; new kinds may only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GeometryTypeId {
    /// A Point
    Point = 0,
    /// A MultiPoint
    MultiPoint = 1,
    /// A LineString
    LineString = 2,
    /// A MultiLineString
    MultiLineString = 3,
    /// A Polygon
    Polygon = 4,
    /// A MultiPolygon
    MultiPolygon = 5,
    /// A GeometryCollection
    GeometryCollection = 6,
}

impl GeometryTypeId {
    /// Construct from a byte slice holding an encoded geometry, without
    /// decoding the rest of the buffer.
    pub fn from_buffer(buf: &[u8]) -> GeometrySerdeResult<Self> {
        let mut reader = Cursor::new(buf);
        let tag = reader
            .read_u8()
            .map_err(|_| GeometrySerdeError::TruncatedInput {
                expected: 1,
                remaining: 0,
            })?;
        Self::try_from_primitive(tag).map_err(|_| {
            GeometrySerdeError::MalformedEncoding(format!("unknown geometry type tag {tag}"))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tag_values_are_stable() {
        assert_eq!(u8::from(GeometryTypeId::Point), 0);
        assert_eq!(u8::from(GeometryTypeId::MultiPoint), 1);
        assert_eq!(u8::from(GeometryTypeId::LineString), 2);
        assert_eq!(u8::from(GeometryTypeId::MultiLineString), 3);
        assert_eq!(u8::from(GeometryTypeId::Polygon), 4);
        assert_eq!(u8::from(GeometryTypeId::MultiPolygon), 5);
        assert_eq!(u8::from(GeometryTypeId::GeometryCollection), 6);
    }

    #[test]
    fn from_buffer_rejects_unknown_tag() {
        assert!(matches!(
            GeometryTypeId::from_buffer(&[200]),
            Err(GeometrySerdeError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn from_buffer_rejects_empty() {
        assert!(matches!(
            GeometryTypeId::from_buffer(&[]),
            Err(GeometrySerdeError::TruncatedInput { .. })
        ));
    }
}
