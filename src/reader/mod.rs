//! Decode geometries from the binary wire format.
//!
//! Decoding materializes owned geometry values implementing the
//! [geo_traits] capability interface; nothing aliases the input buffer.
//! Declared counts are validated against the remaining buffer length before
//! any allocation, and collection nesting is depth-limited.

mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use coord::Coord;
pub use geometry::{Geometry, MAX_NESTING_DEPTH};
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

pub(crate) use geometry::read_geometry;

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{GeometrySerdeError, GeometrySerdeResult};

/// Bytes left between the cursor position and the end of the buffer.
pub(crate) fn remaining(reader: &Cursor<&[u8]>) -> usize {
    (reader.get_ref().len() as u64).saturating_sub(reader.position()) as usize
}

/// Fail with [`GeometrySerdeError::TruncatedInput`] unless `needed` more
/// bytes remain.
pub(crate) fn ensure_remaining(reader: &Cursor<&[u8]>, needed: usize) -> GeometrySerdeResult<()> {
    let remaining = remaining(reader);
    if remaining < needed {
        return Err(GeometrySerdeError::TruncatedInput {
            expected: needed,
            remaining,
        });
    }
    Ok(())
}

/// Read a u32 length prefix and check that `count * min_item_size` bytes
/// could still remain, before the caller allocates anything. Guards against
/// unbounded allocation from malformed counts.
pub(crate) fn read_count(
    reader: &mut Cursor<&[u8]>,
    min_item_size: usize,
) -> GeometrySerdeResult<usize> {
    ensure_remaining(reader, 4)?;
    let count = reader.read_u32::<LittleEndian>()? as usize;
    let min_bytes = count.checked_mul(min_item_size).ok_or_else(|| {
        GeometrySerdeError::MalformedEncoding(format!("declared count {count} overflows"))
    })?;
    let remaining = remaining(reader);
    if min_bytes > remaining {
        return Err(GeometrySerdeError::MalformedEncoding(format!(
            "declared count {count} requires at least {min_bytes} bytes, {remaining} remain"
        )));
    }
    Ok(count)
}
