//! Encode geometries into the binary wire format.
//!
//! Each `write_*` function emits the kind's one-byte type tag followed by its
//! payload; the `*_size` helpers report the exact byte length of that
//! encoding so callers can pre-size buffers.

mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use coord::{write_coord, COORD_SIZE};
pub use geometry::{geometry_size, write_geometry};
pub use geometrycollection::{geometry_collection_size, write_geometry_collection};
pub use linestring::{line_string_size, write_line_string};
pub use multilinestring::{multi_line_string_size, write_multi_line_string};
pub use multipoint::{multi_point_size, write_multi_point};
pub use multipolygon::{multi_polygon_size, write_multi_polygon};
pub use point::{point_size, write_point};
pub use polygon::{polygon_size, write_polygon};

use geo_traits::Dimensions;

use crate::error::{GeometrySerdeError, GeometrySerdeResult};

/// The wire format carries XY coordinates only.
pub(crate) fn ensure_xy(dim: Dimensions) -> GeometrySerdeResult<()> {
    match dim {
        Dimensions::Xy | Dimensions::Unknown(2) => Ok(()),
        dim => Err(GeometrySerdeError::UnsupportedGeometry(format!(
            "only XY coordinates are supported, got {dim:?}"
        ))),
    }
}
