use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::CoordTrait;

use crate::error::GeometrySerdeResult;

/// The encoded width of one coordinate pair: two little-endian f64s.
pub const COORD_SIZE: usize = 2 * 8;

/// Write a single coordinate pair as two 8-byte little-endian floats.
///
/// The round trip is bit-exact: values pass through unchanged, with no
/// rounding or normalization.
pub fn write_coord<W: Write>(
    writer: &mut W,
    coord: &impl CoordTrait<T = f64>,
) -> GeometrySerdeResult<()> {
    writer.write_f64::<LittleEndian>(coord.x())?;
    writer.write_f64::<LittleEndian>(coord.y())?;
    Ok(())
}
