use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use geo_traits::CoordTrait;

use crate::error::GeometrySerdeResult;
use crate::reader::ensure_remaining;
use crate::writer::COORD_SIZE;

/// An owned XY coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    /// The x value.
    pub x: f64,
    /// The y value.
    pub y: f64,
}

impl Coord {
    /// Construct from raw values.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Read one coordinate pair: two 8-byte little-endian floats. Bit-exact
/// inverse of [`crate::writer::write_coord`].
pub(crate) fn read_coord(reader: &mut Cursor<&[u8]>) -> GeometrySerdeResult<Coord> {
    ensure_remaining(reader, COORD_SIZE)?;
    let x = reader.read_f64::<LittleEndian>()?;
    let y = reader.read_f64::<LittleEndian>()?;
    Ok(Coord { x, y })
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("coordinate index {n} out of range"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl CoordTrait for &Coord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("coordinate index {n} out of range"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::writer::write_coord;

    #[test]
    fn round_trip_is_bit_exact() {
        for (x, y) in [(1.5, -2.5), (-2e3, -4e33), (0.1, f64::MIN_POSITIVE)] {
            let mut buf = Vec::new();
            write_coord(&mut buf, &Coord::new(x, y)).unwrap();
            assert_eq!(buf.len(), COORD_SIZE);
            let decoded = read_coord(&mut Cursor::new(buf.as_slice())).unwrap();
            assert_eq!(decoded.x.to_bits(), x.to_bits());
            assert_eq!(decoded.y.to_bits(), y.to_bits());
            assert_relative_eq!(decoded.x, x);
        }
    }

    #[test]
    fn truncated_pair_is_rejected() {
        let mut buf = Vec::new();
        write_coord(&mut buf, &Coord::new(3.0, 4.0)).unwrap();
        buf.truncate(15);
        let err = read_coord(&mut Cursor::new(buf.as_slice())).unwrap_err();
        assert!(matches!(
            err,
            crate::error::GeometrySerdeError::TruncatedInput {
                expected: 16,
                remaining: 15
            }
        ));
    }
}
