//! Readers for raw float24 fields
use cgmath::Matrix3;
use std::fmt;

use crate::{Float24, BYTES_PER_FLOAT24};

/// The number of values in an affine transformation matrix.
const AFFINE_LEN: usize = 6;

/// The number of bytes an affine transformation matrix occupies in HVIF data.
pub const AFFINE_SIZE: usize = AFFINE_LEN * BYTES_PER_FLOAT24;

/// Returned when the input is too short to contain the requested field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Truncated {
    /// The number of bytes the field occupies.
    pub needed: usize,
    /// The number of bytes that were available.
    pub available: usize,
}

impl fmt::Display for Truncated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unexpected end of data: needed {} bytes, found {}",
            self.needed, self.available
        )
    }
}

impl std::error::Error for Truncated {}

fn check_len(data: &[u8], needed: usize) -> Result<(), Truncated> {
    if data.len() < needed {
        log::debug!(
            "Truncated float24 field ({} bytes needed, {} available)",
            needed,
            data.len()
        );
        Err(Truncated {
            needed,
            available: data.len(),
        })
    } else {
        Ok(())
    }
}

/// Read a big-endian float24 field from the beginning of `data`. Returns the
/// value and the remaining part of `data`.
///
/// # Examples
///
///     use hvif_float24::read_f24;
///     let (x, rest) = read_f24(&[0x41, 0x00, 0x00, 0xff]).unwrap();
///     assert_eq!(x.to_f64(), 1.5);
///     assert_eq!(rest, &[0xff]);
///
pub fn read_f24(data: &[u8]) -> Result<(Float24, &[u8]), Truncated> {
    check_len(data, BYTES_PER_FLOAT24)?;

    let (field, rest) = data.split_at(BYTES_PER_FLOAT24);
    Ok((Float24::from_be_bytes([field[0], field[1], field[2]]), rest))
}

/// Read an affine transformation matrix from the beginning of `data`. Returns
/// the matrix and the remaining part of `data`.
///
/// The matrix is stored as six float24 fields in the order `sx`, `shy`,
/// `shx`, `sy`, `tx`, `ty`. The returned matrix maps a point `[x, y, 1]` to
/// `[sx * x + shx * y + tx, shy * x + sy * y + ty, 1]`.
///
/// Zero cannot be represented exactly, so the elements that are nominally
/// zero in HVIF data come out as `2⁻³²`.
pub fn read_affine(data: &[u8]) -> Result<(Matrix3<f64>, &[u8]), Truncated> {
    check_len(data, AFFINE_SIZE)?;

    let mut values = [0.0; AFFINE_LEN];
    let mut rest = data;
    for value in values.iter_mut() {
        let (x, next) = read_f24(rest)?;
        *value = x.to_f64();
        rest = next;
    }

    let [sx, shy, shx, sy, tx, ty] = values;
    log::trace!(
        "Affine transform: [{}, {}, {}, {}, {}, {}]",
        sx,
        shy,
        shx,
        sy,
        tx,
        ty
    );

    #[rustfmt::skip]
    let m = Matrix3::new(
        sx, shy, 0.0,
        shx, sy, 0.0,
        tx, ty, 1.0,
    );

    Ok((m, rest))
}
