//! Implements the decoder of the 24-bit floating-point numbers used by HVIF
//! (Haiku Vector Icon Format) to store transformation matrices and other
//! geometric values.
//!
//! A value is laid out as follows (bit 23 is the MSB):
//!
//! | Bits   | Field                          |
//! |--------|--------------------------------|
//! | 23     | Sign                           |
//! | 22–17  | Exponent, biased by 32         |
//! | 16–0   | Mantissa (implicit leading 1)  |
//!
//! There are no special encodings. Every bit pattern represents a finite,
//! normalized number; note that this includes zero, which decodes to `2⁻³²`.
//!
//!     use hvif_float24::f24_to_f64;
//!     assert_eq!(f24_to_f64(0x400000), 1.0);
//!     assert_eq!(f24_to_f64(0xc20000), -2.0);
//!
mod dec;
mod read;

pub use self::{
    dec::{f24_to_f32, f24_to_f64, Float24},
    read::{read_affine, read_f24, Truncated, AFFINE_SIZE},
};

/// The sign bit.
pub const SIGN_MASK: u32 = 0x800000;

/// The biased exponent field.
pub const EXPONENT_MASK: u32 = 0x7e0000;

/// The mantissa field.
pub const MANTISSA_MASK: u32 = 0x01ffff;

/// The bits that make up a value. Anything above is ignored by the decoder.
pub const VALUE_MASK: u32 = SIGN_MASK | EXPONENT_MASK | MANTISSA_MASK;

/// The number of bits in the mantissa field, which is also the position of
/// the exponent field.
pub const MANTISSA_BITS: u32 = 17;

/// The value subtracted from the exponent field to get the actual exponent.
pub const EXPONENT_BIAS: i32 = 32;

/// The number of bytes a value occupies in HVIF data.
pub const BYTES_PER_FLOAT24: usize = 3;
