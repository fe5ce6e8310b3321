//! Decoder
use crate::{
    BYTES_PER_FLOAT24, EXPONENT_BIAS, EXPONENT_MASK, MANTISSA_BITS, MANTISSA_MASK, SIGN_MASK,
    VALUE_MASK,
};

/// Convert a 24-bit packed floating-point number to a double-precision
/// floating-point number.
///
/// Bits above bit 23 are ignored. The conversion is exact and never produces
/// an infinity or NaN.
///
/// # Examples
///
///     use hvif_float24::f24_to_f64;
///     assert_eq!(f24_to_f64(0x400000), 1.0);
///     assert_eq!(f24_to_f64(0x410000), 1.5);
///     assert_eq!(f24_to_f64(0xbc0000), -0.25);
///     assert_eq!(f24_to_f64(0x000000), 2.0f64.powi(-32));
///
#[inline]
pub fn f24_to_f64(x: u32) -> f64 {
    let x = x & VALUE_MASK;
    let sign = ((x & SIGN_MASK) as u64) << (63 - 23);
    let exponent = ((x & EXPONENT_MASK) >> MANTISSA_BITS) as i32 - EXPONENT_BIAS;
    let exponent = ((exponent + 1023) as u64) << 52;
    let mantissa = ((x & MANTISSA_MASK) as u64) << (52 - MANTISSA_BITS);
    <f64>::from_bits(sign | exponent | mantissa)
}

/// Convert a 24-bit packed floating-point number to a single-precision
/// floating-point number.
///
/// The result is exactly `f24_to_f64(x) as f32`; every value fits in `f32`
/// without rounding.
///
/// # Examples
///
///     use hvif_float24::f24_to_f32;
///     assert_eq!(f24_to_f32(0x400000), 1.0);
///     assert_eq!(f24_to_f32(0xc20000), -2.0);
///
#[inline]
pub fn f24_to_f32(x: u32) -> f32 {
    let x = x & VALUE_MASK;
    let sign = (x & SIGN_MASK) << (31 - 23);
    let exponent = ((x & EXPONENT_MASK) >> MANTISSA_BITS) as i32 - EXPONENT_BIAS;
    let exponent = ((exponent + 127) as u32) << 23;
    let mantissa = (x & MANTISSA_MASK) << (23 - MANTISSA_BITS);
    <f32>::from_bits(sign | exponent | mantissa)
}

/// A 24-bit packed floating-point number as stored in HVIF data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Float24(u32);

impl Float24 {
    /// Construct a `Float24` from its raw representation. Bits above bit 23
    /// are discarded.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & VALUE_MASK)
    }

    /// Get the raw representation.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Construct a `Float24` from three bytes, most significant first. This is
    /// the byte order used by HVIF.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; BYTES_PER_FLOAT24]) -> Self {
        Self(<u32>::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    #[inline]
    pub fn to_be_bytes(self) -> [u8; BYTES_PER_FLOAT24] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }

    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Get the unbiased exponent, which is in range `-32..=31`.
    #[inline]
    pub fn exponent(self) -> i32 {
        ((self.0 & EXPONENT_MASK) >> MANTISSA_BITS) as i32 - EXPONENT_BIAS
    }

    /// Get the mantissa field, excluding the implicit leading one.
    #[inline]
    pub fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        f24_to_f64(self.0)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        f24_to_f32(self.0)
    }
}

impl From<Float24> for f64 {
    #[inline]
    fn from(x: Float24) -> Self {
        x.to_f64()
    }
}

impl From<Float24> for f32 {
    #[inline]
    fn from(x: Float24) -> Self {
        x.to_f32()
    }
}
