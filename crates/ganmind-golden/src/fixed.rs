//! Fixed-point arithmetic unit
//!
//! Integer primitives that behave like the RTL registers: the accumulator
//! wraps modulo 2^32, data words wrap modulo 2^16, and the only place
//! fractional precision is dropped is [`FixedPointConfig::quantize`].

use crate::config::FixedPointConfig;

/// Q8.8 data word (activations, weights, biases)
pub type Fixed16 = i16;

/// Multiply-accumulate register
pub type Acc32 = i32;

/// Reduce any integer to a signed 32-bit two's-complement value.
///
/// Masks to 32 bits and reinterprets bit 31 as the sign.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn wrap_accumulator(value: i64) -> Acc32 {
    value as i32
}

/// Reduce any integer to a signed 16-bit two's-complement value.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn to_fixed16(value: i64) -> Fixed16 {
    value as i16
}

/// Reinterpret a raw 16-bit memory word as a data word.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn from_word(word: u16) -> Fixed16 {
    word as i16
}

/// Raw 16-bit memory word of a data word.
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn to_word(value: Fixed16) -> u16 {
    value as u16
}

impl FixedPointConfig {
    /// Drop the fractional bits of a product-scale accumulator.
    ///
    /// Arithmetic shift right by `frac_bits` (floor toward negative infinity,
    /// never rounds), then narrow with [`to_fixed16`].
    #[inline]
    pub const fn quantize(&self, acc: Acc32) -> Fixed16 {
        to_fixed16((acc >> self.frac_bits) as i64)
    }

    /// Align a data word with the product scale of the accumulator.
    #[inline]
    pub const fn align(&self, value: Fixed16) -> Acc32 {
        wrap_accumulator((value as i64) << self.frac_bits)
    }

    /// Real value of a data word, for reports.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self, value: Fixed16) -> f64 {
        f64::from(value) / f64::from(self.one())
    }

    /// Nearest data word to a real value, wrapped to 16 bits the way the
    /// checkpoint exporter does it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(&self, value: f64) -> Fixed16 {
        to_fixed16((value * f64::from(self.one())).round() as i64)
    }
}

/// One multiply-accumulate step: `wrap(acc + wrap(a * b))`.
#[inline]
pub const fn mac(acc: Acc32, a: Fixed16, b: Fixed16) -> Acc32 {
    let product = wrap_accumulator(a as i64 * b as i64);
    wrap_accumulator(acc as i64 + product as i64)
}
