//! Fixed-point word formats used by the datapath.
//!
//! Every activation, weight and bias travels as a 16-bit two's-complement
//! Q8.8 word. Multiply-accumulate happens in a 32-bit register that wraps
//! on overflow, exactly like the RTL `reg signed [31:0]` accumulators.
//!
//! ```text
//!  15      8 7       0
//! ┌─────────┬─────────┐
//! │ int (s) │  frac   │   Q8.8 data word
//! └─────────┴─────────┘
//!
//!  31              16 15               0
//! ┌──────────────────┬──────────────────┐
//! │      int (s)     │       frac       │   Q16.16 product / accumulator
//! └──────────────────┴──────────────────┘
//! ```

// ── Word widths ──────────────────────────────────────────────────────────────

/// Width of a datapath word in bits.
pub const DATA_WIDTH: u32 = 16;

/// Width of the multiply-accumulate register in bits.
pub const ACC_WIDTH: u32 = 32;

/// Fractional bits of a datapath word (Q8.8).
pub const FRAC_BITS: u32 = 8;

/// Integer bits of a datapath word, sign included.
pub const INT_BITS: u32 = DATA_WIDTH - FRAC_BITS;

// ── Well-known values ────────────────────────────────────────────────────────

/// 1.0 in Q8.8.
pub const ONE: i32 = 1 << FRAC_BITS;

/// 0.5 in Q8.8.
pub const HALF: i32 = 1 << (FRAC_BITS - 1);

// ── Sigmoid approximation ────────────────────────────────────────────────────
// Matches the `sigmoid_approx` RTL block parameters.

/// Input magnitude at which the sigmoid saturates (4.0 in Q8.8).
pub const SIGMOID_SAT_LIMIT: i32 = 1024;

/// Right shift applied to the input inside the linear region (slope 1/4).
pub const SIGMOID_SLOPE_SHIFT: u32 = 2;

/// Largest fractional-bit count the 16/32-bit datapath can represent.
pub const MAX_FRAC_BITS: u32 = DATA_WIDTH - 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q88_layout() {
        assert_eq!(INT_BITS + FRAC_BITS, DATA_WIDTH);
        assert_eq!(ONE, 256);
        assert_eq!(HALF, 128);
    }

    #[test]
    fn products_fit_the_accumulator() {
        // Q8.8 × Q8.8 lands in Q16.16, the full accumulator width.
        assert_eq!(2 * DATA_WIDTH, ACC_WIDTH);
    }

    #[test]
    fn sigmoid_linear_region_needs_clamp() {
        // The 1/4 slope overshoots [0, 1.0] before the saturation limit,
        // so the clamp inside the linear branch is load-bearing.
        assert!(HALF + (SIGMOID_SAT_LIMIT >> SIGMOID_SLOPE_SHIFT) > ONE);
        assert!(HALF + ((-SIGMOID_SAT_LIMIT) >> SIGMOID_SLOPE_SHIFT) < 0);
    }
}
