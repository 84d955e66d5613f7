//! Sigmoid approximation
//!
//! Three-branch saturating piecewise-linear curve, bit-identical to the
//! `sigmoid_approx` RTL block. It is not meant to be close to the real
//! logistic function.
//!
//! ```text
//!   s >=  sat  →  1.0
//!   s <= -sat  →  0
//!   otherwise  →  clamp(0, 1.0, 0.5 + (s >> 2))
//! ```

use crate::config::FixedPointConfig;
use crate::fixed::{to_fixed16, Fixed16};

/// Approximate sigmoid of one sample.
pub fn sigmoid_approx(sample: Fixed16, cfg: &FixedPointConfig) -> Fixed16 {
    let s = i32::from(sample);
    if s >= cfg.sat_limit {
        to_fixed16(i64::from(cfg.one()))
    } else if s <= -cfg.sat_limit {
        0
    } else {
        let approx = (cfg.half() + (s >> cfg.slope_shift)).clamp(0, cfg.one());
        to_fixed16(i64::from(approx))
    }
}

/// Approximate sigmoid applied element-wise.
pub fn sigmoid_vector(input: &[Fixed16], cfg: &FixedPointConfig) -> Vec<Fixed16> {
    input.iter().map(|&s| sigmoid_approx(s, cfg)).collect()
}
