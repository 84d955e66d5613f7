//! Vector resampling between pipeline stages
//!
//! Both strategies only select source elements; nothing is averaged or
//! interpolated.
//!
//! - [`lut_expand`]: nearest-index lookup, `out[k] = src[k·in / out]`.
//! - [`frame_sampler`]: Bresenham-style stride walk that spreads the
//!   `in mod out` remainder evenly across the output.

use crate::error::{GoldenError, Result};
use crate::fixed::Fixed16;

fn ensure_source(context: &str, src: &[Fixed16], out_count: usize) -> Result<()> {
    if src.is_empty() && out_count > 0 {
        return Err(GoldenError::length_mismatch(context, 1, 0));
    }
    Ok(())
}

/// Grow (or shrink) `src` to `out_count` elements by index repetition.
///
/// # Errors
///
/// Returns `LengthMismatch` if `src` is empty and `out_count > 0`.
pub fn lut_expand(src: &[Fixed16], out_count: usize) -> Result<Vec<Fixed16>> {
    ensure_source("lut_expand source", src, out_count)?;
    let in_count = src.len();
    Ok((0..out_count).map(|k| src[k * in_count / out_count]).collect())
}

/// Source indices visited by [`frame_sampler`].
///
/// Starts at 0; each step advances by `in / out`, plus one whenever the
/// accumulated remainder reaches `out`. Indices are clamped to the last
/// element.
pub fn frame_indices(input_count: usize, out_count: usize) -> Vec<usize> {
    if out_count == 0 || input_count == 0 {
        return Vec::new();
    }
    let base_step = input_count / out_count;
    let step_rem = input_count % out_count;
    let last = input_count - 1;

    let mut indices = Vec::with_capacity(out_count);
    let mut src_index = 0usize;
    let mut rem_accum = 0usize;
    for _ in 0..out_count {
        indices.push(src_index);
        let mut next = src_index + base_step;
        if step_rem != 0 {
            rem_accum += step_rem;
            if rem_accum >= out_count {
                rem_accum -= out_count;
                next += 1;
            }
        }
        src_index = next.min(last);
    }
    indices
}

/// Contract `src` to `out_count` elements with an even stride.
///
/// # Errors
///
/// Returns `LengthMismatch` if `src` is empty and `out_count > 0`.
pub fn frame_sampler(src: &[Fixed16], out_count: usize) -> Result<Vec<Fixed16>> {
    ensure_source("frame_sampler source", src, out_count)?;
    Ok(frame_indices(src.len(), out_count)
        .into_iter()
        .map(|i| src[i])
        .collect())
}
