//! Dense layer evaluator
//!
//! Fixed-point matrix-vector multiply-accumulate, one output neuron at a time.
//!
//! ## Arithmetic per neuron
//!
//! ```text
//! acc  = wrap32(bias[n] << frac)                    // Q8.8 → Q16.16
//! acc  = wrap32(acc + wrap32(x[i] * w[n·in + i]))   // for i in 0..in
//! y[n] = to_fixed16(acc >> frac)                    // Q16.16 → Q8.8
//! ```
//!
//! The bias alignment assumes the Q8.8 × Q8.8 product lands in the same
//! Q16.16 scale as `bias << 8`. That is the documented intent of the RTL
//! but has not been checked against the hardware's actual MAC contract;
//! discriminator outputs measured on the board disagree with this model
//! for the same tables.

use crate::config::FixedPointConfig;
use crate::error::{ensure_len, Result};
use crate::fixed::{mac, Acc32, Fixed16};

/// One fully-connected layer: row-major weights plus one bias per neuron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseLayer {
    weights: Vec<Fixed16>,
    bias: Vec<Fixed16>,
    in_count: usize,
}

impl DenseLayer {
    /// Build a layer, checking `weights.len() == bias.len() × in_count`.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if the matrix is not `out_count × in_count`.
    pub fn new(weights: Vec<Fixed16>, bias: Vec<Fixed16>, in_count: usize) -> Result<Self> {
        ensure_len("dense weight matrix", bias.len() * in_count, weights.len())?;
        Ok(Self {
            weights,
            bias,
            in_count,
        })
    }

    /// All-zero layer of the given shape.
    pub fn zeros(in_count: usize, out_count: usize) -> Self {
        Self {
            weights: vec![0; in_count * out_count],
            bias: vec![0; out_count],
            in_count,
        }
    }

    /// Input width.
    pub fn in_count(&self) -> usize {
        self.in_count
    }

    /// Output width (bias length).
    pub fn out_count(&self) -> usize {
        self.bias.len()
    }

    /// Weight row of neuron `n`, or `None` past the last neuron.
    pub fn row(&self, n: usize) -> Option<&[Fixed16]> {
        if n >= self.out_count() {
            return None;
        }
        self.weights.get(n * self.in_count..(n + 1) * self.in_count)
    }

    /// Bias table.
    pub fn bias(&self) -> &[Fixed16] {
        &self.bias
    }

    /// Evaluate the layer on `input`.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `input.len() != in_count`.
    pub fn forward(&self, input: &[Fixed16], cfg: &FixedPointConfig) -> Result<Vec<Fixed16>> {
        ensure_len("dense input", self.in_count, input.len())?;
        evaluate_rows(input, &self.weights, &self.bias, cfg)
    }
}

/// Accumulator of a single neuron before quantization.
///
/// # Errors
///
/// Returns `LengthMismatch` if `row` and `input` differ in length.
pub fn neuron_acc(input: &[Fixed16], row: &[Fixed16], bias: Fixed16, cfg: &FixedPointConfig) -> Result<Acc32> {
    ensure_len("dense weight row", input.len(), row.len())?;
    Ok(input
        .iter()
        .zip(row)
        .fold(cfg.align(bias), |acc, (&x, &w)| mac(acc, x, w)))
}

/// Quantized output of every neuron; `weights` is already `bias.len() × input.len()`.
fn evaluate_rows(
    input: &[Fixed16],
    weights: &[Fixed16],
    bias: &[Fixed16],
    cfg: &FixedPointConfig,
) -> Result<Vec<Fixed16>> {
    let in_count = input.len();
    bias.iter()
        .enumerate()
        .map(|(n, &b)| {
            let row = &weights[n * in_count..(n + 1) * in_count];
            neuron_acc(input, row, b, cfg).map(|acc| cfg.quantize(acc))
        })
        .collect()
}

/// Evaluate a dense layer given as raw tables.
///
/// `out_count` is `bias.len()`.
///
/// # Errors
///
/// Returns `LengthMismatch` if `weights` is not `bias.len() × input.len()`.
pub fn dense_layer(
    input: &[Fixed16],
    weights: &[Fixed16],
    bias: &[Fixed16],
    cfg: &FixedPointConfig,
) -> Result<Vec<Fixed16>> {
    let in_count = input.len();
    ensure_len("dense weight matrix", bias.len() * in_count, weights.len())?;
    evaluate_rows(input, weights, bias, cfg)
}
