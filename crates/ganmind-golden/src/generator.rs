//! Generator network: three dense layers driven by the LFSR seed.

use crate::config::FixedPointConfig;
use crate::dense::DenseLayer;
use crate::error::{ensure_len, Result};
use crate::fixed::Fixed16;
use ganmind_chip::topology::GENERATOR;

/// Generator layers G1..G3, shape-checked.
#[derive(Debug, Clone)]
pub struct Generator {
    layers: [DenseLayer; 3],
}

impl Generator {
    /// Assemble the generator, checking G1 and G2 against their fixed widths
    /// and G3's input against G2's output. G3's output width is free.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if a layer does not fit the topology.
    pub fn new(l1: DenseLayer, l2: DenseLayer, l3: DenseLayer) -> Result<Self> {
        let layers = [l1, l2, l3];
        for (i, (layer, shape)) in layers.iter().zip(GENERATOR).enumerate() {
            let name = format!("generator layer {}", i + 1);
            ensure_len(&format!("{name} input"), shape.in_count, layer.in_count())?;
            if let Some(out) = shape.out_count {
                ensure_len(&format!("{name} bias"), out, layer.out_count())?;
            }
        }
        Ok(Self { layers })
    }

    /// All-zero generator with `out_count` features.
    pub fn zeros(out_count: usize) -> Self {
        let layers = GENERATOR.map(|s| DenseLayer::zeros(s.in_count, s.out_count.unwrap_or(out_count)));
        Self { layers }
    }

    /// Seed words consumed per run.
    pub fn input_width(&self) -> usize {
        self.layers[0].in_count()
    }

    /// Feature vector length.
    pub fn output_width(&self) -> usize {
        self.layers[2].out_count()
    }

    /// Pre-activation features for a seed vector.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `seed` does not match G1's input width.
    pub fn forward(&self, seed: &[Fixed16], cfg: &FixedPointConfig) -> Result<Vec<Fixed16>> {
        let mut x = seed.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            x = layer.forward(&x, cfg)?;
            tracing::debug!("generator layer {}: {} → {}", i + 1, layer.in_count(), x.len());
        }
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const Q: FixedPointConfig = FixedPointConfig::Q8_8;

    #[test]
    fn zero_generator_emits_zero_features() {
        let g = Generator::zeros(256);
        assert_eq!(g.input_width(), 64);
        assert_eq!(g.output_width(), 256);
        let out = g.forward(&[1234; 64], &Q).unwrap();
        assert_eq!(out, vec![0; 256]);
    }

    #[test]
    fn bias_only_generator() {
        let g = Generator::new(
            DenseLayer::zeros(64, 256),
            DenseLayer::zeros(256, 256),
            DenseLayer::new(vec![0; 256 * 3], vec![5, -5, 0], 256).unwrap(),
        )
        .unwrap();
        assert_eq!(g.forward(&[0; 64], &Q).unwrap(), vec![5, -5, 0]);
    }

    #[test]
    fn rejects_misfit_layers() {
        let err = Generator::new(
            DenseLayer::zeros(64, 128),
            DenseLayer::zeros(256, 256),
            DenseLayer::zeros(256, 256),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn rejects_short_seed() {
        let err = Generator::zeros(16).forward(&[0; 63], &Q).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }
}
