//! Discriminator pipeline
//!
//! Three dense layers, 256 → 128 → 32 → 1. The last layer is a single
//! neuron evaluated inline; its quantized accumulator is the score and the
//! decision is `score > 0`.

use crate::config::FixedPointConfig;
use crate::dense::DenseLayer;
use crate::error::{ensure_len, GoldenError, Result};
use crate::fixed::Fixed16;
use ganmind_chip::topology::DISCRIMINATOR;

/// Score and thresholded decision for one input vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Quantized output of the final neuron
    pub score: Fixed16,
    /// `true` when `score > 0`
    pub decision: bool,
}

impl Verdict {
    /// Verdict for a score.
    pub const fn from_score(score: Fixed16) -> Self {
        Self {
            score,
            decision: score > 0,
        }
    }

    /// Decision as the 0/1 word the hardware emits.
    pub const fn decision_word(&self) -> Fixed16 {
        if self.decision {
            1
        } else {
            0
        }
    }
}

/// Weights of the three discriminator layers, shape-checked.
#[derive(Debug, Clone)]
pub struct Discriminator {
    l1: DenseLayer,
    l2: DenseLayer,
    l3: DenseLayer,
}

impl Discriminator {
    /// Assemble the discriminator, checking every layer against the
    /// 256 → 128 → 32 → 1 topology.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if a layer has the wrong input or output width.
    pub fn new(l1: DenseLayer, l2: DenseLayer, l3: DenseLayer) -> Result<Self> {
        for (i, (layer, shape)) in [&l1, &l2, &l3].into_iter().zip(DISCRIMINATOR).enumerate() {
            let name = format!("discriminator layer {}", i + 1);
            ensure_len(&format!("{name} input"), shape.in_count, layer.in_count())?;
            if let Some(out) = shape.out_count {
                ensure_len(&format!("{name} bias"), out, layer.out_count())?;
            }
        }
        Ok(Self { l1, l2, l3 })
    }

    /// All-zero discriminator.
    pub fn zeros() -> Self {
        let [d1, d2, d3] = DISCRIMINATOR.map(|s| DenseLayer::zeros(s.in_count, s.out_count.unwrap_or(1)));
        Self { l1: d1, l2: d2, l3: d3 }
    }

    /// Score one input vector.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `input` is not 256 words long.
    pub fn score(&self, input: &[Fixed16], cfg: &FixedPointConfig) -> Result<Verdict> {
        let h1 = self.l1.forward(input, cfg)?;
        let h2 = self.l2.forward(&h1, cfg)?;
        let out = self.l3.forward(&h2, cfg)?;
        let score = out
            .first()
            .copied()
            .ok_or_else(|| GoldenError::length_mismatch("discriminator output", 1, 0))?;
        let verdict = Verdict::from_score(score);
        tracing::debug!("discriminator: score={} decision={}", verdict.score, verdict.decision);
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const Q: FixedPointConfig = FixedPointConfig::Q8_8;

    fn with_final_bias(bias: Fixed16) -> Discriminator {
        Discriminator::new(
            DenseLayer::zeros(256, 128),
            DenseLayer::zeros(128, 32),
            DenseLayer::new(vec![0; 32], vec![bias], 32).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn zero_weights_score_zero() {
        let d = Discriminator::zeros();
        let v = d.score(&[300; 256], &Q).unwrap();
        assert_eq!(v, Verdict { score: 0, decision: false });
        assert_eq!(v.decision_word(), 0);
    }

    #[test]
    fn decision_is_strictly_positive_score() {
        assert!(with_final_bias(1).score(&[0; 256], &Q).unwrap().decision);
        assert!(!with_final_bias(0).score(&[0; 256], &Q).unwrap().decision);
        let v = with_final_bias(-45).score(&[0; 256], &Q).unwrap();
        assert_eq!(v.score, -45);
        assert!(!v.decision);
    }

    #[test]
    fn signal_flows_through_all_layers() {
        // D1 neuron 0 copies input[0]; D2 neuron 0 copies h1[0]; D3 copies h2[0].
        let mut w1 = vec![0; 256 * 128];
        w1[0] = 256;
        let mut w2 = vec![0; 128 * 32];
        w2[0] = 256;
        let mut w3 = vec![0; 32];
        w3[0] = 256;
        let d = Discriminator::new(
            DenseLayer::new(w1, vec![0; 128], 256).unwrap(),
            DenseLayer::new(w2, vec![0; 32], 128).unwrap(),
            DenseLayer::new(w3, vec![0], 32).unwrap(),
        )
        .unwrap();
        let mut input = vec![0; 256];
        input[0] = 77;
        assert_eq!(d.score(&input, &Q).unwrap(), Verdict::from_score(77));
        input[0] = -77;
        assert_eq!(d.score(&input, &Q).unwrap(), Verdict::from_score(-77));
    }

    #[test]
    fn rejects_wrong_topology() {
        let err = Discriminator::new(
            DenseLayer::zeros(256, 128),
            DenseLayer::zeros(128, 16),
            DenseLayer::zeros(32, 1),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);

        let err = Discriminator::new(
            DenseLayer::zeros(784, 128),
            DenseLayer::zeros(128, 32),
            DenseLayer::zeros(32, 1),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn rejects_wrong_input_width() {
        let err = Discriminator::zeros().score(&[0; 255], &Q).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }
}
