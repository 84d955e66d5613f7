//! Golden orchestrator
//!
//! Drives one deterministic pass over both branches:
//!
//! ```text
//! fake: LFSR ─▶ generator ─▶ sigmoid ─▶ lut_expand(256) ─▶ discriminator
//!                                   └─▶ lut_expand(784)      (frame view)
//! real: stripe frame(784) ─▶ frame_sampler(256) ─────────▶ discriminator
//! ```
//!
//! [`evaluate`] is pure; [`run`] adds table loading and snapshot writing.

use crate::activation::sigmoid_vector;
use crate::config::{FixedPointConfig, GoldenConfig};
use crate::error::Result;
use crate::fixed::{to_fixed16, Fixed16};
use crate::lfsr::lfsr_sequence;
use crate::resample::{frame_sampler, lut_expand};
use crate::snapshot::{GoldenSnapshot, ScoreRecord};
use crate::weights::GanWeights;
use ganmind_chip::topology::{frame, DISC_INPUT};

/// The synthetic "real" frame: 1.0 on every `STRIPE`-th pixel, 0 elsewhere.
pub fn real_frame_pattern(cfg: &FixedPointConfig) -> Vec<Fixed16> {
    let one = to_fixed16(i64::from(cfg.one()));
    (0..frame::PIXELS)
        .map(|idx| if idx % frame::STRIPE == 0 { one } else { 0 })
        .collect()
}

/// Evaluate both branches for the given weights and seed.
///
/// # Errors
///
/// Returns `InvalidConfig` if `cfg` is out of range, `LengthMismatch` if
/// `seed_count` does not match the generator's input width, or if the
/// generator produces no features.
pub fn evaluate(
    weights: &GanWeights,
    seed: u16,
    seed_count: usize,
    cfg: &FixedPointConfig,
) -> Result<GoldenSnapshot> {
    cfg.validate()?;
    let seed_words = lfsr_sequence(seed, seed_count);
    let gen_features = weights.generator.forward(&seed_words, cfg)?;
    let sigmoid = sigmoid_vector(&gen_features, cfg);
    let fake_disc_vec = lut_expand(&sigmoid, DISC_INPUT)?;
    let fake_frame = lut_expand(&sigmoid, frame::PIXELS)?;

    let real_sample = frame_sampler(&real_frame_pattern(cfg), DISC_INPUT)?;

    let fake = weights.discriminator.score(&fake_disc_vec, cfg)?;
    let real = weights.discriminator.score(&real_sample, cfg)?;
    tracing::info!(
        "fake: score={} decision={} | real: score={} decision={}",
        fake.score,
        fake.decision_word(),
        real.score,
        real.decision_word()
    );

    Ok(GoldenSnapshot {
        seed: seed_words,
        gen_features,
        sigmoid,
        fake_disc_vec,
        fake_frame,
        real_sample,
        scores: ScoreRecord { fake, real },
    })
}

/// Load the tables named by `config`, evaluate, and write every snapshot.
///
/// # Errors
///
/// Returns `InvalidConfig`, `Io`, `Parse` or `LengthMismatch`; snapshots are
/// only written once every stage has been computed. The datapath parameters
/// are checked before any table is read.
pub fn run(config: &GoldenConfig) -> Result<GoldenSnapshot> {
    tracing::info!(
        "Golden run: seed=0x{:04x} count={} hex_dir={}",
        config.seed,
        config.seed_count,
        config.hex_dir.display()
    );

    config.fixed.validate()?;
    let weights = GanWeights::load(&config.hex_dir, &config.manifest)?;
    let snapshot = evaluate(&weights, config.seed, config.seed_count, &config.fixed)?;
    snapshot.write_to(config.out_dir())?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ganmind_chip::stimulus::{LFSR_SEED, SEED_COUNT};

    const Q: FixedPointConfig = FixedPointConfig::Q8_8;

    #[test]
    fn real_frame_stripes() {
        let f = real_frame_pattern(&Q);
        assert_eq!(f.len(), 784);
        assert_eq!(f[0], 256);
        assert_eq!(f[1], 0);
        assert_eq!(f[7], 256);
        assert_eq!(f.iter().filter(|&&v| v == 256).count(), 112);
    }

    #[test]
    fn zero_weights_give_zero_scores() {
        let snap = evaluate(&GanWeights::zeros(256), LFSR_SEED, SEED_COUNT, &Q).unwrap();
        assert_eq!(snap.seed.len(), 64);
        assert_eq!(snap.gen_features, vec![0; 256]);
        assert_eq!(snap.sigmoid, vec![128; 256]);
        assert_eq!(snap.fake_disc_vec, vec![128; 256]);
        assert_eq!(snap.fake_frame, vec![128; 784]);
        assert_eq!(snap.real_sample.len(), 256);
        assert_eq!(snap.scores.words(), [0, 0, 0, 0]);
    }

    #[test]
    fn real_sample_reads_stripe_frame() {
        let snap = evaluate(&GanWeights::zeros(256), LFSR_SEED, SEED_COUNT, &Q).unwrap();
        // Indices 0,3,6,9,...: pixel 0 lit, 3 and 6 dark, 21 lit at output 7.
        assert_eq!(&snap.real_sample[..4], &[256, 0, 0, 0]);
        assert_eq!(snap.real_sample[7], 256);
    }

    #[test]
    fn short_generator_output_expands() {
        let snap = evaluate(&GanWeights::zeros(10), LFSR_SEED, SEED_COUNT, &Q).unwrap();
        assert_eq!(snap.gen_features.len(), 10);
        assert_eq!(snap.fake_disc_vec.len(), 256);
        assert_eq!(snap.fake_frame.len(), 784);
    }

    #[test]
    fn seed_count_must_fit_generator() {
        let err = evaluate(&GanWeights::zeros(256), LFSR_SEED, 32, &Q).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn out_of_range_datapath_is_rejected() {
        let weights = GanWeights::zeros(256);
        for fixed in [
            FixedPointConfig { frac_bits: 0, ..Q },
            FixedPointConfig { frac_bits: 40, ..Q },
            FixedPointConfig { slope_shift: 32, ..Q },
        ] {
            let err = evaluate(&weights, LFSR_SEED, SEED_COUNT, &fixed).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfig, "{fixed:?}");
        }
    }

    #[test]
    fn empty_generator_output_is_rejected() {
        let err = evaluate(&GanWeights::zeros(0), LFSR_SEED, SEED_COUNT, &Q).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }
}
