//! Run configuration
//!
//! [`FixedPointConfig`] groups the numeric constants every stage needs and is
//! passed by reference through the pipeline. [`WeightManifest`] names the
//! twelve weight/bias images, and [`GoldenConfig`] ties a run together.

use crate::error::{GoldenError, Result};
use ganmind_chip::{files, qformat, stimulus};
use std::path::{Path, PathBuf};

/// Numeric parameters of the fixed-point datapath
///
/// Built with [`FixedPointConfig::new`] or taken from [`FixedPointConfig::Q8_8`],
/// so every value outside this crate has passed [`FixedPointConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPointConfig {
    /// Fractional bits of a data word
    pub(crate) frac_bits: u32,

    /// Input magnitude at which the sigmoid saturates
    pub(crate) sat_limit: i32,

    /// Right shift giving the sigmoid's linear-region slope
    pub(crate) slope_shift: u32,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self::Q8_8
    }
}

impl FixedPointConfig {
    /// The hardware's Q8.8 datapath
    pub const Q8_8: Self = Self {
        frac_bits: qformat::FRAC_BITS,
        sat_limit: qformat::SIGMOID_SAT_LIMIT,
        slope_shift: qformat::SIGMOID_SLOPE_SHIFT,
    };

    /// Build a validated datapath description.
    ///
    /// # Errors
    ///
    /// Returns [`GoldenError::InvalidConfig`] under the same conditions as
    /// [`FixedPointConfig::validate`].
    pub fn new(frac_bits: u32, sat_limit: i32, slope_shift: u32) -> Result<Self> {
        let cfg = Self {
            frac_bits,
            sat_limit,
            slope_shift,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fractional bits of a data word
    pub const fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// Input magnitude at which the sigmoid saturates
    pub const fn sat_limit(&self) -> i32 {
        self.sat_limit
    }

    /// Right shift of the sigmoid's linear region
    pub const fn slope_shift(&self) -> u32 {
        self.slope_shift
    }

    /// Check the parameters fit a 16-bit word and 32-bit accumulator
    ///
    /// # Errors
    ///
    /// Returns [`GoldenError::InvalidConfig`] when `frac_bits` is 0 or leaves
    /// no integer bits, when the saturation limit is not positive, or when the
    /// slope shift is wider than a data word.
    pub fn validate(&self) -> Result<()> {
        if self.frac_bits == 0 || self.frac_bits > qformat::MAX_FRAC_BITS {
            return Err(GoldenError::invalid_config(format!(
                "frac_bits {} outside 1..={}",
                self.frac_bits,
                qformat::MAX_FRAC_BITS
            )));
        }
        if self.sat_limit <= 0 {
            return Err(GoldenError::invalid_config(format!(
                "sat_limit {} must be positive",
                self.sat_limit
            )));
        }
        if self.slope_shift >= qformat::DATA_WIDTH {
            return Err(GoldenError::invalid_config(format!(
                "slope_shift {} must be below {}",
                self.slope_shift,
                qformat::DATA_WIDTH
            )));
        }
        Ok(())
    }

    /// 1.0 in this format
    pub const fn one(&self) -> i32 {
        1 << self.frac_bits
    }

    /// 0.5 in this format
    pub const fn half(&self) -> i32 {
        1 << (self.frac_bits - 1)
    }
}

/// File name of every weight/bias image, relative to the hex directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightManifest {
    /// Generator layer 1 weights (256 × 64)
    pub gen_l1_w: String,
    /// Generator layer 1 biases
    pub gen_l1_b: String,
    /// Generator layer 2 weights (256 × 256)
    pub gen_l2_w: String,
    /// Generator layer 2 biases
    pub gen_l2_b: String,
    /// Generator layer 3 weights (out × 256)
    pub gen_l3_w: String,
    /// Generator layer 3 biases, whose length sets the output width
    pub gen_l3_b: String,
    /// Discriminator layer 1 weights (128 × 256)
    pub disc_l1_w: String,
    /// Discriminator layer 1 biases
    pub disc_l1_b: String,
    /// Discriminator layer 2 weights (32 × 128)
    pub disc_l2_w: String,
    /// Discriminator layer 2 biases
    pub disc_l2_b: String,
    /// Discriminator layer 3 weights (1 × 32)
    pub disc_l3_w: String,
    /// Discriminator layer 3 bias
    pub disc_l3_b: String,
}

impl Default for WeightManifest {
    fn default() -> Self {
        use files::weights as w;
        Self {
            gen_l1_w: w::GEN_L1_W.to_string(),
            gen_l1_b: w::GEN_L1_B.to_string(),
            gen_l2_w: w::GEN_L2_W.to_string(),
            gen_l2_b: w::GEN_L2_B.to_string(),
            gen_l3_w: w::GEN_L3_W.to_string(),
            gen_l3_b: w::GEN_L3_B.to_string(),
            disc_l1_w: w::DISC_L1_W.to_string(),
            disc_l1_b: w::DISC_L1_B.to_string(),
            disc_l2_w: w::DISC_L2_W.to_string(),
            disc_l2_b: w::DISC_L2_B.to_string(),
            disc_l3_w: w::DISC_L3_W.to_string(),
            disc_l3_b: w::DISC_L3_B.to_string(),
        }
    }
}

impl WeightManifest {
    /// `(weights, bias)` file pairs for the generator layers, in order
    pub fn generator(&self) -> [(&str, &str); 3] {
        [
            (self.gen_l1_w.as_str(), self.gen_l1_b.as_str()),
            (self.gen_l2_w.as_str(), self.gen_l2_b.as_str()),
            (self.gen_l3_w.as_str(), self.gen_l3_b.as_str()),
        ]
    }

    /// `(weights, bias)` file pairs for the discriminator layers, in order
    pub fn discriminator(&self) -> [(&str, &str); 3] {
        [
            (self.disc_l1_w.as_str(), self.disc_l1_b.as_str()),
            (self.disc_l2_w.as_str(), self.disc_l2_b.as_str()),
            (self.disc_l3_w.as_str(), self.disc_l3_b.as_str()),
        ]
    }

    /// Every file name, generator first
    pub fn all(&self) -> Vec<&str> {
        self.generator()
            .into_iter()
            .chain(self.discriminator())
            .flat_map(|(w, b)| [w, b])
            .collect()
    }
}

/// Configuration of one golden reference run
#[derive(Debug, Clone)]
pub struct GoldenConfig {
    /// Directory holding the weight/bias images
    pub hex_dir: PathBuf,

    /// Directory the snapshots are written to
    pub out_dir: PathBuf,

    /// LFSR reset value
    pub seed: u16,

    /// Number of seed words fed to the generator
    pub seed_count: usize,

    /// Datapath parameters
    pub fixed: FixedPointConfig,

    /// Weight/bias file names
    pub manifest: WeightManifest,
}

impl GoldenConfig {
    /// Configuration matching the hardware testbench
    pub fn new(hex_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            hex_dir: hex_dir.into(),
            out_dir: out_dir.into(),
            seed: stimulus::LFSR_SEED,
            seed_count: stimulus::SEED_COUNT,
            fixed: FixedPointConfig::default(),
            manifest: WeightManifest::default(),
        }
    }

    /// Override the LFSR seed
    #[must_use]
    pub fn with_seed(mut self, seed: u16) -> Self {
        self.seed = seed;
        self
    }

    /// Override the datapath parameters
    #[must_use]
    pub fn with_fixed_point(mut self, fixed: FixedPointConfig) -> Self {
        self.fixed = fixed;
        self
    }

    /// Override the weight file names
    #[must_use]
    pub fn with_manifest(mut self, manifest: WeightManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Path of a weight/bias image
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.hex_dir.join(name)
    }

    /// Output directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_q8_8() {
        let cfg = FixedPointConfig::default();
        assert_eq!(cfg.one(), 256);
        assert_eq!(cfg.half(), 128);
        assert_eq!(cfg.sat_limit, 1024);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_formats() {
        let zero = FixedPointConfig { frac_bits: 0, ..FixedPointConfig::Q8_8 };
        assert!(zero.validate().is_err());

        let wide = FixedPointConfig { frac_bits: 16, ..FixedPointConfig::Q8_8 };
        assert!(wide.validate().is_err());

        let sat = FixedPointConfig { sat_limit: 0, ..FixedPointConfig::Q8_8 };
        assert!(sat.validate().is_err());
    }

    #[test]
    fn constructor_validates() {
        let q = FixedPointConfig::new(8, 1024, 2).unwrap();
        assert_eq!(q, FixedPointConfig::Q8_8);
        assert_eq!((q.frac_bits(), q.sat_limit(), q.slope_shift()), (8, 1024, 2));

        for (frac, sat, slope) in [(0, 1024, 2), (40, 1024, 2), (8, -1, 2), (8, 1024, 16)] {
            let err = FixedPointConfig::new(frac, sat, slope).unwrap_err();
            assert_eq!(err.kind(), crate::error::ErrorKind::InvalidConfig);
        }
    }

    #[test]
    fn manifest_lists_twelve_tables() {
        let m = WeightManifest::default();
        let all = m.all();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], files::weights::GEN_L1_W);
        assert_eq!(all[11], files::weights::DISC_L3_B);
    }

    #[test]
    fn golden_config_builder() {
        let cfg = GoldenConfig::new("hex", "out").with_seed(0x1234);
        assert_eq!(cfg.seed, 0x1234);
        assert_eq!(cfg.seed_count, 64);
        assert_eq!(cfg.table_path("a.hex"), PathBuf::from("hex").join("a.hex"));
        assert_eq!(cfg.out_dir(), Path::new("out"));
    }
}
