//! Memory-image file names shared with the RTL testbench.
//!
//! Weight and bias tables are `$readmemh` images produced by the checkpoint
//! exporter. Golden snapshots are written back in the same format for
//! `tb/gan_serial_tb.v` to compare against.

/// Extension of every memory image.
pub const EXTENSION: &str = "hex";

/// Weight/bias tables, as emitted by the checkpoint exporter.
pub mod weights {
    /// Generator layer 1 weights (64 → 256).
    pub const GEN_L1_W: &str = "layer1_gen_weights.hex";
    /// Generator layer 1 biases.
    pub const GEN_L1_B: &str = "layer1_gen_bias.hex";
    /// Generator layer 2 weights (256 → 256).
    pub const GEN_L2_W: &str = "Generator_Layer2_Weights_All.hex";
    /// Generator layer 2 biases.
    pub const GEN_L2_B: &str = "Generator_Layer2_Biases_All.hex";
    /// Generator layer 3 weights (256 → N).
    pub const GEN_L3_W: &str = "Generator_Layer3_Weights_All.hex";
    /// Generator layer 3 biases.
    pub const GEN_L3_B: &str = "Generator_Layer3_Biases_All.hex";
    /// Discriminator layer 1 weights (256 → 128).
    pub const DISC_L1_W: &str = "Discriminator_Layer1_Weights_All.hex";
    /// Discriminator layer 1 biases.
    pub const DISC_L1_B: &str = "Discriminator_Layer1_Biases_All.hex";
    /// Discriminator layer 2 weights (128 → 32).
    pub const DISC_L2_W: &str = "Discriminator_Layer2_Weights_All.hex";
    /// Discriminator layer 2 biases.
    pub const DISC_L2_B: &str = "Discriminator_Layer2_Biases_All.hex";
    /// Discriminator layer 3 weights (32 → 1).
    pub const DISC_L3_W: &str = "Discriminator_Layer3_Weights_All.hex";
    /// Discriminator layer 3 bias.
    pub const DISC_L3_B: &str = "Discriminator_Layer3_Biases_All.hex";
}

/// Golden snapshot images, one per pipeline stage.
pub mod golden {
    /// LFSR seed sequence.
    pub const SEED: &str = "gan_seed.hex";
    /// Generator layer 3 output (pre-activation).
    pub const GEN_FEATURES: &str = "gan_gen_features.hex";
    /// Sigmoid output.
    pub const SIGMOID: &str = "gan_sigmoid.hex";
    /// Fake sample expanded to discriminator width.
    pub const FAKE_DISC_VEC: &str = "gan_fake_disc_vec.hex";
    /// Fake sample expanded to frame width.
    pub const FAKE_FRAME: &str = "gan_fake_frame.hex";
    /// Real pattern sampled to discriminator width.
    pub const REAL_SAMPLE: &str = "gan_real_sample.hex";
    /// Fake score, fake decision, real score, real decision.
    pub const SCORES: &str = "gan_scores.hex";

    /// Every snapshot, in pipeline order.
    pub const ALL: [&str; 7] = [
        SEED,
        GEN_FEATURES,
        SIGMOID,
        FAKE_DISC_VEC,
        FAKE_FRAME,
        REAL_SAMPLE,
        SCORES,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_names_unique() {
        for (i, a) in golden::ALL.iter().enumerate() {
            for b in &golden::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn golden_names_carry_extension() {
        for name in golden::ALL {
            assert!(name.ends_with(EXTENSION), "{name}");
        }
    }
}
