//! Bit-exact golden reference for the GANMIND serial pipeline
//!
//! This crate reproduces, in integer arithmetic, every stage the RTL
//! computes: LFSR stimulus, the generator's three dense layers, the sigmoid
//! approximation, both resamplers and the discriminator. The intermediate
//! vectors are written as `$readmemh` images so the testbench can compare
//! simulation output stage by stage.
//!
//! # Pipeline
//!
//! ```text
//! LFSR ─▶ G1 ─▶ G2 ─▶ G3 ─▶ sigmoid ─┬─▶ lut_expand(256) ─▶ D1 ─▶ D2 ─▶ D3 ─▶ fake verdict
//!                                    └─▶ lut_expand(784)
//! stripe frame(784) ─▶ frame_sampler(256) ─▶ D1 ─▶ D2 ─▶ D3 ─▶ real verdict
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ganmind_golden::{golden, GoldenConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GoldenConfig::new("src/layers/hex_data", "tb/golden");
//! let snapshot = golden::run(&config)?;
//!
//! println!("fake score: {}", snapshot.scores.fake.score);
//! println!("real score: {}", snapshot.scores.real.score);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod activation;
pub mod compare;
mod config;
pub mod dense;
pub mod discriminator;
mod error;
pub mod fixed;
pub mod generator;
pub mod golden;
pub mod hex;
pub mod lfsr;
pub mod resample;
pub mod snapshot;
mod weights;

pub use compare::{compare_dirs, CompareReport, StageDiff};
pub use config::{FixedPointConfig, GoldenConfig, WeightManifest};
pub use dense::{dense_layer, DenseLayer};
pub use discriminator::{Discriminator, Verdict};
pub use error::{ErrorKind, GoldenError, Result};
pub use fixed::{to_fixed16, wrap_accumulator, Acc32, Fixed16};
pub use generator::Generator;
pub use lfsr::{lfsr_sequence, Lfsr16};
pub use resample::{frame_sampler, lut_expand};
pub use snapshot::{GoldenSnapshot, ScoreRecord, Stage};
pub use weights::GanWeights;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        FixedPointConfig, GanWeights, GoldenConfig, GoldenError, GoldenSnapshot, Result, Stage,
        Verdict,
    };
}
