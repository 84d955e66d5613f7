//! Golden snapshots
//!
//! One named vector per pipeline stage plus the four-word score record.
//! Stages are a closed enum so the set of artifacts is fixed at compile time.

use crate::discriminator::Verdict;
use crate::error::{GoldenError, Result};
use crate::fixed::Fixed16;
use crate::hex::{read_snapshot, write_snapshot};
use ganmind_chip::files::golden;
use std::fs;
use std::path::Path;

/// Pipeline stage with a golden snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// LFSR seed sequence
    Seed,
    /// Generator output before the sigmoid
    GenFeatures,
    /// Sigmoid output
    Sigmoid,
    /// Fake sample expanded to discriminator width
    FakeDiscVec,
    /// Fake sample expanded to frame width
    FakeFrame,
    /// Real pattern sampled to discriminator width
    RealSample,
    /// Fake score, fake decision, real score, real decision
    Scores,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 7] = [
        Stage::Seed,
        Stage::GenFeatures,
        Stage::Sigmoid,
        Stage::FakeDiscVec,
        Stage::FakeFrame,
        Stage::RealSample,
        Stage::Scores,
    ];

    /// Snapshot file name.
    pub const fn file_name(self) -> &'static str {
        match self {
            Stage::Seed => golden::SEED,
            Stage::GenFeatures => golden::GEN_FEATURES,
            Stage::Sigmoid => golden::SIGMOID,
            Stage::FakeDiscVec => golden::FAKE_DISC_VEC,
            Stage::FakeFrame => golden::FAKE_FRAME,
            Stage::RealSample => golden::REAL_SAMPLE,
            Stage::Scores => golden::SCORES,
        }
    }

    /// Short human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Seed => "seed",
            Stage::GenFeatures => "gen_features",
            Stage::Sigmoid => "sigmoid",
            Stage::FakeDiscVec => "fake_disc_vec",
            Stage::FakeFrame => "fake_frame",
            Stage::RealSample => "real_sample",
            Stage::Scores => "scores",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdicts for the generated and the directly sampled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Verdict on the generated sample
    pub fake: Verdict,
    /// Verdict on the sampled real pattern
    pub real: Verdict,
}

impl ScoreRecord {
    /// The record as written: fake score, fake decision, real score, real decision.
    pub fn words(&self) -> [Fixed16; 4] {
        [
            self.fake.score,
            self.fake.decision_word(),
            self.real.score,
            self.real.decision_word(),
        ]
    }
}

/// Every intermediate vector of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenSnapshot {
    /// LFSR seed sequence
    pub seed: Vec<Fixed16>,
    /// Generator output before the sigmoid
    pub gen_features: Vec<Fixed16>,
    /// Sigmoid output
    pub sigmoid: Vec<Fixed16>,
    /// Fake sample at discriminator width
    pub fake_disc_vec: Vec<Fixed16>,
    /// Fake sample at frame width
    pub fake_frame: Vec<Fixed16>,
    /// Real pattern at discriminator width
    pub real_sample: Vec<Fixed16>,
    /// Both verdicts
    pub scores: ScoreRecord,
}

impl GoldenSnapshot {
    /// Words of one stage as written to disk.
    pub fn stage_words(&self, stage: Stage) -> Vec<Fixed16> {
        match stage {
            Stage::Seed => self.seed.clone(),
            Stage::GenFeatures => self.gen_features.clone(),
            Stage::Sigmoid => self.sigmoid.clone(),
            Stage::FakeDiscVec => self.fake_disc_vec.clone(),
            Stage::FakeFrame => self.fake_frame.clone(),
            Stage::RealSample => self.real_sample.clone(),
            Stage::Scores => self.scores.words().to_vec(),
        }
    }

    /// Write every stage into `dir`, creating it if needed.
    ///
    /// Files are written in pipeline order; a failure part-way leaves the
    /// earlier files in place.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or a file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| GoldenError::io(dir, e))?;
        for stage in Stage::ALL {
            write_snapshot(&dir.join(stage.file_name()), &self.stage_words(stage))?;
        }
        tracing::info!("Wrote {} snapshots to {}", Stage::ALL.len(), dir.display());
        Ok(())
    }
}

/// Read the words of one stage from a snapshot directory.
///
/// # Errors
///
/// Returns `Io` if the file is missing, `Parse` if it is malformed.
pub fn read_stage(dir: &Path, stage: Stage) -> Result<Vec<Fixed16>> {
    read_snapshot(&dir.join(stage.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_file_names_follow_chip_layout() {
        let names: Vec<_> = Stage::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names, golden::ALL.to_vec());
    }

    #[test]
    fn score_record_order() {
        let rec = ScoreRecord {
            fake: Verdict::from_score(-12),
            real: Verdict::from_score(40),
        };
        assert_eq!(rec.words(), [-12, 0, 40, 1]);
    }

    #[test]
    fn stage_labels_display() {
        assert_eq!(Stage::FakeDiscVec.to_string(), "fake_disc_vec");
        assert_eq!(Stage::Scores.label(), "scores");
    }
}
