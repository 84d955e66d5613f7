//! Stage-by-stage snapshot comparison
//!
//! Compares a directory of simulation dumps against the golden snapshots,
//! one [`Stage`] at a time, so a divergence can be pinned to the first stage
//! where it appears.

use crate::config::FixedPointConfig;
use crate::error::Result;
use crate::fixed::{to_word, Fixed16};
use crate::snapshot::{read_stage, Stage};
use std::fmt;
use std::path::Path;

/// Mismatches kept per stage for reporting.
const MAX_REPORTED: usize = 8;

/// One differing word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Word index within the stage
    pub index: usize,
    /// Golden value
    pub expected: Fixed16,
    /// Value under test
    pub actual: Fixed16,
}

/// Comparison result of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDiff {
    /// Stage compared
    pub stage: Stage,
    /// Golden vector length
    pub expected_len: usize,
    /// Vector-under-test length
    pub actual_len: usize,
    /// Number of differing words over the common prefix
    pub mismatch_count: usize,
    /// First few mismatches, in index order
    pub mismatches: Vec<Mismatch>,
}

impl StageDiff {
    /// True when lengths and every word agree.
    pub fn is_match(&self) -> bool {
        self.expected_len == self.actual_len && self.mismatch_count == 0
    }

    /// First differing word, if any.
    pub fn first(&self) -> Option<&Mismatch> {
        self.mismatches.first()
    }
}

/// Compare two vectors of one stage.
pub fn compare_vectors(stage: Stage, expected: &[Fixed16], actual: &[Fixed16]) -> StageDiff {
    let mut mismatch_count = 0;
    let mut mismatches = Vec::new();
    for (index, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            mismatch_count += 1;
            if mismatches.len() < MAX_REPORTED {
                mismatches.push(Mismatch {
                    index,
                    expected: e,
                    actual: a,
                });
            }
        }
    }
    StageDiff {
        stage,
        expected_len: expected.len(),
        actual_len: actual.len(),
        mismatch_count,
        mismatches,
    }
}

/// Result of comparing every stage.
#[derive(Debug, Clone)]
pub struct CompareReport {
    /// One entry per stage, in pipeline order
    pub stages: Vec<StageDiff>,
    fixed: FixedPointConfig,
}

impl CompareReport {
    /// True when every stage matches.
    pub fn is_match(&self) -> bool {
        self.stages.iter().all(StageDiff::is_match)
    }

    /// Earliest stage that differs.
    pub fn first_divergence(&self) -> Option<&StageDiff> {
        self.stages.iter().find(|d| !d.is_match())
    }

    /// Differing words across all stages.
    pub fn total_mismatches(&self) -> usize {
        self.stages.iter().map(|d| d.mismatch_count).sum()
    }
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diff in &self.stages {
            let status = if diff.is_match() { "ok" } else { "MISMATCH" };
            writeln!(
                f,
                "{:<14} {:>4} words  {:<8} ({} differing)",
                diff.stage.label(),
                diff.expected_len,
                status,
                diff.mismatch_count
            )?;
            if diff.expected_len != diff.actual_len {
                writeln!(f, "    length: expected {}, got {}", diff.expected_len, diff.actual_len)?;
            }
            for m in &diff.mismatches {
                writeln!(
                    f,
                    "    [{:4}] expected 0x{:04x} ({:>11.6}) | actual 0x{:04x} ({:>11.6})",
                    m.index,
                    to_word(m.expected),
                    self.fixed.to_f64(m.expected),
                    to_word(m.actual),
                    self.fixed.to_f64(m.actual)
                )?;
            }
        }
        Ok(())
    }
}

/// Compare every stage of two snapshot directories.
///
/// # Errors
///
/// Returns `Io` if a snapshot file is missing on either side, `Parse` if one
/// is malformed.
pub fn compare_dirs(expected: &Path, actual: &Path, fixed: &FixedPointConfig) -> Result<CompareReport> {
    let mut stages = Vec::with_capacity(Stage::ALL.len());
    for stage in Stage::ALL {
        let e = read_stage(expected, stage)?;
        let a = read_stage(actual, stage)?;
        let diff = compare_vectors(stage, &e, &a);
        if !diff.is_match() {
            tracing::warn!(
                "{stage}: {} differing words, lengths {} vs {}",
                diff.mismatch_count,
                diff.expected_len,
                diff.actual_len
            );
        }
        stages.push(diff);
    }
    Ok(CompareReport {
        stages,
        fixed: *fixed,
    })
}
