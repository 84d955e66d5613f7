//! Stimulus sequence generator
//!
//! Software twin of the testbench LFSR. The sequence is a pure function of
//! the seed and the count; nothing carries over between calls.

use crate::fixed::{from_word, Fixed16};
use ganmind_chip::stimulus;

/// 16-bit Fibonacci LFSR yielding its state before each shift.
#[derive(Debug, Clone)]
pub struct Lfsr16 {
    state: u16,
}

impl Lfsr16 {
    /// Start a register at `seed`.
    pub const fn new(seed: u16) -> Self {
        Self { state: seed }
    }

    /// Current register contents.
    pub const fn state(&self) -> u16 {
        self.state
    }
}

impl Default for Lfsr16 {
    fn default() -> Self {
        Self::new(stimulus::LFSR_SEED)
    }
}

impl Iterator for Lfsr16 {
    type Item = Fixed16;

    fn next(&mut self) -> Option<Fixed16> {
        let out = from_word(self.state);
        self.state = stimulus::next_state(self.state);
        Some(out)
    }
}

/// First `count` words of the LFSR started at `seed`, as signed data words.
pub fn lfsr_sequence(seed: u16, count: usize) -> Vec<Fixed16> {
    let seq: Vec<Fixed16> = Lfsr16::new(seed).take(count).collect();
    tracing::debug!("LFSR seed=0x{seed:04x}: {} words", seq.len());
    seq
}
