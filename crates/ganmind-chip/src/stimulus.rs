//! Stimulus LFSR feeding the generator input.
//!
//! The testbench drives the generator with a 16-bit Fibonacci LFSR. The
//! register emits its current state, then shifts left and inserts the XOR
//! of the tap bits at bit 0.

/// Register width in bits.
pub const LFSR_WIDTH: u32 = 16;

/// Reset value of the LFSR.
pub const LFSR_SEED: u16 = 0xACE1;

/// Feedback taps (bit positions XORed together).
pub const LFSR_TAPS: [u32; 4] = [15, 13, 12, 10];

/// Number of seed words consumed by the generator per run.
pub const SEED_COUNT: usize = 64;

/// Feedback bit for a given register state.
#[must_use]
pub const fn feedback(state: u16) -> u16 {
    let mut bit = 0u16;
    let mut i = 0;
    while i < LFSR_TAPS.len() {
        bit ^= state >> LFSR_TAPS[i];
        i += 1;
    }
    bit & 1
}

/// Register state after one shift.
#[must_use]
pub const fn next_state(state: u16) -> u16 {
    (state << 1) | feedback(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_feedback() {
        // 0xACE1 = 1010_1100_1110_0001: bits 15,13,12,10 = 1,1,0,1
        assert_eq!(feedback(LFSR_SEED), 1);
        assert_eq!(next_state(LFSR_SEED), 0x59C3);
    }

    #[test]
    fn zero_state_is_a_fixed_point() {
        assert_eq!(next_state(0), 0);
    }

    #[test]
    fn seed_count_matches_generator_input() {
        assert_eq!(SEED_COUNT, crate::topology::GENERATOR[0].in_count);
    }
}
