//! Silicon model for the GANMIND serial generator/discriminator pipeline.
//!
//! This crate has **no dependencies** and **no computation** beyond a few
//! `const fn` helpers. It pins down what the RTL implements: the fixed-point
//! format of every datapath word, the stimulus LFSR, the layer widths of
//! both networks, the synthetic "real" frame, and the names of the hex
//! memory images the testbench reads and writes.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`qformat`] | Q8.8 data word, 32-bit accumulator, sigmoid saturation |
//! | [`stimulus`] | 16-bit LFSR seed, taps and sequence length |
//! | [`topology`] | Generator / discriminator layer widths, frame geometry |
//! | [`files`] | Weight/bias and golden snapshot file names |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod files;
pub mod qformat;
pub mod stimulus;
pub mod topology;
