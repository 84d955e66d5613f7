//! `ganmind`: golden reference generator for the GANMIND serial pipeline.
//!
//! ```text
//! USAGE:
//!   ganmind golden --hex-dir <dir> --out-dir <dir>   Write golden snapshots
//!   ganmind compare <golden-dir> <sim-dir>           Stage-by-stage diff
//!   ganmind lfsr [--seed 0xACE1] [--count 64]        Print the stimulus words
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ganmind_chip::{files, stimulus};
use ganmind_golden::fixed::to_word;
use ganmind_golden::{compare_dirs, golden, lfsr_sequence, FixedPointConfig, GoldenConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganmind", about = "GANMIND fixed-point golden reference", version)]
struct Cli {
    /// Log every stage (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run both branches and write one snapshot per stage.
    Golden {
        /// Directory holding the weight/bias hex images.
        #[arg(long, default_value = "src/layers/hex_data")]
        hex_dir: PathBuf,
        /// Directory the snapshots are written to.
        #[arg(long, default_value = "tb/golden")]
        out_dir: PathBuf,
        /// LFSR seed (hex, e.g. 0xACE1).
        #[arg(long, value_parser = parse_seed, default_value = "0xACE1")]
        seed: u16,
    },
    /// Compare a directory of simulation dumps against golden snapshots.
    Compare {
        /// Golden snapshot directory.
        expected: PathBuf,
        /// Directory under test.
        actual: PathBuf,
    },
    /// Print the LFSR stimulus sequence in snapshot format.
    Lfsr {
        /// LFSR seed (hex, e.g. 0xACE1).
        #[arg(long, value_parser = parse_seed, default_value = "0xACE1")]
        seed: u16,
        /// Number of words.
        #[arg(long, default_value_t = stimulus::SEED_COUNT)]
        count: usize,
    },
}

fn parse_seed(s: &str) -> std::result::Result<u16, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex seed {s:?}: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();

    match cli.command {
        Cmd::Golden { hex_dir, out_dir, seed } => cmd_golden(hex_dir, out_dir, seed)?,
        Cmd::Compare { expected, actual } => cmd_compare(&expected, &actual)?,
        Cmd::Lfsr { seed, count } => cmd_lfsr(seed, count),
    }

    Ok(())
}

fn cmd_golden(hex_dir: PathBuf, out_dir: PathBuf, seed: u16) -> Result<()> {
    let config = GoldenConfig::new(hex_dir, out_dir).with_seed(seed);
    tracing::debug!("{config:?}");
    let snap = golden::run(&config)
        .with_context(|| format!("golden run from {}", config.hex_dir.display()))?;

    let fixed = config.fixed;
    println!("Golden snapshots : {}", config.out_dir().display());
    for name in files::golden::ALL {
        println!("  {name}");
    }
    println!(
        "Fake             : score 0x{:04x} ({:.6})  decision {}",
        to_word(snap.scores.fake.score),
        fixed.to_f64(snap.scores.fake.score),
        snap.scores.fake.decision_word()
    );
    println!(
        "Real             : score 0x{:04x} ({:.6})  decision {}",
        to_word(snap.scores.real.score),
        fixed.to_f64(snap.scores.real.score),
        snap.scores.real.decision_word()
    );
    Ok(())
}

fn cmd_compare(expected: &std::path::Path, actual: &std::path::Path) -> Result<()> {
    let report = compare_dirs(expected, actual, &FixedPointConfig::default())
        .with_context(|| format!("comparing {} against {}", actual.display(), expected.display()))?;

    print!("{report}");
    match report.first_divergence() {
        None => {
            println!("All stages match.");
            Ok(())
        }
        Some(first) => anyhow::bail!(
            "{} differing words; first divergence at stage {}",
            report.total_mismatches(),
            first.stage
        ),
    }
}

fn cmd_lfsr(seed: u16, count: usize) {
    print!("{}", ganmind_golden::hex::format_snapshot(&lfsr_sequence(seed, count)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn seed_accepts_prefixed_and_bare_hex() {
        assert_eq!(parse_seed("0xACE1"), Ok(0xACE1));
        assert_eq!(parse_seed("ace1"), Ok(0xACE1));
        assert!(parse_seed("0x1_0000").is_err());
        assert!(parse_seed("xyz").is_err());
    }

    #[test]
    fn golden_defaults() {
        let cli = Cli::parse_from(["ganmind", "golden"]);
        match cli.command {
            Cmd::Golden { seed, hex_dir, .. } => {
                assert_eq!(seed, stimulus::LFSR_SEED);
                assert_eq!(hex_dir, PathBuf::from("src/layers/hex_data"));
            }
            _ => panic!("expected golden subcommand"),
        }
    }
}
