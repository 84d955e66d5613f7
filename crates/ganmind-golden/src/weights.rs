//! Weight/bias table loading
//!
//! Reads the twelve `$readmemh` images named by a [`WeightManifest`] and
//! assembles shape-checked [`Generator`] and [`Discriminator`] networks.

use crate::config::WeightManifest;
use crate::dense::DenseLayer;
use crate::discriminator::Discriminator;
use crate::error::{GoldenError, Result};
use crate::generator::Generator;
use crate::hex::read_table;
use ganmind_chip::topology::{DenseShape, DISCRIMINATOR, GENERATOR};
use std::path::Path;

/// Both networks of the GAN, as loaded for one run.
#[derive(Debug, Clone)]
pub struct GanWeights {
    /// Generator G1..G3
    pub generator: Generator,
    /// Discriminator D1..D3
    pub discriminator: Discriminator,
}

impl GanWeights {
    /// Load every table from `hex_dir`.
    ///
    /// # Errors
    ///
    /// Returns `Io` for a missing/unreadable file, `Parse` for a malformed
    /// line, and `LengthMismatch` when a table does not fit the topology.
    pub fn load(hex_dir: &Path, manifest: &WeightManifest) -> Result<Self> {
        tracing::info!("Loading weight tables from {}", hex_dir.display());

        let [g1, g2, g3] = load_layers(hex_dir, manifest.generator(), GENERATOR)?;
        let generator = Generator::new(g1, g2, g3)?;

        let [d1, d2, d3] = load_layers(hex_dir, manifest.discriminator(), DISCRIMINATOR)?;
        let discriminator = Discriminator::new(d1, d2, d3)?;

        tracing::info!(
            "Weights loaded: generator {}→{}, discriminator 256→1",
            generator.input_width(),
            generator.output_width()
        );
        Ok(Self {
            generator,
            discriminator,
        })
    }

    /// All-zero networks with `gen_out` generator features.
    pub fn zeros(gen_out: usize) -> Self {
        Self {
            generator: Generator::zeros(gen_out),
            discriminator: Discriminator::zeros(),
        }
    }
}

fn load_layers(
    hex_dir: &Path,
    files: [(&str, &str); 3],
    shapes: [DenseShape; 3],
) -> Result<[DenseLayer; 3]> {
    let [a, b, c] = files;
    Ok([
        load_layer(hex_dir, a, shapes[0])?,
        load_layer(hex_dir, b, shapes[1])?,
        load_layer(hex_dir, c, shapes[2])?,
    ])
}

fn load_layer(hex_dir: &Path, (weights, bias): (&str, &str), shape: DenseShape) -> Result<DenseLayer> {
    let w = read_table(&hex_dir.join(weights))?;
    let b = read_table(&hex_dir.join(bias))?;
    let expected = shape.weight_count(b.len());
    if w.len() != expected {
        return Err(GoldenError::length_mismatch(weights, expected, w.len()));
    }
    DenseLayer::new(w, b, shape.in_count)
}
