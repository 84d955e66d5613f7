//! Layer widths of the generator and discriminator, and the frame geometry.
//!
//! ## Data path
//!
//! ```text
//! LFSR(64) ─▶ G1(64→256) ─▶ G2(256→256) ─▶ G3(256→N) ─▶ sigmoid
//!                                                         │
//!                    ┌──── lut_expand(256) ◀──────────────┤
//!                    │     lut_expand(784) ◀──────────────┘  (frame view)
//!                    ▼
//!  D1(256→128) ─▶ D2(128→32) ─▶ D3(32→1) ─▶ score, decision
//!                    ▲
//!  real frame(784) ──┘ frame_sampler(256)
//! ```
//!
//! The generator's last layer width `N` is whatever its bias table holds;
//! the RTL build uses 256.

/// Shape of one fully-connected layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseShape {
    /// Input vector length.
    pub in_count: usize,
    /// Output vector length (`None` when fixed by the bias table).
    pub out_count: Option<usize>,
}

impl DenseShape {
    /// Layer with both widths fixed.
    #[must_use]
    pub const fn fixed(in_count: usize, out_count: usize) -> Self {
        Self { in_count, out_count: Some(out_count) }
    }

    /// Layer whose output width follows its bias table.
    #[must_use]
    pub const fn open(in_count: usize) -> Self {
        Self { in_count, out_count: None }
    }

    /// Weight count for a given output width.
    #[must_use]
    pub const fn weight_count(&self, out_count: usize) -> usize {
        self.in_count * out_count
    }
}

/// Generator layers G1..G3.
pub const GENERATOR: [DenseShape; 3] = [
    DenseShape::fixed(64, 256),
    DenseShape::fixed(256, 256),
    DenseShape::open(256),
];

/// Discriminator layers D1..D3.
pub const DISCRIMINATOR: [DenseShape; 3] = [
    DenseShape::fixed(256, 128),
    DenseShape::fixed(128, 32),
    DenseShape::fixed(32, 1),
];

/// Discriminator input width.
pub const DISC_INPUT: usize = DISCRIMINATOR[0].in_count;

/// Frame geometry of the synthetic "real" sample and the fake frame view.
pub mod frame {
    /// Frame width in pixels.
    pub const WIDTH: usize = 28;
    /// Frame height in pixels.
    pub const HEIGHT: usize = 28;
    /// Total pixels.
    pub const PIXELS: usize = WIDTH * HEIGHT;
    /// Every `STRIPE`-th pixel of the real pattern is lit.
    pub const STRIPE: usize = 7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_chain() {
        for pair in DISCRIMINATOR.windows(2) {
            assert_eq!(pair[0].out_count, Some(pair[1].in_count));
        }
        for pair in GENERATOR.windows(2) {
            assert_eq!(pair[0].out_count, Some(pair[1].in_count));
        }
    }

    #[test]
    fn discriminator_ends_in_one_neuron() {
        assert_eq!(DISCRIMINATOR[2].out_count, Some(1));
        assert_eq!(DISC_INPUT, 256);
    }

    #[test]
    fn frame_is_mnist_sized() {
        assert_eq!(frame::PIXELS, 784);
        assert_eq!(DISCRIMINATOR[1].weight_count(32), 4096);
    }
}
