//! Benchmark profiles and utilities for nestgrid lattices.
//!
//! Provides pre-built lattices and sample sets for benchmarking:
//!
//! - [`reference_bcc`]: 32x32x32 BCC lattice (65K cells) over the unit box
//! - [`reference_cubic`]: 32x32x32 cubic grid (32K cells) over the unit box
//! - [`sample_points`]: deterministic points inside a box via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nestgrid_space::{Bcc, Cubic, GridConfig};

/// Cells per axis of the reference profiles.
pub const REFERENCE_EXTENT: u64 = 32;

fn reference_config() -> GridConfig<3> {
    GridConfig::unit([REFERENCE_EXTENT; 3]).unwrap()
}

/// Build the reference BCC lattice: 32x32x32 cubic cells, two sublattices.
pub fn reference_bcc() -> Bcc<3> {
    Bcc::from_config(reference_config()).unwrap()
}

/// Build the reference cubic grid: 32x32x32 cells.
pub fn reference_cubic() -> Cubic<3> {
    Cubic::from_config(reference_config()).unwrap()
}

/// Generate `n` deterministic points inside `config`'s bounding box.
///
/// Steps a 64-bit LCG from the seed so runs are reproducible.
pub fn sample_points<const N: usize>(config: &GridConfig<N>, n: usize, seed: u64) -> Vec<[f64; N]> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            std::array::from_fn(|axis| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                // Top 53 bits give a uniform value in [0, 1).
                let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
                let (lo, hi) = (config.lower()[axis], config.upper()[axis]);
                lo + unit * (hi - lo)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestgrid_space::Lattice;

    #[test]
    fn reference_profiles_build() {
        assert_eq!(reference_bcc().size(), 2 * 32 * 32 * 32);
        assert_eq!(reference_cubic().size(), 32 * 32 * 32);
    }

    #[test]
    fn sample_points_inside_box() {
        let config = GridConfig::new([4, 4, 4], [-1.0, 0.0, 2.0], [1.0, 0.5, 3.0]).unwrap();
        let points = sample_points(&config, 500, 42);
        assert_eq!(points.len(), 500);
        for p in &points {
            assert!(config.contains_point(p), "{p:?} outside box");
        }
    }

    #[test]
    fn sample_points_deterministic() {
        let config = reference_config();
        assert_eq!(sample_points(&config, 64, 7), sample_points(&config, 64, 7));
        assert_ne!(sample_points(&config, 64, 7), sample_points(&config, 64, 8));
    }
}
