//! Axis-aligned cubic grid over a bounded box.
//!
//! Cells are the `extents[0] × … × extents[N-1]` boxes of width
//! `(upper - lower) / extents`; each cell is represented by its centre.
//! A point maps to the cell containing it by scaling and truncating.
//!
//! # Neighbourhood
//!
//! The full `3^N` block of offsets in `{-1, 0, +1}^N`, including the zero
//! offset, so every cell is its own neighbour. Offsets leaving the grid
//! are dropped.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::lattice::Lattice;

/// A plain `N`-dimensional cubic grid.
///
/// Index layout is mixed-radix with axis 0 fastest: cell `[x, y, z]` of a
/// `w × h × d` grid has index `x + w * (y + h * z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubic<const N: usize> {
    config: GridConfig<N>,
    /// `3^N`, the unfiltered neighbour block size.
    block: usize,
}

impl<const N: usize> Cubic<N> {
    /// Create a grid with `extents` cells per axis over `[lower, upper]`.
    ///
    /// See [`GridConfig::new`] for the validation rules.
    pub fn new(extents: [u64; N], lower: [f64; N], upper: [f64; N]) -> Result<Self, GridError> {
        Self::from_config(GridConfig::new(extents, lower, upper)?)
    }

    /// Create a grid over the unit box `[0, 1]^N`.
    pub fn unit(extents: [u64; N]) -> Result<Self, GridError> {
        Self::from_config(GridConfig::unit(extents)?)
    }

    /// Wrap an already validated configuration.
    ///
    /// Returns `Err(GridError::DimensionTooLarge)` if the `3^N` neighbour
    /// block does not fit in `usize`.
    pub fn from_config(config: GridConfig<N>) -> Result<Self, GridError> {
        let block = u32::try_from(N)
            .ok()
            .and_then(|n| 3usize.checked_pow(n))
            .ok_or(GridError::DimensionTooLarge { ndim: N })?;
        Ok(Self { config, block })
    }

    /// Integer cell coordinates of `point`, truncated toward zero.
    fn cell_coords(&self, point: &[f64; N]) -> [i64; N] {
        self.config.scaled(point).map(|s| s as i64)
    }
}

impl<const N: usize> Lattice<N> for Cubic<N> {
    fn config(&self) -> &GridConfig<N> {
        &self.config
    }

    fn size(&self) -> u64 {
        self.config.radix().len()
    }

    fn cell_center(&self, index: u64) -> Result<[f64; N], GridError> {
        self.check_index(index)?;
        let coords = self.config.radix().decode(index);
        Ok(self.config.center_of(&coords))
    }

    fn locate(&self, point: &[f64; N]) -> u64 {
        self.config.radix().encode_wrapping(&self.cell_coords(point))
    }

    fn locate_checked(&self, point: &[f64; N]) -> Result<u64, GridError> {
        self.config.check_point(point)?;
        let coords = self.cell_coords(point);
        // Rounding can push a point just below `upper` onto `extent`.
        self.config.radix().check_coords(&coords)?;
        Ok(self.config.radix().encode_wrapping(&coords))
    }

    fn neighbors<E: Extend<u64>>(&self, index: u64, out: &mut E, _want_edges: bool) {
        let radix = self.config.radix();
        let origin = radix.decode_signed(index);
        for combo in 0..self.block {
            let mut digits = combo;
            let mut cand = origin;
            for c in cand.iter_mut() {
                *c += (digits % 3) as i64 - 1;
                digits /= 3;
            }
            if radix.contains(&cand) {
                out.extend(Some(radix.encode_wrapping(&cand)));
            }
        }
    }

    fn max_neighbor_count(&self, _want_edges: bool) -> usize {
        self.block
    }
}
