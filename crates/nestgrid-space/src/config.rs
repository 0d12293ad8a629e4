//! Validated grid configuration shared by the cubic and BCC backends.

use crate::error::GridError;
use crate::radix::MixedRadix;

/// Extents and bounding box of a lattice, with derived cell geometry.
///
/// All fields are computed once in [`GridConfig::new`] and never change.
/// Cells are not stored: every backend derives cell positions from index
/// arithmetic over this configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig<const N: usize> {
    radix: MixedRadix<N>,
    lower: [f64; N],
    upper: [f64; N],
    width: [f64; N],
    half_width: [f64; N],
    lower_cen: [f64; N],
}

impl<const N: usize> GridConfig<N> {
    /// Validate and build a configuration over the box `[lower, upper]`.
    ///
    /// Fails with:
    /// - [`GridError::DimensionTooSmall`] if `N <= 2`,
    /// - [`GridError::EmptyExtent`] if any extent is zero,
    /// - [`GridError::InvalidBounds`] if `upper[i] <= lower[i]` or a bound is not finite,
    /// - [`GridError::SizeOverflow`] if the cell count does not fit in `u64`.
    pub fn new(extents: [u64; N], lower: [f64; N], upper: [f64; N]) -> Result<Self, GridError> {
        if N <= 2 {
            return Err(GridError::DimensionTooSmall { ndim: N });
        }
        let radix = MixedRadix::new(extents)?;
        for axis in 0..N {
            let (lo, hi) = (lower[axis], upper[axis]);
            if !lo.is_finite() || !hi.is_finite() || hi <= lo {
                return Err(GridError::InvalidBounds {
                    axis,
                    lower: lo,
                    upper: hi,
                });
            }
        }

        let width: [f64; N] = std::array::from_fn(|i| (upper[i] - lower[i]) / extents[i] as f64);
        let half_width = width.map(|w| w / 2.0);
        let lower_cen: [f64; N] = std::array::from_fn(|i| lower[i] + half_width[i]);

        tracing::debug!(
            ndim = N,
            extents = ?extents,
            width = ?width,
            cells = radix.len(),
            "grid configuration built"
        );

        Ok(Self {
            radix,
            lower,
            upper,
            width,
            half_width,
            lower_cen,
        })
    }

    /// Configuration over the unit box `[0, 1]^N`.
    pub fn unit(extents: [u64; N]) -> Result<Self, GridError> {
        Self::new(extents, [0.0; N], [1.0; N])
    }

    /// Per-axis cell counts.
    pub fn extents(&self) -> &[u64; N] {
        self.radix.extents()
    }

    /// Lower corner of the bounding box.
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    /// Upper corner of the bounding box.
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Cell width per axis: `(upper - lower) / extents`.
    pub fn width(&self) -> &[f64; N] {
        &self.width
    }

    /// Half the cell width per axis.
    pub fn half_width(&self) -> &[f64; N] {
        &self.half_width
    }

    /// Centre of the cell at integer coordinates `(0, …, 0)`.
    pub fn lower_cen(&self) -> &[f64; N] {
        &self.lower_cen
    }

    /// The mixed-radix addressing over [`extents`](Self::extents).
    pub fn radix(&self) -> &MixedRadix<N> {
        &self.radix
    }

    /// Scale a point into cell units: `(point - lower) / width`.
    pub(crate) fn scaled(&self, point: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| (point[i] - self.lower[i]) / self.width[i])
    }

    /// `lower_cen + width * coords`, the corner-sublattice centre of `coords`.
    pub(crate) fn center_of(&self, coords: &[u64; N]) -> [f64; N] {
        std::array::from_fn(|i| self.lower_cen[i] + self.width[i] * coords[i] as f64)
    }

    /// `true` if every coordinate is finite and inside `[lower, upper)`.
    pub fn contains_point(&self, point: &[f64; N]) -> bool {
        self.check_point(point).is_ok()
    }

    /// Return the first axis on which `point` leaves `[lower, upper)`.
    pub(crate) fn check_point(&self, point: &[f64; N]) -> Result<(), GridError> {
        self.check_point_in(point, false)
    }

    /// Return the first axis on which `point` leaves the closed box `[lower, upper]`.
    pub(crate) fn check_point_closed(&self, point: &[f64; N]) -> Result<(), GridError> {
        self.check_point_in(point, true)
    }

    fn check_point_in(&self, point: &[f64; N], closed: bool) -> Result<(), GridError> {
        for axis in 0..N {
            let value = point[axis];
            let below_upper = if closed {
                value <= self.upper[axis]
            } else {
                value < self.upper[axis]
            };
            // NaN fails every comparison.
            if !(value >= self.lower[axis] && below_upper) {
                return Err(GridError::PointOutOfBounds {
                    axis,
                    value,
                    lower: self.lower[axis],
                    upper: self.upper[axis],
                });
            }
        }
        Ok(())
    }
}
