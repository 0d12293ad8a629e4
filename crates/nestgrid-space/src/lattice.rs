//! The core `Lattice` trait shared by the cubic and BCC backends.

use crate::config::GridConfig;
use crate::error::GridError;
use smallvec::SmallVec;

/// Inline capacity of [`Lattice::neighbor_vec`]. Covers a 3-D BCC cell with
/// edge neighbours (`1 + 6 + 8 + 12 = 27`) and the full `3^3` cubic block.
pub const INLINE_NEIGHBORS: usize = 32;

/// Reversible discretisation of an `N`-dimensional box into indexed cells.
///
/// Search trees compose against this trait: they locate a sample, walk to
/// the representative point of a cell, and bound their descent through
/// the neighbouring cells.
///
/// # Thread Safety
///
/// Implementations are immutable after construction and every method is a
/// pure function of its arguments, so a shared `&L` may be queried from
/// any number of threads.
pub trait Lattice<const N: usize>: Send + Sync + 'static {
    /// Number of dimensions.
    fn ndim(&self) -> usize {
        N
    }

    /// The validated configuration this lattice was built from.
    fn config(&self) -> &GridConfig<N>;

    /// Total number of addressable cells. Valid indices are `0..size()`.
    fn size(&self) -> u64;

    /// Representative point (cell centre) of `index`.
    ///
    /// Returns `Err(GridError::IndexOutOfRange)` if `index >= size()`.
    fn cell_center(&self, index: u64) -> Result<[f64; N], GridError>;

    /// Index of the cell whose centre is nearest to `point`.
    ///
    /// Never fails. Points outside the bounding box truncate to
    /// out-of-range coordinates, which alias to a reproducible index
    /// through wrapping arithmetic. Nothing is clamped.
    fn locate(&self, point: &[f64; N]) -> u64;

    /// Strict variant of [`locate`](Self::locate).
    ///
    /// Fails with [`GridError::PointOutOfBounds`] if `point` is outside the
    /// box, or [`GridError::NearestCellOutOfRange`] if the nearest lattice
    /// point is not an addressable cell. On success the result equals
    /// `locate(point)`, and every cell centre maps back to its own index.
    ///
    /// [`Cubic`](crate::Cubic) checks the half-open box `[lower, upper)`;
    /// [`Bcc`](crate::Bcc) checks the closed box `[lower, upper]`, since its
    /// last body-centre layer lies on the upper faces.
    fn locate_checked(&self, point: &[f64; N]) -> Result<u64, GridError>;

    /// Append the indices of the cells adjacent to `index` to `out`.
    ///
    /// Order is deterministic for a fixed input. Candidates outside the
    /// lattice are dropped; duplicates are never removed. `want_edges`
    /// asks for second-shell neighbours where the backend has them.
    fn neighbors<E: Extend<u64>>(&self, index: u64, out: &mut E, want_edges: bool);

    /// Upper bound on how many indices [`neighbors`](Self::neighbors)
    /// appends for a single call, for sizing fixed-capacity buffers.
    fn max_neighbor_count(&self, want_edges: bool) -> usize;

    /// Collect [`neighbors`](Self::neighbors) into an inline buffer.
    fn neighbor_vec(&self, index: u64, want_edges: bool) -> SmallVec<[u64; INLINE_NEIGHBORS]> {
        let mut out = SmallVec::new();
        self.neighbors(index, &mut out, want_edges);
        out
    }

    /// Check `index` against [`size`](Self::size).
    fn check_index(&self, index: u64) -> Result<(), GridError> {
        let size = self.size();
        if index < size {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange { index, size })
        }
    }
}
