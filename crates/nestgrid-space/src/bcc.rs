//! Body-centred cubic (BCC) lattice over a bounded box.
//!
//! Two interleaved cubic sublattices share one mixed-radix addressing:
//! the *corner* sublattice sits at the cubic grid's cell centres, and the
//! *body-centre* sublattice is shifted by half a cell along every axis.
//!
//! # Index Layout
//!
//! `index = (cubic_index << 1) | parity`, where `parity` is 0 for the corner
//! sublattice and 1 for the body-centre sublattice, and `cubic_index` is the
//! mixed-radix index of the cell's integer coordinates. The lattice therefore
//! addresses `2 * product(extents)` cells.
//!
//! # Point Lookup
//!
//! In cell units `s = (point - lower) / width`, corner cell `c` sits at
//! `c + 0.5` and body-centre cell `c` at `c + 1`. With
//! `frac = s - trunc(s) - 0.5`, the squared distance to the nearest
//! body-centre minus that to the nearest corner is `N/4 - sum |frac|`, so a
//! point belongs to the body-centre sublattice iff `sum |frac| > N/4`. Ties
//! go to the corner sublattice.
//!
//! # Neighbourhood
//!
//! In order: the cell itself; the `2N` face neighbours on the same
//! sublattice; the `2^N` nearest neighbours on the opposite sublattice (the
//! BCC coordination shell, 8 in 3-D); and optionally the `4 * C(N, 2)`
//! same-sublattice diagonal ("edge") neighbours. Candidates leaving the
//! grid are dropped.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::lattice::Lattice;

/// Which of the two interleaved cubic sublattices a BCC cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sublattice {
    /// Parity 0: the cubic grid's cell centres.
    Corner,
    /// Parity 1: offset by half a cell width on every axis.
    BodyCenter,
}

impl Sublattice {
    /// Sublattice encoded in the lowest bit of a BCC index.
    pub fn of(index: u64) -> Self {
        if index & 1 == 0 {
            Self::Corner
        } else {
            Self::BodyCenter
        }
    }

    /// The parity bit stored in a BCC index.
    pub fn bit(self) -> u64 {
        match self {
            Self::Corner => 0,
            Self::BodyCenter => 1,
        }
    }

    /// The other sublattice.
    pub fn flip(self) -> Self {
        match self {
            Self::Corner => Self::BodyCenter,
            Self::BodyCenter => Self::Corner,
        }
    }

    /// Integer step toward the adjacent cells of the *other* sublattice.
    ///
    /// Corner `c` touches body-centres `c - {0,1}^N`; body-centre `c`
    /// touches corners `c + {0,1}^N`.
    fn step_to_other(self) -> i64 {
        match self {
            Self::Corner => -1,
            Self::BodyCenter => 1,
        }
    }
}

/// Same-sublattice diagonal offsets applied to an axis pair `(i, j)`.
const EDGE_OFFSETS: [(i64, i64); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// An `N`-dimensional body-centred cubic lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Bcc<const N: usize> {
    config: GridConfig<N>,
    /// `2^N`, the opposite-sublattice shell size.
    corners: usize,
    /// Unfiltered neighbour count without and with edge neighbours.
    max_plain: usize,
    max_with_edges: usize,
}

impl<const N: usize> Bcc<N> {
    /// Create a lattice with `extents` cells per axis over `[lower, upper]`.
    ///
    /// See [`GridConfig::new`] for the validation rules.
    pub fn new(extents: [u64; N], lower: [f64; N], upper: [f64; N]) -> Result<Self, GridError> {
        Self::from_config(GridConfig::new(extents, lower, upper)?)
    }

    /// Create a lattice over the unit box `[0, 1]^N`.
    pub fn unit(extents: [u64; N]) -> Result<Self, GridError> {
        Self::from_config(GridConfig::unit(extents)?)
    }

    /// Wrap an already validated configuration.
    ///
    /// Returns `Err(GridError::SizeOverflow)` if twice the cell count does
    /// not fit in `u64`, or `Err(GridError::DimensionTooLarge)` if the
    /// neighbour counts do not fit in `usize`.
    pub fn from_config(config: GridConfig<N>) -> Result<Self, GridError> {
        if config.radix().len().checked_mul(2).is_none() {
            return Err(GridError::SizeOverflow {
                extents: config.extents().to_vec(),
            });
        }
        let too_large = GridError::DimensionTooLarge { ndim: N };
        let corners = u32::try_from(N)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or_else(|| too_large.clone())?;
        let max_plain = N
            .checked_mul(2)
            .and_then(|faces| faces.checked_add(1))
            .and_then(|n| n.checked_add(corners))
            .ok_or_else(|| too_large.clone())?;
        // 4 * C(N, 2) same-sublattice diagonals.
        let max_with_edges = N
            .checked_mul(N - 1)
            .and_then(|pairs| pairs.checked_mul(2))
            .and_then(|edges| edges.checked_add(max_plain))
            .ok_or(too_large)?;
        Ok(Self {
            config,
            corners,
            max_plain,
            max_with_edges,
        })
    }

    /// Sublattice of a BCC index.
    pub fn sublattice(&self, index: u64) -> Sublattice {
        Sublattice::of(index)
    }

    /// Integer coordinates and sublattice of the lattice point nearest to `point`.
    ///
    /// This is [`locate`](Lattice::locate) before flattening. Coordinates of
    /// out-of-box points are reinterpreted as unsigned and may be huge.
    pub fn locate_coords(&self, point: &[f64; N]) -> ([u64; N], Sublattice) {
        let (coords, sub) = self.classify(point);
        (coords.map(|c| c as u64), sub)
    }

    fn classify(&self, point: &[f64; N]) -> ([i64; N], Sublattice) {
        let scaled = self.config.scaled(point);
        let coords = scaled.map(|s| s as i64);
        let mut corner = coords;
        let mut offset_l1 = 0.0;
        for axis in 0..N {
            let frac = scaled[axis] - coords[axis] as f64 - 0.5;
            if frac < 0.0 {
                corner[axis] = corner[axis].wrapping_sub(1);
            }
            offset_l1 += frac.abs();
        }
        if offset_l1 > 0.25 * N as f64 {
            (corner, Sublattice::BodyCenter)
        } else {
            (coords, Sublattice::Corner)
        }
    }

    fn flatten(&self, coords: &[i64; N], sub: Sublattice) -> u64 {
        (self.config.radix().encode_wrapping(coords) << 1) | sub.bit()
    }

    fn push_if_valid<E: Extend<u64>>(&self, coords: &[i64; N], sub: Sublattice, out: &mut E) {
        if self.config.radix().contains(coords) {
            out.extend(Some(self.flatten(coords, sub)));
        }
    }
}

impl<const N: usize> Lattice<N> for Bcc<N> {
    fn config(&self) -> &GridConfig<N> {
        &self.config
    }

    fn size(&self) -> u64 {
        // from_config guarantees the doubled size fits.
        self.config.radix().len() * 2
    }

    fn cell_center(&self, index: u64) -> Result<[f64; N], GridError> {
        self.check_index(index)?;
        let coords = self.config.radix().decode(index >> 1);
        let mut center = self.config.center_of(&coords);
        if Sublattice::of(index) == Sublattice::BodyCenter {
            let half = self.config.half_width();
            let upper = self.config.upper();
            for axis in 0..N {
                // The last layer lands on `upper`; keep rounding from overshooting it.
                center[axis] = (center[axis] + half[axis]).min(upper[axis]);
            }
        }
        Ok(center)
    }

    fn locate(&self, point: &[f64; N]) -> u64 {
        let (coords, sub) = self.classify(point);
        self.flatten(&coords, sub)
    }

    fn locate_checked(&self, point: &[f64; N]) -> Result<u64, GridError> {
        // Body-centres of the last layer sit exactly on the upper faces.
        self.config.check_point_closed(point)?;
        let (coords, sub) = self.classify(point);
        // Body-centres stop half a cell short of the lower faces.
        self.config.radix().check_coords(&coords)?;
        Ok(self.flatten(&coords, sub))
    }

    fn neighbors<E: Extend<u64>>(&self, index: u64, out: &mut E, want_edges: bool) {
        out.extend(Some(index));
        let sub = Sublattice::of(index);
        let origin = self.config.radix().decode_signed(index >> 1);

        for axis in 0..N {
            for step in [1, -1] {
                let mut cand = origin;
                cand[axis] += step;
                self.push_if_valid(&cand, sub, out);
            }
        }

        let other = sub.flip();
        let step = sub.step_to_other();
        for mask in 0..self.corners {
            let cand: [i64; N] =
                std::array::from_fn(|d| origin[d] + if (mask >> d) & 1 == 1 { step } else { 0 });
            self.push_if_valid(&cand, other, out);
        }

        if want_edges {
            for i in 0..N {
                for j in i + 1..N {
                    for (di, dj) in EDGE_OFFSETS {
                        let mut cand = origin;
                        cand[i] += di;
                        cand[j] += dj;
                        self.push_if_valid(&cand, sub, out);
                    }
                }
            }
        }
    }

    fn max_neighbor_count(&self, want_edges: bool) -> usize {
        if want_edges {
            self.max_with_edges
        } else {
            self.max_plain
        }
    }
}
