//! Error types for grid construction and lattice queries.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or index/point queries.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The lattice dimension is too small. Neighbour enumeration on the
    /// BCC lattice assumes at least three axes.
    DimensionTooSmall {
        /// The rejected dimension.
        ndim: usize,
    },
    /// Neighbour enumeration over this many dimensions would overflow `usize`.
    DimensionTooLarge {
        /// The rejected dimension.
        ndim: usize,
    },
    /// An axis was configured with zero cells.
    EmptyExtent {
        /// The offending axis.
        axis: usize,
    },
    /// The bounding box is empty or not finite along an axis.
    InvalidBounds {
        /// The offending axis.
        axis: usize,
        /// Lower bound on that axis.
        lower: f64,
        /// Upper bound on that axis.
        upper: f64,
    },
    /// The addressable index space does not fit in a `u64`.
    SizeOverflow {
        /// The requested per-axis extents.
        extents: Vec<u64>,
    },
    /// A cell index is not below the lattice size.
    IndexOutOfRange {
        /// The offending index.
        index: u64,
        /// Total addressable cell count.
        size: u64,
    },
    /// A point lies outside the bounding box (strict lookups only).
    PointOutOfBounds {
        /// First axis found outside the box.
        axis: usize,
        /// The coordinate on that axis.
        value: f64,
        /// Lower bound on that axis.
        lower: f64,
        /// Upper bound on that axis.
        upper: f64,
    },
    /// The nearest lattice point to a point lies outside the addressable
    /// cells (strict lookups only).
    NearestCellOutOfRange {
        /// First axis whose integer coordinate is out of range.
        axis: usize,
        /// The out-of-range integer coordinate.
        coord: i64,
        /// Cell count on that axis.
        extent: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall { ndim } => {
                write!(f, "lattice dimension must be greater than 2, got {ndim}")
            }
            Self::DimensionTooLarge { ndim } => {
                write!(f, "neighbour count for a {ndim}-dimensional lattice overflows usize")
            }
            Self::EmptyExtent { axis } => write!(f, "axis {axis} has zero cells"),
            Self::InvalidBounds { axis, lower, upper } => {
                write!(f, "invalid bounds on axis {axis}: [{lower}, {upper}]")
            }
            Self::SizeOverflow { extents } => {
                write!(f, "lattice with extents {extents:?} exceeds the u64 index space")
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "cell index {index} out of range for lattice of size {size}")
            }
            Self::PointOutOfBounds {
                axis,
                value,
                lower,
                upper,
            } => write!(
                f,
                "point coordinate {value} on axis {axis} outside [{lower}, {upper}]"
            ),
            Self::NearestCellOutOfRange {
                axis,
                coord,
                extent,
            } => write!(
                f,
                "nearest cell coordinate {coord} on axis {axis} outside [0, {extent})"
            ),
        }
    }
}

impl Error for GridError {}
