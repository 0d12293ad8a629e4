//! Reversible lattice discretisation for hierarchical nearest-neighbour search.
//!
//! This crate maps continuous `N`-dimensional points to compact integer
//! cell indices and back, and enumerates the neighbouring cells of an index.
//! It is the indexing primitive beneath search trees over rotations,
//! translations, and other continuous parameter spaces.
//!
//! # Backends
//!
//! - [`Cubic`]: axis-aligned grid; neighbours are the full `3^N` block
//! - [`Bcc`]: body-centred cubic lattice of two interleaved [`Sublattice`]s
//!
//! Both implement the [`Lattice`] trait and share [`MixedRadix`]
//! addressing over a validated [`GridConfig`].
//!
//! # Example
//!
//! ```
//! use nestgrid_space::{Bcc, Lattice, Sublattice};
//!
//! let bcc = Bcc::unit([4, 4, 4]).unwrap();
//! assert_eq!(bcc.size(), 128);
//!
//! let index = bcc.locate(&[0.25, 0.25, 0.25]);
//! assert_eq!(bcc.sublattice(index), Sublattice::BodyCenter);
//! assert_eq!(bcc.cell_center(index).unwrap(), [0.25, 0.25, 0.25]);
//!
//! let mut near = Vec::new();
//! bcc.neighbors(index, &mut near, false);
//! assert_eq!(near[0], index);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bcc;
pub mod config;
pub mod cubic;
pub mod error;
pub mod lattice;
pub mod radix;

#[cfg(test)]
pub(crate) mod compliance;

pub use bcc::{Bcc, Sublattice};
pub use config::GridConfig;
pub use cubic::Cubic;
pub use error::GridError;
pub use lattice::{Lattice, INLINE_NEIGHBORS};
pub use radix::MixedRadix;
