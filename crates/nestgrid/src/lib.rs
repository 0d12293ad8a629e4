//! nestgrid: reversible lattice discretisation for nearest-neighbour search.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the nestgrid sub-crates. For most users, adding `nestgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use nestgrid::prelude::*;
//!
//! // A 4x4x4 BCC lattice over the unit cube: 128 addressable cells.
//! let bcc = Bcc::unit([4, 4, 4]).unwrap();
//! let index = bcc.locate(&[0.1, 0.1, 0.1]);
//! assert_eq!(bcc.sublattice(index), Sublattice::Corner);
//!
//! // Representative point and the cells a search should also visit.
//! let center = bcc.cell_center(index).unwrap();
//! assert_eq!(bcc.locate(&center), index);
//! let near = bcc.neighbor_vec(index, true);
//! assert_eq!(near[0], index);
//!
//! // Same interface on a plain cubic grid.
//! let cubic = Cubic::new([4, 4, 4], [-1.0; 3], [1.0; 3]).unwrap();
//! assert_eq!(cubic.size(), 64);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`space`] | `nestgrid-space` | Lattice backends, addressing, configuration, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice backends and addressing (`nestgrid-space`).
///
/// Provides the [`space::Lattice`] trait and concrete backends
/// [`space::Cubic`] and [`space::Bcc`], built on [`space::MixedRadix`]
/// addressing over a validated [`space::GridConfig`].
pub use nestgrid_space as space;

/// Common imports for typical nestgrid usage.
///
/// ```rust
/// use nestgrid::prelude::*;
/// ```
pub mod prelude {
    pub use nestgrid_space::{Bcc, Cubic, GridConfig, GridError, Lattice, Sublattice};
}
