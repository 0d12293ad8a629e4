//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (Cubic, Bcc).

use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert that every index below `size()` has a centre and `size()` does not.
pub fn assert_cell_centers_cover_size<const N: usize, L: Lattice<N>>(lattice: &L) {
    for index in 0..lattice.size() {
        let center = lattice.cell_center(index);
        assert!(
            center.is_ok(),
            "cell_center({index}) failed below size {}: {center:?}",
            lattice.size()
        );
    }
    assert!(
        lattice.cell_center(lattice.size()).is_err(),
        "cell_center(size) must report IndexOutOfRange"
    );
}

/// Assert that `locate(cell_center(i)) == i` for every index.
pub fn assert_round_trip<const N: usize, L: Lattice<N>>(lattice: &L) {
    for index in 0..lattice.size() {
        let center = lattice.cell_center(index).unwrap();
        let back = lattice.locate(&center);
        assert_eq!(
            back, index,
            "locate(cell_center({index})) = {back}, centre {center:?}"
        );
    }
}

/// Assert that `locate_checked(cell_center(i)) == Ok(i)` for every index.
pub fn assert_checked_round_trip<const N: usize, L: Lattice<N>>(lattice: &L) {
    for index in 0..lattice.size() {
        let center = lattice.cell_center(index).unwrap();
        let back = lattice.locate_checked(&center);
        assert_eq!(
            back,
            Ok(index),
            "locate_checked(cell_center({index})) rejected centre {center:?}"
        );
    }
}

/// Assert that two calls to `neighbors` return the same sequence.
pub fn assert_neighbors_deterministic<const N: usize, L: Lattice<N>>(lattice: &L) {
    for want_edges in [false, true] {
        for index in 0..lattice.size() {
            let a = lattice.neighbor_vec(index, want_edges);
            let b = lattice.neighbor_vec(index, want_edges);
            assert_eq!(a, b, "neighbors({index}, {want_edges}) is non-deterministic");
        }
    }
}

/// Assert that every neighbour is a valid index and each cell lists itself.
pub fn assert_neighbors_in_range<const N: usize, L: Lattice<N>>(lattice: &L) {
    for want_edges in [false, true] {
        for index in 0..lattice.size() {
            let nbrs = lattice.neighbor_vec(index, want_edges);
            assert!(
                nbrs.contains(&index),
                "neighbors({index}) does not contain the cell itself"
            );
            assert!(
                nbrs.len() <= lattice.max_neighbor_count(want_edges),
                "neighbors({index}) returned {} > max_neighbor_count {}",
                nbrs.len(),
                lattice.max_neighbor_count(want_edges)
            );
            for n in &nbrs {
                assert!(
                    *n < lattice.size(),
                    "neighbors({index}) yielded {n} >= size {}",
                    lattice.size()
                );
            }
        }
    }
}

/// Assert that no neighbour is reported twice for the same cell.
pub fn assert_neighbors_unique<const N: usize, L: Lattice<N>>(lattice: &L) {
    for want_edges in [false, true] {
        for index in 0..lattice.size() {
            let nbrs = lattice.neighbor_vec(index, want_edges);
            let unique: IndexSet<_> = nbrs.iter().collect();
            assert_eq!(
                unique.len(),
                nbrs.len(),
                "neighbors({index}, {want_edges}) has duplicates: {nbrs:?}"
            );
        }
    }
}

/// Assert that `b in neighbors(a)` implies `a in neighbors(b)`.
pub fn assert_neighbors_symmetric<const N: usize, L: Lattice<N>>(lattice: &L) {
    for want_edges in [false, true] {
        for index in 0..lattice.size() {
            for nb in lattice.neighbor_vec(index, want_edges) {
                let back = lattice.neighbor_vec(nb, want_edges);
                assert!(
                    back.contains(&index),
                    "neighbour symmetry violated: {nb} in N({index}) but {index} not in N({nb})"
                );
            }
        }
    }
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance<const N: usize, L: Lattice<N>>(lattice: &L) {
    assert_cell_centers_cover_size(lattice);
    assert_round_trip(lattice);
    assert_checked_round_trip(lattice);
    assert_neighbors_deterministic(lattice);
    assert_neighbors_in_range(lattice);
    assert_neighbors_unique(lattice);
    assert_neighbors_symmetric(lattice);
}
