// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for containers of simplicial complexes on which elementary collapses
/// can be performed.
///
/// The reduction algorithms of this crate rely only on this interface. Cells
/// are identified by value: two cells are the same cell exactly when they
/// compare equal, and the `Hash` implementation must agree. The iteration
/// order of [`ComplexLike::cell_iter`] and of [`ComplexLike::cell_boundary`]
/// must be deterministic, or results of the reductions are not reproducible.
pub trait ComplexLike {
    /// Cell type of the complex; for simplicial complexes, a simplex.
    type Cell: Clone + Eq + Hash + Ord + Debug;

    /// Returns an iterator over all cells in the complex. Faces must never
    /// succeed their cofaces in this order.
    fn cell_iter(&self) -> impl Iterator<Item = &Self::Cell>;
    /// Return the codimension-one faces of `cell`, in a fixed order.
    fn cell_boundary(&self, cell: &Self::Cell) -> Vec<Self::Cell>;
    /// Returns true if `face` is a codimension-one face of `cell`.
    fn is_immediate_face(&self, face: &Self::Cell, cell: &Self::Cell) -> bool {
        self.cell_boundary(cell).contains(face)
    }
    /// Returns the dimension of a specific cell.
    fn cell_dimension(&self, cell: &Self::Cell) -> u32;
    /// Returns the dimension of the complex, the maximum cell dimension (0 if
    /// the complex is empty).
    fn dimension(&self) -> u32;
    /// The number of cells in the complex.
    fn cell_count(&self) -> usize;
    /// Returns true if `cell` is a member of the complex.
    fn contains_cell(&self, cell: &Self::Cell) -> bool;
    /// Returns the `index`-th cell in the order of [`ComplexLike::cell_iter`].
    fn nth_cell(&self, index: usize) -> Option<&Self::Cell> {
        self.cell_iter().nth(index)
    }
    /// Remove `cell` from the complex without checking that the complex stays
    /// closed under taking faces. The caller must guarantee that `cell` is not
    /// a face of any remaining cell. Returns true if the cell was present.
    fn remove_cell_unchecked(&mut self, cell: &Self::Cell) -> bool;
}
