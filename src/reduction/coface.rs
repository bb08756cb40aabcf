// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::ComplexLike;

/// Inconsistencies between a [`CofaceIndex`] and the complex it indexes, as
/// reported by [`CofaceIndex::verify`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CofaceMismatch<T: Debug> {
    /// A cell of the complex has no entry in the index.
    #[error("cell {0:?} of the complex has no coface entry")]
    MissingEntry(T),
    /// The index has an entry for a cell no longer in the complex.
    #[error("coface entry for cell {0:?} which is not in the complex")]
    StaleEntry(T),
    /// The indexed cofaces of a cell differ from its actual cofaces.
    #[error("cell {cell:?} has indexed cofaces {indexed:?}, expected {expected:?}")]
    Cofaces {
        /// The cell whose cofaces differ.
        cell: T,
        /// The cofaces recorded by the index, sorted.
        indexed: Vec<T>,
        /// The cofaces of the cell in the complex, sorted.
        expected: Vec<T>,
    },
}

/// Maps each cell of a complex to the set of cells having it as an immediate
/// (codimension-one) face.
///
/// The index is keyed by cell identity and holds copies of the cell keys only;
/// it never borrows from the complex. After construction with
/// [`CofaceIndex::build`] it must be kept synchronized with every removal from
/// the complex, which for elementary collapses is done by
/// [`CofaceIndex::collapse`].
///
/// A cell is *principal* exactly when its coface set is empty. Querying a cell
/// without an entry (for instance, one that has been collapsed away) violates
/// the invariants of the index and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CofaceIndex<T>
where
    T: Clone + Eq + Hash,
{
    cofaces: HashMap<T, HashSet<T>>,
}

impl<T> CofaceIndex<T>
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    /// Build the index of `complex` in one pass over its cells and their
    /// boundaries.
    pub fn build<C>(complex: &C) -> Self
    where
        C: ComplexLike<Cell = T>,
    {
        let mut cofaces: HashMap<T, HashSet<T>> = HashMap::with_capacity(complex.cell_count());
        for cell in complex.cell_iter() {
            // Every cell gets an entry, possibly empty, so that lookups of
            // principal cells succeed.
            cofaces.entry(cell.clone()).or_default();
            for face in complex.cell_boundary(cell) {
                cofaces.entry(face).or_default().insert(cell.clone());
            }
        }

        Self { cofaces }
    }

    /// The number of cells with an entry in the index.
    pub fn len(&self) -> usize {
        self.cofaces.len()
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.cofaces.is_empty()
    }

    /// The cofaces of `cell`, or `None` if `cell` has no entry.
    pub fn cofaces(&self, cell: &T) -> Option<&HashSet<T>> {
        self.cofaces.get(cell)
    }

    /// Returns true if `cell` is not a face of any cell in the complex.
    pub fn is_principal(&self, cell: &T) -> bool {
        self.entry(cell).is_empty()
    }

    /// Returns true if `face` has `cell` as its one and only coface.
    pub fn is_free_face_of(&self, face: &T, cell: &T) -> bool {
        let cofaces = self.entry(face);
        cofaces.len() == 1 && cofaces.contains(cell)
    }

    /// If `cell` is principal, return the first of its boundary faces (in the
    /// boundary order of `complex`) that is free, that is, has `cell` as its
    /// only coface. Returns `None` if `cell` is not principal or has no free
    /// face.
    pub fn free_face<C>(&self, complex: &C, cell: &T) -> Option<T>
    where
        C: ComplexLike<Cell = T>,
    {
        if !self.is_principal(cell) {
            return None;
        }

        complex
            .cell_boundary(cell)
            .into_iter()
            .find(|face| self.is_free_face_of(face, cell))
    }

    /// Update the index for the elementary collapse of `principal` with its
    /// free face `free_face`. The boundaries of both cells are passed in, as
    /// the cells may already have been removed from the complex.
    ///
    /// Both cells are erased from the coface sets of their faces, and their own
    /// entries are dropped entirely; they must not be queried again.
    pub fn collapse(
        &mut self,
        principal: &T,
        principal_boundary: &[T],
        free_face: &T,
        free_face_boundary: &[T],
    ) {
        for face in principal_boundary {
            self.entry_mut(face).remove(principal);
        }
        for face in free_face_boundary {
            self.entry_mut(face).remove(free_face);
        }

        let removed = self.cofaces.remove(principal);
        debug_assert!(
            removed.is_some_and(|cofaces| cofaces.is_empty()),
            "collapsed cell {principal:?} was not principal"
        );
        let removed = self.cofaces.remove(free_face);
        debug_assert!(
            removed.is_some_and(|cofaces| cofaces.is_empty()),
            "free face {free_face:?} kept cofaces after collapse"
        );
    }

    /// Compare the index against one rebuilt from scratch on `complex`.
    /// Returns the first inconsistency found, checking the cells of `complex`
    /// in order, then entries of cells that are no longer present.
    pub fn verify<C>(&self, complex: &C) -> Result<(), CofaceMismatch<T>>
    where
        C: ComplexLike<Cell = T>,
    {
        let expected = Self::build(complex);

        for cell in complex.cell_iter() {
            let Some(indexed) = self.cofaces.get(cell) else {
                return Err(CofaceMismatch::MissingEntry(cell.clone()));
            };
            let actual = &expected.cofaces[cell];
            if indexed != actual {
                return Err(CofaceMismatch::Cofaces {
                    cell: cell.clone(),
                    indexed: sorted(indexed),
                    expected: sorted(actual),
                });
            }
        }

        if let Some(stale) = self
            .cofaces
            .keys()
            .filter(|cell| !expected.cofaces.contains_key(*cell))
            .min()
        {
            return Err(CofaceMismatch::StaleEntry(stale.clone()));
        }

        Ok(())
    }

    fn entry(&self, cell: &T) -> &HashSet<T> {
        self.cofaces
            .get(cell)
            .unwrap_or_else(|| panic!("cell {cell:?} is not present in the coface index"))
    }

    fn entry_mut(&mut self, cell: &T) -> &mut HashSet<T> {
        self.cofaces
            .get_mut(cell)
            .unwrap_or_else(|| panic!("cell {cell:?} is not present in the coface index"))
    }
}

fn sorted<T: Clone + Ord>(cells: &HashSet<T>) -> Vec<T> {
    let mut cells: Vec<T> = cells.iter().cloned().collect();
    cells.sort();
    cells
}
