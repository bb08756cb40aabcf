// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{CofaceIndex, ComplexLike};

/// The set of admissible pairs known to a collapse, mapping each principal
/// cell to one of its free faces.
///
/// Pairs are kept ordered by their principal cell, and
/// [`AdmissibleSet::pop_first`] always yields the pair with the least
/// principal cell. Selection is therefore reproducible for a given complex and
/// does not depend on hashing.
///
/// The set is filled either by a full [`AdmissibleSet::rebuild`] over the
/// complex or by targeted [`AdmissibleSet::probe`] calls for cells whose
/// admissibility may have changed. As long as every such cell is probed, the
/// set holds exactly the pairs a rebuild would find.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdmissibleSet<T> {
    pairs: BTreeMap<T, T>,
}

impl<T> Default for AdmissibleSet<T> {
    fn default() -> Self {
        Self {
            pairs: BTreeMap::new(),
        }
    }
}

impl<T> AdmissibleSet<T>
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set of all admissible pairs of `complex` with respect to
    /// `cofaces`.
    pub fn from_index<C>(cofaces: &CofaceIndex<T>, complex: &C) -> Self
    where
        C: ComplexLike<Cell = T>,
    {
        let mut admissible = Self::new();
        admissible.rebuild(cofaces, complex);
        admissible
    }

    /// Discard all pairs and probe every cell of `complex` again. Returns the
    /// number of pairs found.
    pub fn rebuild<C>(&mut self, cofaces: &CofaceIndex<T>, complex: &C) -> usize
    where
        C: ComplexLike<Cell = T>,
    {
        self.pairs.clear();
        for cell in complex.cell_iter() {
            if let Some(free_face) = cofaces.free_face(complex, cell) {
                self.pairs.insert(cell.clone(), free_face);
            }
        }
        self.pairs.len()
    }

    /// Check `cell` again and update its pair. If it is principal with a free
    /// face, the pair is recorded with its first free face, replacing any
    /// earlier pair of `cell`; otherwise any earlier pair is dropped. Returns
    /// true if `cell` had no pair before and has one now.
    pub fn probe<C>(&mut self, cofaces: &CofaceIndex<T>, complex: &C, cell: &T) -> bool
    where
        C: ComplexLike<Cell = T>,
    {
        match cofaces.free_face(complex, cell) {
            Some(free_face) => self.pairs.insert(cell.clone(), free_face).is_none(),
            None => {
                self.pairs.remove(cell);
                false
            }
        }
    }

    /// Remove and return the pair with the least principal cell.
    pub fn pop_first(&mut self) -> Option<(T, T)> {
        self.pairs.pop_first()
    }

    /// Remove the pair of the principal cell `cell`, returning its free face.
    pub fn remove(&mut self, cell: &T) -> Option<T> {
        self.pairs.remove(cell)
    }

    /// The recorded free face of the principal cell `cell`, if any.
    pub fn get(&self, cell: &T) -> Option<&T> {
        self.pairs.get(cell)
    }

    /// Returns true if a pair with principal cell `cell` is recorded.
    pub fn contains(&self, cell: &T) -> bool {
        self.pairs.contains_key(cell)
    }

    /// The number of recorded pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no pairs are recorded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs `(principal, free_face)` in order.
    pub fn iter(&self) -> btree_map::Iter<'_, T, T> {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Simplex, SimplicialComplex};

    #[test]
    fn test_rebuild_filled_triangle() {
        let complex = SimplicialComplex::from_maximal_simplices([Simplex::<f64>::new([0, 1, 2])]);
        let cofaces = CofaceIndex::build(&complex);
        let admissible = AdmissibleSet::from_index(&cofaces, &complex);

        assert_eq!(admissible.len(), 1);
        assert_eq!(
            admissible.get(&Simplex::new([0, 1, 2])),
            Some(&Simplex::new([1, 2]))
        );
    }

    #[test]
    fn test_rebuild_path_orders_pairs() {
        // Path 0 - 1 - 2 with a dangling edge 1 - 3.
        let complex = SimplicialComplex::from_maximal_simplices([
            Simplex::<f64>::new([0, 1]),
            Simplex::new([1, 2]),
            Simplex::new([1, 3]),
        ]);
        let cofaces = CofaceIndex::build(&complex);
        let mut admissible = AdmissibleSet::from_index(&cofaces, &complex);

        assert_eq!(admissible.len(), 3);
        assert_eq!(
            admissible.pop_first(),
            Some((Simplex::new([0, 1]), Simplex::new([0])))
        );
        assert_eq!(
            admissible.pop_first(),
            Some((Simplex::new([1, 2]), Simplex::new([2])))
        );
        assert_eq!(
            admissible.pop_first(),
            Some((Simplex::new([1, 3]), Simplex::new([3])))
        );
        assert!(admissible.is_empty());
    }

    #[test]
    fn test_rebuild_hollow_triangle_is_empty() {
        let complex = SimplicialComplex::from_maximal_simplices([
            Simplex::<f64>::new([0, 1]),
            Simplex::new([0, 2]),
            Simplex::new([1, 2]),
        ]);
        let cofaces = CofaceIndex::build(&complex);
        let mut admissible = AdmissibleSet::new();

        assert_eq!(admissible.rebuild(&cofaces, &complex), 0);
        assert!(admissible.is_empty());
    }

    #[test]
    fn test_pair_recorded_once() {
        let complex = SimplicialComplex::from_maximal_simplices([Simplex::<f64>::new([0, 1])]);
        let cofaces = CofaceIndex::build(&complex);
        let mut admissible = AdmissibleSet::new();
        let edge = Simplex::new([0, 1]);

        assert!(admissible.probe(&cofaces, &complex, &edge));
        assert!(!admissible.probe(&cofaces, &complex, &edge));
        assert!(!admissible.probe(&cofaces, &complex, &Simplex::new([0])));
        assert_eq!(admissible.len(), 1);
        assert_eq!(admissible.remove(&edge), Some(Simplex::new([1])));
        assert!(!admissible.contains(&edge));
    }

    #[test]
    fn test_outdated_free_face_is_replaced() {
        // The edge {0, 1} with the edge {1, 2} hanging off its vertex 1.
        let mut complex = SimplicialComplex::from_maximal_simplices([
            Simplex::<f64>::new([0, 1]),
            Simplex::new([1, 2]),
        ]);
        let mut cofaces = CofaceIndex::build(&complex);
        let mut admissible = AdmissibleSet::from_index(&cofaces, &complex);
        let edge = Simplex::new([0, 1]);
        assert_eq!(admissible.get(&edge), Some(&Simplex::new([0])));

        // Collapsing {1, 2} with {2} frees the vertex {1}, which comes first in
        // the boundary of {0, 1}.
        let removed = Simplex::new([1, 2]);
        let removed_boundary = complex.cell_boundary(&removed);
        let vertex = Simplex::new([2]);
        complex.remove_unchecked(&removed);
        complex.remove_unchecked(&vertex);
        cofaces.collapse(&removed, &removed_boundary, &vertex, &[]);
        admissible.remove(&removed);

        assert!(!admissible.probe(&cofaces, &complex, &edge));
        assert_eq!(admissible.get(&edge), Some(&Simplex::new([1])));
        assert_eq!(admissible, AdmissibleSet::from_index(&cofaces, &complex));
    }

    #[test]
    fn test_cell_without_free_face_loses_pair() {
        let complex = SimplicialComplex::from_maximal_simplices([Simplex::<f64>::new([0, 1, 2])]);
        let cofaces = CofaceIndex::build(&complex);
        let mut admissible = AdmissibleSet::new();

        // Record a pair by hand for an edge that is not principal.
        let edge = Simplex::new([0, 1]);
        admissible.pairs.insert(edge.clone(), Simplex::new([1]));

        assert!(!admissible.probe(&cofaces, &complex, &edge));
        assert!(!admissible.contains(&edge));
    }
}
