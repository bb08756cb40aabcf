// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reduction to the spine without any stored state: every iteration searches
//! the whole complex for admissible pairs again. This is far slower than
//! [`crate::CollapseEngine`] and exists to check it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{ComplexLike, SpineReduction};

/// Returns true if `cell` is principal in `complex`, i.e. not a face of any
/// cell of one dimension higher. Vertices are never considered principal, as
/// they have no faces to collapse with.
pub fn is_principal<C>(complex: &C, cell: &C::Cell) -> bool
where
    C: ComplexLike,
{
    let dimension = complex.cell_dimension(cell);
    if dimension == 0 {
        return false;
    }

    !complex.cell_iter().any(|other| {
        complex.cell_dimension(other) == dimension + 1 && complex.is_immediate_face(cell, other)
    })
}

/// If `cell` is principal in `complex`, return the first of its boundary faces
/// that is not a face of any other cell of `complex`. Returns `None` if `cell`
/// is not principal or has no such face.
pub fn admissible_face<C>(complex: &C, cell: &C::Cell) -> Option<C::Cell>
where
    C: ComplexLike,
{
    if !is_principal(complex, cell) {
        return None;
    }

    let dimension = complex.cell_dimension(cell);
    complex.cell_boundary(cell).into_iter().find(|face| {
        !complex.cell_iter().any(|other| {
            other != cell
                && complex.cell_dimension(other) == dimension
                && complex.is_immediate_face(face, other)
        })
    })
}

/// All admissible pairs of `complex`, mapping each principal cell with a free
/// face to its first free face.
pub fn principal_faces<C>(complex: &C) -> BTreeMap<C::Cell, C::Cell>
where
    C: ComplexLike,
{
    complex
        .cell_iter()
        .filter_map(|cell| admissible_face(complex, cell).map(|face| (cell.clone(), face)))
        .collect()
}

/// Reduction to the spine that recomputes all admissible pairs from scratch
/// after every elementary collapse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaiveSpine;

impl SpineReduction for NaiveSpine {
    fn reduce<C>(&self, complex: &C) -> C
    where
        C: ComplexLike + Clone,
    {
        let mut reduced = complex.clone();
        let mut collapses = 0;

        while let Some((principal, free_face)) = principal_faces(&reduced).pop_first() {
            let removed = reduced.remove_cell_unchecked(&principal)
                && reduced.remove_cell_unchecked(&free_face);
            assert!(removed, "admissible pair is not in the complex");
            collapses += 1;
        }

        debug!(
            cells = reduced.cell_count(),
            collapses,
            "Naive reduction reached spine"
        );
        reduced
    }
}

/// Compute the spine of `complex` with the [`NaiveSpine`] reduction. Intended
/// only for validating [`crate::spine`] on small complexes.
pub fn naive_spine<C>(complex: &C) -> C
where
    C: ComplexLike + Clone,
{
    NaiveSpine.reduce(complex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Simplex, SimplicialComplex};

    fn filled_triangle() -> SimplicialComplex {
        SimplicialComplex::from_maximal_simplices([Simplex::new([0, 1, 2])])
    }

    #[test]
    fn test_principal_cells() {
        let complex = filled_triangle();
        assert!(is_principal(&complex, &Simplex::new([0, 1, 2])));
        assert!(!is_principal(&complex, &Simplex::new([0, 1])));
        assert!(!is_principal(&complex, &Simplex::new([0])));
    }

    #[test]
    fn test_admissible_face_matches_boundary_order() {
        let complex = filled_triangle();
        assert_eq!(
            admissible_face(&complex, &Simplex::new([0, 1, 2])),
            Some(Simplex::new([1, 2]))
        );
        assert_eq!(admissible_face(&complex, &Simplex::new([0, 1])), None);
    }

    #[test]
    fn test_principal_faces_of_wedge() {
        // Two edges sharing the vertex 1.
        let complex = SimplicialComplex::from_maximal_simplices([
            Simplex::<f64>::new([0, 1]),
            Simplex::new([1, 2]),
        ]);
        let pairs: Vec<_> = principal_faces(&complex).into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Simplex::new([0, 1]), Simplex::new([0])),
                (Simplex::new([1, 2]), Simplex::new([2])),
            ]
        );
    }

    #[test]
    fn test_naive_spine_of_filled_triangle() {
        let complex = filled_triangle();
        let reduced = naive_spine(&complex);
        assert_eq!(reduced.len(), 1);
        assert_eq!(complex.len(), 7);
    }

    #[test]
    fn test_naive_spine_keeps_hollow_triangle() {
        let complex = SimplicialComplex::from_maximal_simplices([
            Simplex::<f64>::new([0, 1]),
            Simplex::new([0, 2]),
            Simplex::new([1, 2]),
        ]);
        assert_eq!(naive_spine(&complex), complex);
    }
}
