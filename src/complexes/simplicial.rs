// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;
use std::iter::Flatten;
use std::{slice, vec};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{ComplexLike, Simplex, Vertex};

/// Errors raised when constructing a [`SimplicialComplex`] from a collection of
/// simplices that does not form a valid simplicial complex.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComplexError {
    /// A face of a simplex in the collection is not itself in the collection.
    #[error("simplex {simplex:?} is missing its face {face:?}")]
    MissingFace {
        /// Vertices of the simplex whose face is missing.
        simplex: Vec<Vertex>,
        /// Vertices of the missing face.
        face: Vec<Vertex>,
    },
}

/// A finite simplicial complex: a set of simplices closed under taking faces.
///
/// Simplices are kept in one ordered set per dimension, so iteration follows
/// the order of [`Simplex`] (by dimension, then lexicographically). This is
/// deterministic and never enumerates a simplex before one of its faces.
///
/// The complex offers an unchecked removal, [`SimplicialComplex::remove_unchecked`],
/// which does not maintain closure under taking faces; it exists for collapse
/// algorithms that guarantee closure themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimplicialComplex<D = f64> {
    // Indexed by dimension; the last set is never empty.
    simplices: Vec<BTreeSet<Simplex<D>>>,
    len: usize,
}

impl<D> Default for SimplicialComplex<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SimplicialComplex<D> {
    /// Create an empty complex.
    pub fn new() -> Self {
        Self {
            simplices: Vec::new(),
            len: 0,
        }
    }

    /// The number of simplices in the complex.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the complex has no simplices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if a simplex with the vertices of `simplex` is a member of
    /// the complex. Data values are not compared.
    pub fn contains(&self, simplex: &Simplex<D>) -> bool {
        self.get(simplex).is_some()
    }

    /// Returns the stored simplex with the vertices of `simplex`, including its
    /// data value, if present.
    pub fn get(&self, simplex: &Simplex<D>) -> Option<&Simplex<D>> {
        self.simplices
            .get(simplex.dimension() as usize)
            .and_then(|simplices| simplices.get(simplex))
    }

    /// Returns an iterator over the simplices in order.
    pub fn iter(&self) -> Flatten<slice::Iter<'_, BTreeSet<Simplex<D>>>> {
        self.simplices.iter().flatten()
    }

    /// Returns the `index`-th simplex in order.
    pub fn nth(&self, index: usize) -> Option<&Simplex<D>> {
        self.iter().nth(index)
    }

    /// Returns an iterator over the simplices of dimension `dimension`.
    pub fn range(&self, dimension: u32) -> impl Iterator<Item = &Simplex<D>> {
        self.simplices.get(dimension as usize).into_iter().flatten()
    }

    /// The maximum dimension of a simplex in the complex, or 0 if the complex
    /// is empty.
    pub fn dimension(&self) -> u32 {
        self.simplices.len().saturating_sub(1) as u32
    }

    /// The number of simplices of each dimension, indexed by dimension.
    pub fn count_by_dimension(&self) -> Vec<usize> {
        self.simplices.iter().map(BTreeSet::len).collect()
    }

    /// The Euler characteristic, the alternating sum of the number of simplices
    /// of each dimension.
    pub fn euler_characteristic(&self) -> i64 {
        self.count_by_dimension()
            .into_iter()
            .enumerate()
            .map(|(dimension, count)| {
                if dimension % 2 == 0 {
                    count as i64
                } else {
                    -(count as i64)
                }
            })
            .sum()
    }

    /// Insert `simplex` without inserting its faces. Returns true if the
    /// simplex was not yet present; otherwise the stored simplex is kept.
    pub fn insert(&mut self, simplex: Simplex<D>) -> bool {
        let dimension = simplex.dimension() as usize;
        if self.simplices.len() <= dimension {
            self.simplices.resize_with(dimension + 1, BTreeSet::new);
        }

        let inserted = self.simplices[dimension].insert(simplex);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove `simplex` from the complex without re-validating closure under
    /// taking faces. Returns the removed simplex, if it was present.
    ///
    /// The caller must guarantee that `simplex` is not a face of any other
    /// simplex of the complex; this is checked in debug builds only.
    pub fn remove_unchecked(&mut self, simplex: &Simplex<D>) -> Option<Simplex<D>> {
        debug_assert!(
            self.range(simplex.dimension() + 1)
                .all(|coface| !simplex.is_face_of(coface)),
            "removing simplex {simplex:?} which is still a face of the complex"
        );

        let removed = self
            .simplices
            .get_mut(simplex.dimension() as usize)?
            .take(simplex)?;
        self.len -= 1;
        while self.simplices.last().is_some_and(BTreeSet::is_empty) {
            self.simplices.pop();
        }
        Some(removed)
    }
}

impl<D: Clone> SimplicialComplex<D> {
    /// Create a complex from a collection of simplices, which must already be
    /// closed under taking faces. Of several simplices with the same vertices,
    /// the first one is kept.
    ///
    /// Returns [`ComplexError::MissingFace`] if a face of some simplex is not
    /// part of the collection.
    pub fn from_simplices(
        simplices: impl IntoIterator<Item = Simplex<D>>,
    ) -> Result<Self, ComplexError> {
        let mut complex = Self::new();
        for simplex in simplices {
            complex.insert(simplex);
        }

        match complex.missing_face() {
            Some((simplex, face)) => Err(ComplexError::MissingFace {
                simplex: simplex.vertices().to_vec(),
                face: face.vertices().to_vec(),
            }),
            None => Ok(complex),
        }
    }

    /// Create the smallest complex containing each of the given simplices,
    /// that is, insert every simplex together with all of its faces. A face
    /// that is not given explicitly inherits the data of the first simplex
    /// (in the given order) that introduces it.
    pub fn from_maximal_simplices(simplices: impl IntoIterator<Item = Simplex<D>>) -> Self {
        let mut complex = Self::new();
        for simplex in simplices {
            complex.insert_with_faces(simplex);
        }
        complex
    }

    /// Insert `simplex` together with all of its faces that are not yet
    /// present.
    pub fn insert_with_faces(&mut self, simplex: Simplex<D>) {
        let mut pending = vec![simplex];
        while let Some(simplex) = pending.pop() {
            if self.contains(&simplex) {
                continue;
            }
            pending.extend(simplex.boundary());
            self.insert(simplex);
        }
    }

    /// Returns true if every face of every simplex is a member of the complex.
    pub fn is_face_closed(&self) -> bool {
        self.missing_face().is_none()
    }

    fn missing_face(&self) -> Option<(&Simplex<D>, Simplex<D>)> {
        self.iter().find_map(|simplex| {
            simplex
                .boundary()
                .find(|face| !self.contains(face))
                .map(|face| (simplex, face))
        })
    }
}

impl<D: Clone> ComplexLike for SimplicialComplex<D> {
    type Cell = Simplex<D>;

    fn cell_iter(&self) -> impl Iterator<Item = &Simplex<D>> {
        self.iter()
    }

    fn cell_boundary(&self, cell: &Simplex<D>) -> Vec<Simplex<D>> {
        cell.boundary().collect()
    }

    fn is_immediate_face(&self, face: &Simplex<D>, cell: &Simplex<D>) -> bool {
        face.len() + 1 == cell.len() && face.intersection_size(cell) == face.len()
    }

    fn cell_dimension(&self, cell: &Simplex<D>) -> u32 {
        cell.dimension()
    }

    fn dimension(&self) -> u32 {
        SimplicialComplex::dimension(self)
    }

    fn cell_count(&self) -> usize {
        self.len()
    }

    fn contains_cell(&self, cell: &Simplex<D>) -> bool {
        self.contains(cell)
    }

    fn remove_cell_unchecked(&mut self, cell: &Simplex<D>) -> bool {
        self.remove_unchecked(cell).is_some()
    }
}

impl<D: Clone> FromIterator<Simplex<D>> for SimplicialComplex<D> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Simplex<D>>,
    {
        Self::from_maximal_simplices(iter)
    }
}

impl<'a, D> IntoIterator for &'a SimplicialComplex<D> {
    type IntoIter = Flatten<slice::Iter<'a, BTreeSet<Simplex<D>>>>;
    type Item = &'a Simplex<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<D> IntoIterator for SimplicialComplex<D> {
    type IntoIter = Flatten<vec::IntoIter<BTreeSet<Simplex<D>>>>;
    type Item = Simplex<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.into_iter().flatten()
    }
}

impl<D: Serialize> Serialize for SimplicialComplex<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, D> Deserialize<'de> for SimplicialComplex<D>
where
    D: Clone + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let simplices = Vec::<Simplex<D>>::deserialize(deserializer)?;
        Self::from_simplices(simplices).map_err(De::Error::custom)
    }
}
