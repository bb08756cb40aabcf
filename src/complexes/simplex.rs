// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier type of the vertices of a [`Simplex`].
pub type Vertex = u32;

/// A simplex, given by a non-empty set of vertices and an attached data value.
///
/// The vertices are stored sorted in ascending order without duplicates. The
/// data value of type `D` (a weight, or any payload) does not take part in the
/// identity of the simplex: equality, hashing and ordering are defined by the
/// vertex set alone. Thus two simplices with identical vertices but different
/// data are the same simplex.
///
/// Simplices are ordered first by dimension and then lexicographically by
/// their vertices. In particular, every face of a simplex orders before the
/// simplex itself, which makes this order a valid enumeration order for a
/// simplicial complex.
#[derive(Clone)]
pub struct Simplex<D = f64> {
    vertices: Vec<Vertex>,
    data: D,
}

impl<D: Default> Simplex<D> {
    /// Create a simplex on the given vertices with the default data value.
    /// Duplicate vertices are ignored. Panics if `vertices` is empty.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self::with_data(vertices, D::default())
    }
}

impl<D> Simplex<D> {
    /// Create a simplex on the given vertices with the data value `data`.
    /// Duplicate vertices are ignored. Panics if `vertices` is empty.
    pub fn with_data(vertices: impl IntoIterator<Item = Vertex>, data: D) -> Self {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        assert!(!vertices.is_empty(), "a simplex requires at least one vertex");

        Self { vertices, data }
    }

    /// The vertices of the simplex, sorted in ascending order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The data value attached to the simplex.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Replace the data value attached to the simplex.
    pub fn set_data(&mut self, data: D) {
        self.data = data;
    }

    /// The number of vertices of the simplex.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a simplex has at least one vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The dimension of the simplex, one less than its number of vertices.
    pub fn dimension(&self) -> u32 {
        (self.vertices.len() - 1) as u32
    }

    /// Returns true if `vertex` is a vertex of the simplex.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }

    /// Returns true if every vertex of `self` is a vertex of `other`. A simplex
    /// is a face of itself.
    pub fn is_face_of<E>(&self, other: &Simplex<E>) -> bool {
        self.len() <= other.len()
            && self
                .vertices
                .iter()
                .all(|vertex| other.contains_vertex(*vertex))
    }

    /// The number of vertices shared by `self` and `other`.
    pub fn intersection_size<E>(&self, other: &Simplex<E>) -> usize {
        // Both vertex lists are sorted; merge them.
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < self.vertices.len() && j < other.vertices.len() {
            match self.vertices[i].cmp(&other.vertices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }
}

impl<D: Clone> Simplex<D> {
    /// Returns an iterator over the codimension-one faces of the simplex. The
    /// `i`-th face omits the `i`-th vertex, so the order is fixed for a given
    /// vertex set. Each face carries a copy of this simplex's data.
    ///
    /// A vertex (0-simplex) has an empty boundary.
    pub fn boundary(&self) -> BoundaryIterator<'_, D> {
        BoundaryIterator {
            simplex: self,
            omitted: if self.len() > 1 { 0 } else { self.len() },
        }
    }
}

/// Iterator over the faces of a [`Simplex`]; see [`Simplex::boundary`].
pub struct BoundaryIterator<'a, D> {
    simplex: &'a Simplex<D>,
    omitted: usize,
}

impl<D: Clone> Iterator for BoundaryIterator<'_, D> {
    type Item = Simplex<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.omitted >= self.simplex.len() {
            return None;
        }

        let omitted = self.omitted;
        self.omitted += 1;

        let vertices = self
            .simplex
            .vertices
            .iter()
            .enumerate()
            .filter(|(index, _vertex)| *index != omitted)
            .map(|(_index, vertex)| *vertex)
            .collect();

        Some(Simplex {
            vertices,
            data: self.simplex.data.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.simplex.len().saturating_sub(self.omitted);
        (remaining, Some(remaining))
    }
}

impl<D: Clone> ExactSizeIterator for BoundaryIterator<'_, D> {}

impl<D> PartialEq for Simplex<D> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<D> Eq for Simplex<D> {}

impl<D> Hash for Simplex<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
    }
}

impl<D> PartialOrd for Simplex<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D> Ord for Simplex<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices
            .len()
            .cmp(&other.vertices.len())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

impl<D> Debug for Simplex<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.vertices.iter()).finish()
    }
}

impl<D> Display for Simplex<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "}}")
    }
}

impl<D: Serialize> Serialize for Simplex<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.vertices, &self.data).serialize(serializer)
    }
}

impl<'de, D: Deserialize<'de>> Deserialize<'de> for Simplex<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let (vertices, data) = <(Vec<Vertex>, D)>::deserialize(deserializer)?;
        if vertices.is_empty() {
            return Err(De::Error::custom("a simplex requires at least one vertex"));
        }
        Ok(Self::with_data(vertices, data))
    }
}

impl<D: Default, const N: usize> From<[Vertex; N]> for Simplex<D> {
    fn from(vertices: [Vertex; N]) -> Self {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_vertices_sorted_and_deduplicated() {
        let simplex: Simplex = Simplex::new([3, 1, 2, 1]);
        assert_eq!(simplex.vertices(), &[1, 2, 3]);
        assert_eq!(simplex.dimension(), 2);
        assert_eq!(simplex.len(), 3);
    }

    #[test]
    #[should_panic(expected = "at least one vertex")]
    fn test_empty_simplex_panics() {
        Simplex::<f64>::new([]);
    }

    #[test]
    fn test_identity_ignores_data() {
        let heavy = Simplex::with_data([0, 1], 5.0);
        let light = Simplex::with_data([1, 0], 0.5);
        assert_eq!(heavy, light);

        let mut set = HashSet::new();
        set.insert(heavy);
        assert!(set.contains(&light));
    }

    #[test]
    fn test_boundary_order() {
        let triangle = Simplex::with_data([0, 1, 2], 7u8);
        let faces: Vec<_> = triangle.boundary().collect();
        assert_eq!(
            faces,
            vec![
                Simplex::new([1, 2]),
                Simplex::new([0, 2]),
                Simplex::new([0, 1])
            ]
        );
        assert!(faces.iter().all(|face| *face.data() == 7));
        assert_eq!(triangle.boundary().len(), 3);
    }

    #[test]
    fn test_vertex_has_empty_boundary() {
        let vertex: Simplex = Simplex::new([4]);
        assert_eq!(vertex.dimension(), 0);
        assert_eq!(vertex.boundary().count(), 0);
    }

    #[test]
    fn test_order_places_faces_first() {
        let edge: Simplex = Simplex::new([5, 9]);
        let triangle: Simplex = Simplex::new([0, 1, 2]);
        let vertex: Simplex = Simplex::new([9]);
        assert!(vertex < edge);
        assert!(edge < triangle);
        assert!(Simplex::<f64>::new([0, 1]) < Simplex::new([0, 2]));
    }

    #[test]
    fn test_face_relations() {
        let triangle: Simplex = Simplex::new([0, 1, 2]);
        let edge: Simplex = Simplex::new([0, 2]);
        let other: Simplex = Simplex::new([0, 3]);

        assert!(edge.is_face_of(&triangle));
        assert!(!other.is_face_of(&triangle));
        assert!(triangle.is_face_of(&triangle));
        assert_eq!(edge.intersection_size(&triangle), 2);
        assert_eq!(other.intersection_size(&triangle), 1);
    }

    #[test]
    fn test_display() {
        let simplex: Simplex = Simplex::new([2, 0, 1]);
        assert_eq!(simplex.to_string(), "{0,1,2}");
        assert_eq!(format!("{simplex:?}"), "{0, 1, 2}");
    }
}
