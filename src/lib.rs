// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `simplicial_spine` crate reduces simplicial complexes to their spines by
//! iterated elementary collapses, keeping a coface index synchronized with the
//! shrinking complex so that admissible pairs are found incrementally.

#![warn(missing_docs)]

pub use crate::complexes::{
    BoundaryIterator, ComplexError, ComplexLike, Simplex, SimplicialComplex, Vertex,
};
pub use crate::reduction::{
    AdmissibleSet, CofaceIndex, CofaceMismatch, CollapseConfig, CollapseEngine, CollapseStats,
    CollapseStatus, IncrementalSpine, NaiveSpine, SpineReduction, naive_spine, spine,
};

/// Search routines of the naive reduction, which rescan the whole complex on
/// every query.
pub mod naive {
    pub use crate::reduction::{admissible_face, is_principal, principal_faces};
}

mod complexes;
mod reduction;
