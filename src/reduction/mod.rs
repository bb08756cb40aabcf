// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use admissible::AdmissibleSet;
pub use coface::{CofaceIndex, CofaceMismatch};
pub use collapse::{
    CollapseConfig, CollapseEngine, CollapseStats, CollapseStatus, IncrementalSpine, spine,
};
pub use naive::{NaiveSpine, admissible_face, is_principal, naive_spine, principal_faces};
pub use traits::SpineReduction;

mod admissible;
mod coface;
mod collapse;
mod naive;
mod traits;
