// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ComplexLike;

/// The interface for a type reducing a complex to its spine by iterated
/// elementary collapses.
///
/// An elementary collapse removes a principal cell (one that is not a face of
/// any other cell) together with a free face of it (a face whose only coface
/// is the principal cell). Collapses preserve the homotopy type; once none is
/// possible the remaining complex is a spine of the original.
///
/// Implementations must leave `complex` untouched and return a new complex
/// that is closed under taking faces and no larger than `complex`. Two
/// implementations may return different spines of the same complex, since
/// which pair is collapsed first is their own choice.
pub trait SpineReduction {
    /// Return the spine of `complex`.
    fn reduce<C>(&self, complex: &C) -> C
    where
        C: ComplexLike + Clone;
}
