use simplicial_spine::{Simplex, SimplicialComplex};

/// The `dimension`-simplex with all of its faces.
pub fn full_simplex(dimension: u32) -> SimplicialComplex {
    SimplicialComplex::from_maximal_simplices([Simplex::new(0..=dimension)])
}

/// All proper faces of the `dimension`-simplex, a triangulated sphere of
/// dimension `dimension - 1`.
pub fn simplex_boundary(dimension: u32) -> SimplicialComplex {
    let simplex: Simplex = Simplex::new(0..=dimension);
    SimplicialComplex::from_maximal_simplices(simplex.boundary())
}

pub fn hollow_triangle() -> SimplicialComplex {
    simplex_boundary(2)
}
