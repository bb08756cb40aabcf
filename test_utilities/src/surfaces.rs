use simplicial_spine::{Simplex, SimplicialComplex, Vertex};

fn grid_triangles(rows: u32, columns: u32, vertex: impl Fn(u32, u32) -> Vertex) -> Vec<Simplex> {
    let mut triangles = Vec::new();
    for row in 0..rows {
        for column in 0..columns {
            let corner = vertex(row, column);
            let right = vertex(row, column + 1);
            let below = vertex(row + 1, column);
            let diagonal = vertex(row + 1, column + 1);
            triangles.push(Simplex::new([corner, right, diagonal]));
            triangles.push(Simplex::new([corner, below, diagonal]));
        }
    }
    triangles
}

/// A triangulated rectangle of `rows` by `columns` squares, each split into two
/// triangles along its diagonal. Contractible.
pub fn grid_disk(rows: u32, columns: u32) -> SimplicialComplex {
    let triangles = grid_triangles(rows, columns, |row, column| row * (columns + 1) + column);
    SimplicialComplex::from_maximal_simplices(triangles)
}

/// The `size` by `size` grid with opposite sides identified. Requires
/// `size >= 3` to be a simplicial complex.
pub fn grid_torus(size: u32) -> SimplicialComplex {
    assert!(size >= 3, "torus grid must be at least 3 by 3");
    let triangles = grid_triangles(size, size, |row, column| {
        (row % size) * size + column % size
    });
    SimplicialComplex::from_maximal_simplices(triangles)
}

/// [`grid_torus`] without its first triangle. Homotopy-equivalent to a wedge of
/// two circles.
pub fn punctured_torus(size: u32) -> SimplicialComplex {
    let mut torus = grid_torus(size);
    let removed = torus
        .range(2)
        .next()
        .cloned()
        .expect("torus has triangles");
    torus.remove_unchecked(&removed);
    torus
}

/// The cone over `base` with apex vertex one greater than any vertex of `base`.
pub fn cone(base: &SimplicialComplex) -> SimplicialComplex {
    let apex = base
        .iter()
        .flat_map(|simplex| simplex.vertices().iter().copied())
        .max()
        .map_or(0, |vertex| vertex + 1);

    let mut complex = base.clone();
    complex.insert_with_faces(Simplex::new([apex]));
    for simplex in base.iter() {
        complex.insert_with_faces(Simplex::new(
            simplex.vertices().iter().copied().chain([apex]),
        ));
    }
    complex
}
