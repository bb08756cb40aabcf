use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplicial_spine::{Simplex, SimplicialComplex, Vertex};

fn random_edges(rng: &mut StdRng, vertices: u32, probability: f64) -> Vec<(Vertex, Vertex)> {
    let mut edges = Vec::new();
    for first in 0..vertices {
        for second in (first + 1)..vertices {
            if rng.random_bool(probability) {
                edges.push((first, second));
            }
        }
    }
    edges
}

/// Random graph on `vertices` vertices, each edge present with probability
/// `edge_probability`. Isolated vertices are kept.
pub fn random_graph(vertices: u32, edge_probability: f64, seed: u64) -> SimplicialComplex {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut complex: SimplicialComplex = (0..vertices).map(|vertex| Simplex::new([vertex])).collect();
    for (first, second) in random_edges(&mut rng, vertices, edge_probability) {
        complex.insert_with_faces(Simplex::new([first, second]));
    }
    complex
}

/// Random 2-dimensional complex: a [`random_graph`] in which each triangle of
/// edges is filled with probability `triangle_probability`.
pub fn random_complex(
    vertices: u32,
    edge_probability: f64,
    triangle_probability: f64,
    seed: u64,
) -> SimplicialComplex {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges = random_edges(&mut rng, vertices, edge_probability);

    let mut complex: SimplicialComplex = (0..vertices).map(|vertex| Simplex::new([vertex])).collect();
    for (first, second) in edges.iter() {
        complex.insert_with_faces(Simplex::new([*first, *second]));
    }

    for (first, second) in edges.iter() {
        for third in (second + 1)..vertices {
            let closes_triangle = complex.contains(&Simplex::new([*first, third]))
                && complex.contains(&Simplex::new([*second, third]));
            if closes_triangle && rng.random_bool(triangle_probability) {
                complex.insert_with_faces(Simplex::new([*first, *second, third]));
            }
        }
    }
    complex
}
