use simplicial_spine::{
    CollapseConfig, IncrementalSpine, NaiveSpine, SimplicialComplex, SpineReduction, naive_spine,
    spine,
};
use test_utilities::{
    cone, full_simplex, grid_disk, grid_torus, hollow_triangle, punctured_torus, random_complex,
    random_graph, simplex_boundary,
};

fn verify_agreement(complex: &SimplicialComplex) {
    let incremental = spine(complex);
    let naive = naive_spine(complex);

    assert_eq!(incremental, naive, "incremental and naive spines differ");
    assert_eq!(incremental.count_by_dimension(), naive.count_by_dimension());
    assert_eq!(
        incremental.euler_characteristic(),
        complex.euler_characteristic()
    );
}

#[test]
fn agreement_on_full_simplices() {
    for dimension in 0..=3 {
        verify_agreement(&full_simplex(dimension));
    }
}

#[test]
fn agreement_on_spheres_and_torus() {
    verify_agreement(&hollow_triangle());
    verify_agreement(&simplex_boundary(3));
    verify_agreement(&grid_torus(3));
}

#[test]
fn agreement_on_contractible_complexes() {
    verify_agreement(&grid_disk(2, 3));
    verify_agreement(&cone(&hollow_triangle()));
    for seed in 0..4 {
        verify_agreement(&cone(&random_graph(8, 0.4, seed)));
    }
}

#[test]
fn agreement_on_random_graphs() {
    for seed in 0..10 {
        verify_agreement(&random_graph(14, 0.2, seed));
    }
}

#[test]
fn agreement_on_punctured_tori() {
    for size in 3..=5 {
        verify_agreement(&punctured_torus(size));
    }
}

#[test]
fn agreement_on_random_complexes() {
    for seed in 0..20 {
        verify_agreement(&random_complex(10, 0.5, 0.5, seed));
        verify_agreement(&random_complex(12, 0.4, 0.6, seed));
        verify_agreement(&random_complex(8, 0.7, 0.8, seed));
    }
}

#[test]
fn naive_spine_of_punctured_torus_is_graph() {
    let complex = punctured_torus(3);
    let naive = naive_spine(&complex);
    assert_eq!(naive.dimension(), 1);
    assert_eq!(naive.euler_characteristic(), -1);
    assert_eq!(naive_spine(&naive), naive);
}

fn verify_reducer<R: SpineReduction>(reducer: R, complex: &SimplicialComplex) {
    let reduced = reducer.reduce(complex);
    assert!(reduced.is_face_closed());
    assert!(reduced.len() <= complex.len());
    assert_eq!(
        reduced.euler_characteristic(),
        complex.euler_characteristic()
    );
    assert_eq!(reducer.reduce(&reduced), reduced);
}

#[test]
fn reducers_share_the_trait() {
    for seed in 0..3 {
        let complex = random_complex(10, 0.5, 0.5, seed);
        verify_reducer(NaiveSpine, &complex);
        verify_reducer(IncrementalSpine::default(), &complex);
        verify_reducer(
            IncrementalSpine::new(CollapseConfig::new(None, true)),
            &complex,
        );
    }
}
