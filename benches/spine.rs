use simplicial_spine::{naive_spine, spine};
use test_utilities::{full_simplex, grid_disk, punctured_torus, random_complex};

fn main() {
    divan::main();
}

#[divan::bench(args = [4, 6, 8, 10], sample_count = 10)]
fn spine_full_simplex(bencher: divan::Bencher, dimension: u32) {
    bencher
        .with_inputs(|| full_simplex(dimension))
        .bench_local_refs(|complex| {
            let reduced = spine(complex);

            // Don't optimize away..
            assert!(!reduced.is_empty());
        });
}

#[divan::bench(args = [8, 16, 32], sample_count = 10)]
fn spine_grid_disk(bencher: divan::Bencher, size: u32) {
    bencher
        .with_inputs(|| grid_disk(size, size))
        .bench_local_refs(|complex| {
            let reduced = spine(complex);

            // Don't optimize away..
            assert_eq!(reduced.len(), 1);
        });
}

#[divan::bench(args = [8, 16, 32], sample_count = 10)]
fn spine_punctured_torus(bencher: divan::Bencher, size: u32) {
    bencher
        .with_inputs(|| punctured_torus(size))
        .bench_local_refs(|complex| {
            let reduced = spine(complex);

            // Don't optimize away..
            assert_eq!(reduced.euler_characteristic(), -1);
        });
}

#[divan::bench(args = [20, 40], sample_count = 10)]
fn spine_random_complex(bencher: divan::Bencher, vertices: u32) {
    bencher
        .with_inputs(|| random_complex(vertices, 0.3, 0.5, 0))
        .bench_local_refs(|complex| spine(complex));
}

#[divan::bench(args = [20, 40], sample_count = 10)]
fn naive_spine_random_complex(bencher: divan::Bencher, vertices: u32) {
    bencher
        .with_inputs(|| random_complex(vertices, 0.3, 0.5, 0))
        .bench_local_refs(|complex| naive_spine(complex));
}
