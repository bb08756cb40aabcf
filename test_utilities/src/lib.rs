pub use full_simplex::{full_simplex, hollow_triangle, simplex_boundary};
pub use random_complex::{random_complex, random_graph};
pub use surfaces::{cone, grid_disk, grid_torus, punctured_torus};

mod full_simplex;
mod random_complex;
mod surfaces;
