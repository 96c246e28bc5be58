pub mod polygon;
mod check;
mod vtest;
use std::{env, path};

pub use vtest::VTest;
pub use check::check_triangulation;

pub fn polygons_path() -> path::PathBuf {
    path::Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("resources").join("polygons")
}
