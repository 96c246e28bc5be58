pub mod formats;

mod diagonal_list;
pub use diagonal_list::DiagonalList;
mod diagonal_format;
pub use diagonal_format::{DiagonalFormat, DiagonalBuilder};
pub mod render;
