pub mod util;

mod negative;
