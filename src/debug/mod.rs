//! Debug output of the sweep, enabled by the `debugging` feature and configured through environment variables
pub(crate) mod env;
pub(crate) mod svg;
