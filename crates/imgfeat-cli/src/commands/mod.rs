//! CLI command implementations

pub mod extract;
pub mod normalize;
pub mod plot;
pub mod reduce;
pub mod run;
pub mod summary;
