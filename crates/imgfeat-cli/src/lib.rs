//! imgfeat CLI library.
//!
//! Command implementations live here so they can be driven from tests as
//! well as from the `imgfeat` binary.

pub mod commands;
pub mod settings;
