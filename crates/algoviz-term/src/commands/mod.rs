//! CLI command implementations.

pub mod common;
pub mod path;
pub mod sort;
