//! Passes over the program tree.

pub mod base_visitor;
pub mod emit_visitor;
pub mod statistics_visitor;
