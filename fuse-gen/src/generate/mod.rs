//! Generators building the program trees.

pub mod nested_if;
pub mod network;
