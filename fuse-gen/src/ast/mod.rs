//! Abstract syntax tree of the generated programs.

pub mod expr;
pub mod file;
pub mod function;
pub mod item;
pub mod op;
pub mod stmt;
pub mod ty;
