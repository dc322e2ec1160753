//! Generators of C programs whose run time values are known while they are
//! generated, used as fixtures for dataflow analyses.
//!
//! The nested branch generator emits a tree of `if` statements spread over
//! nested functions, the staged network generator emits layers of variables
//! summing variables of the previous layer. Both embed one oracle assertion
//! per leaf or per variable stating the value the generator computed.

pub mod ast;
pub mod context;
pub mod generate;
pub mod generator;
pub mod params;
pub mod runtime;
pub mod statistics;
pub mod utils;
pub mod visitor;
