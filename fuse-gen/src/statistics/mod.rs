pub mod generation;
pub mod program;
