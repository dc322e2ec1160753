//! Type nodes.

use std::fmt::{Display, Formatter};

/// The handful of C types the generators declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Ty {
    Void,
    Bool,
    Int,
}

impl Display for Ty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Ty::Void => "void",
            Ty::Bool => "bool",
            Ty::Int => "int",
        })
    }
}
