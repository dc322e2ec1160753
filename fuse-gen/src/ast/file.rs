//! File nodes.

use crate::ast::item::Item;
use std::fmt::{Display, Formatter};

/// Analysis configuration selected by the leading `#pragma fuse` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pragma {
    /// Tight composition of dead path elimination and constant propagation.
    DeadPathConstProp,
    /// Constant propagation.
    ConstProp,
    /// Constant propagation over SSA form.
    SsaConstProp,
}

impl Display for Pragma {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Pragma::DeadPathConstProp => "#pragma fuse lc(t(dp,cp))",
            Pragma::ConstProp => "#pragma fuse lc(cp)",
            Pragma::SsaConstProp => "#pragma fuse lc(SSA:cp)",
        })
    }
}

/// Generated C file. The root node of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CFile {
    pub pragma: Pragma,
    pub items: Vec<Item>,
}
