use crate::ast::item::ItemKind;
use crate::ast::stmt::StmtKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shape of an emitted program, collected by walking its tree.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct ProgramStatistics {
    pub item_counter: BTreeMap<ItemKind, usize>,
    pub stmt_counter: BTreeMap<StmtKind, usize>,
    /// Deepest `if` nesting inside any single function.
    pub max_if_depth: usize,
}

impl ProgramStatistics {
    pub fn items(&self, kind: ItemKind) -> usize {
        self.item_counter.get(&kind).copied().unwrap_or(0)
    }

    pub fn stmts(&self, kind: StmtKind) -> usize {
        self.stmt_counter.get(&kind).copied().unwrap_or(0)
    }
}
