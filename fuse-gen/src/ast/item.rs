use crate::ast::function::Function;
use crate::ast::stmt::DeclStmt;
use serde::{Deserialize, Serialize};

/// Top level item. Functions only ever appear here, never inside another function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Item {
    Global(GlobalItem),
    Function(FunctionItem),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Global(_) => ItemKind::Global,
            Item::Function(_) => ItemKind::Function,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalItem {
    pub decl: DeclStmt,
}

impl From<GlobalItem> for Item {
    fn from(item: GlobalItem) -> Item {
        Item::Global(item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionItem {
    pub function: Function,
}

impl From<FunctionItem> for Item {
    fn from(item: FunctionItem) -> Item {
        Item::Function(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ItemKind {
    Global,
    Function,
}
