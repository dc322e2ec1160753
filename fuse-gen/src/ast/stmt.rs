use crate::ast::expr::Expr;
use crate::ast::ty::Ty;
use serde::{Deserialize, Serialize};

/// Prefix shared by every oracle assertion function.
pub const ASSERT_FN_PREFIX: &str = "CompDebugAssert";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Stmt {
    /// Typed declaration such as `int var0=0;` or `int var0;`.
    Decl(DeclStmt),
    /// Re-assignment of an already declared variable such as `varEven0=varOdd1+varOdd0;`.
    Assign(AssignStmt),
    /// Two way branch `if(cond) { .. } else { .. }`.
    If(IfStmt),
    /// Call of a synthesized function such as `func1(var0==0);`.
    Call(CallStmt),
    /// Oracle assertion, emitted as a prototype followed by the call.
    Assert(AssertStmt),
    /// `return expr;`
    Return(ReturnStmt),
}

impl Stmt {
    pub fn kind(&self) -> StmtKind {
        match self {
            Stmt::Decl(_) => StmtKind::Decl,
            Stmt::Assign(_) => StmtKind::Assign,
            Stmt::If(_) => StmtKind::If,
            Stmt::Call(_) => StmtKind::Call,
            Stmt::Assert(_) => StmtKind::Assert,
            Stmt::Return(_) => StmtKind::Return,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclStmt {
    pub name: String,
    pub ty: Ty,
    pub init: Option<Expr>,
}

impl From<DeclStmt> for Stmt {
    fn from(stmt: DeclStmt) -> Stmt {
        Stmt::Decl(stmt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub name: String,
    pub rhs: Expr,
}

impl From<AssignStmt> for Stmt {
    fn from(stmt: AssignStmt) -> Stmt {
        Stmt::Assign(stmt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl From<Vec<Stmt>> for Block {
    fn from(stmts: Vec<Stmt>) -> Block {
        Block { stmts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then: Block,
    pub otherwise: Block,
}

impl From<IfStmt> for Stmt {
    fn from(stmt: IfStmt) -> Stmt {
        Stmt::If(stmt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStmt {
    pub name: String,
    pub args: Vec<Expr>,
}

impl From<CallStmt> for Stmt {
    fn from(stmt: CallStmt) -> Stmt {
        Stmt::Call(stmt)
    }
}

/// `void CompDebugAssert<index>(bool);` followed by `CompDebugAssert<index>(expr);`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertStmt {
    pub index: usize,
    pub expr: Expr,
}

impl AssertStmt {
    pub fn fn_name(&self) -> String {
        format!("{}{}", ASSERT_FN_PREFIX, self.index)
    }
}

impl From<AssertStmt> for Stmt {
    fn from(stmt: AssertStmt) -> Stmt {
        Stmt::Assert(stmt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub expr: Expr,
}

impl From<ReturnStmt> for Stmt {
    fn from(stmt: ReturnStmt) -> Stmt {
        Stmt::Return(stmt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StmtKind {
    Decl,
    Assign,
    If,
    Call,
    Assert,
    Return,
}
