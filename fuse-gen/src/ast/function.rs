use crate::ast::expr::Expr;
use crate::ast::stmt::{Block, ReturnStmt, Stmt};
use crate::ast::ty::Ty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: Ty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// Emitted with internal linkage (`static`).
    pub is_static: bool,
    pub params: Vec<Param>,
    pub return_ty: Ty,
    pub block: Block,
}

impl Function {
    /// `int main()` running `stmts` and returning `0`.
    pub fn main_fn(mut stmts: Vec<Stmt>) -> Function {
        stmts.push(ReturnStmt { expr: Expr::int(0) }.into());
        Function {
            name: String::from("main"),
            is_static: false,
            params: vec![],
            return_ty: Ty::Int,
            block: stmts.into(),
        }
    }
}
