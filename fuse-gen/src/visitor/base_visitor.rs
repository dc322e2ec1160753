use crate::ast::expr::{BinaryExpr, Expr, IdentExpr, LitExpr};
use crate::ast::file::CFile;
use crate::ast::function::Function;
use crate::ast::item::{FunctionItem, GlobalItem, Item};
use crate::ast::op::BinaryOp;
use crate::ast::stmt::{
    AssertStmt, AssignStmt, Block, CallStmt, DeclStmt, IfStmt, ReturnStmt, Stmt,
};

/// AST visitor trait.
/// The default implementation visits in source order.
pub trait Visitor: Sized {
    fn enter_scope(&mut self) {}
    fn exit_scope(&mut self) {}

    fn visit_name(&mut self, _name: &str) {}

    fn visit_file(&mut self, file: &CFile) {
        walk_file(self, file);
    }

    fn visit_function(&mut self, function: &Function) {
        walk_function(self, function);
    }

    // Items
    fn visit_item(&mut self, item: &Item) {
        walk_item(self, item);
    }
    fn visit_global_item(&mut self, item: &GlobalItem) {
        walk_global_item(self, item);
    }
    fn visit_function_item(&mut self, item: &FunctionItem) {
        walk_function_item(self, item);
    }

    // Statements
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_decl_stmt(&mut self, stmt: &DeclStmt) {
        walk_decl_stmt(self, stmt);
    }
    fn visit_assign_stmt(&mut self, stmt: &AssignStmt) {
        walk_assign_stmt(self, stmt);
    }
    fn visit_if_stmt(&mut self, stmt: &IfStmt) {
        walk_if_stmt(self, stmt);
    }
    fn visit_call_stmt(&mut self, stmt: &CallStmt) {
        walk_call_stmt(self, stmt);
    }
    fn visit_assert_stmt(&mut self, stmt: &AssertStmt) {
        walk_assert_stmt(self, stmt);
    }
    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) {
        walk_return_stmt(self, stmt);
    }

    // Expressions
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
    fn visit_literal_expr(&mut self, _expr: &LitExpr) {}
    fn visit_ident_expr(&mut self, expr: &IdentExpr) {
        walk_ident_expr(self, expr);
    }
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) {
        walk_binary_expr(self, expr);
    }

    // Operations
    fn visit_binary_op(&mut self, _op: &BinaryOp) {}
}

pub fn walk_file<V: Visitor>(visitor: &mut V, file: &CFile) {
    for item in &file.items {
        visitor.visit_item(item);
    }
}

pub fn walk_function<V: Visitor>(visitor: &mut V, function: &Function) {
    visitor.visit_name(&function.name);
    visitor.visit_block(&function.block);
}

pub fn walk_item<V: Visitor>(visitor: &mut V, item: &Item) {
    match item {
        Item::Global(item) => visitor.visit_global_item(item),
        Item::Function(item) => visitor.visit_function_item(item),
    }
}

pub fn walk_global_item<V: Visitor>(visitor: &mut V, item: &GlobalItem) {
    visitor.visit_decl_stmt(&item.decl);
}

pub fn walk_function_item<V: Visitor>(visitor: &mut V, item: &FunctionItem) {
    visitor.visit_function(&item.function);
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    visitor.enter_scope();
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
    visitor.exit_scope();
}

pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Decl(stmt) => visitor.visit_decl_stmt(stmt),
        Stmt::Assign(stmt) => visitor.visit_assign_stmt(stmt),
        Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
        Stmt::Call(stmt) => visitor.visit_call_stmt(stmt),
        Stmt::Assert(stmt) => visitor.visit_assert_stmt(stmt),
        Stmt::Return(stmt) => visitor.visit_return_stmt(stmt),
    }
}

pub fn walk_decl_stmt<V: Visitor>(visitor: &mut V, stmt: &DeclStmt) {
    visitor.visit_name(&stmt.name);
    if let Some(init) = &stmt.init {
        visitor.visit_expr(init);
    }
}

pub fn walk_assign_stmt<V: Visitor>(visitor: &mut V, stmt: &AssignStmt) {
    visitor.visit_name(&stmt.name);
    visitor.visit_expr(&stmt.rhs);
}

pub fn walk_if_stmt<V: Visitor>(visitor: &mut V, stmt: &IfStmt) {
    visitor.visit_expr(&stmt.condition);
    visitor.visit_block(&stmt.then);
    visitor.visit_block(&stmt.otherwise);
}

pub fn walk_call_stmt<V: Visitor>(visitor: &mut V, stmt: &CallStmt) {
    visitor.visit_name(&stmt.name);
    for arg in &stmt.args {
        visitor.visit_expr(arg);
    }
}

pub fn walk_assert_stmt<V: Visitor>(visitor: &mut V, stmt: &AssertStmt) {
    visitor.visit_expr(&stmt.expr);
}

pub fn walk_return_stmt<V: Visitor>(visitor: &mut V, stmt: &ReturnStmt) {
    visitor.visit_expr(&stmt.expr);
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Literal(expr) => visitor.visit_literal_expr(expr),
        Expr::Ident(expr) => visitor.visit_ident_expr(expr),
        Expr::Binary(expr) => visitor.visit_binary_expr(expr),
    }
}

pub fn walk_ident_expr<V: Visitor>(visitor: &mut V, expr: &IdentExpr) {
    visitor.visit_name(&expr.name);
}

pub fn walk_binary_expr<V: Visitor>(visitor: &mut V, expr: &BinaryExpr) {
    visitor.visit_expr(&expr.lhs);
    visitor.visit_binary_op(&expr.op);
    visitor.visit_expr(&expr.rhs);
}
