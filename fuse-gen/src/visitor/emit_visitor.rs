use crate::ast::expr::LitExpr;
use crate::ast::file::CFile;
use crate::ast::function::Function;
use crate::ast::item::GlobalItem;
use crate::ast::op::BinaryOp;
use crate::ast::stmt::{AssertStmt, AssignStmt, CallStmt, DeclStmt, IfStmt, ReturnStmt};
use crate::ast::ty::Ty;
use crate::visitor::base_visitor::{walk_file, Visitor};

/// Visitor used to print a given ast as C source.
pub struct EmitVisitor {
    output: String,
    curr_indent: usize,
    indentation: usize,
}

impl Default for EmitVisitor {
    fn default() -> Self {
        EmitVisitor {
            output: String::new(),
            curr_indent: 0,
            indentation: 4,
        }
    }
}

impl EmitVisitor {
    pub fn output(&self) -> String {
        assert!(
            !self.output.is_empty(),
            "Run visit before accessing emit visitor output"
        );
        self.output.clone()
    }

    fn start_line(&mut self) {
        self.output.push_str(&" ".repeat(self.curr_indent));
    }

    fn emit_decl(&mut self, stmt: &DeclStmt) {
        self.start_line();
        self.output.push_str(&format!("{} {}", stmt.ty, stmt.name));
        if let Some(init) = &stmt.init {
            self.output.push('=');
            self.visit_expr(init);
        }
        self.output.push_str(";\n");
    }
}

impl Visitor for EmitVisitor {
    fn enter_scope(&mut self) {
        self.curr_indent += self.indentation;
    }
    fn exit_scope(&mut self) {
        self.curr_indent -= self.indentation;
    }

    fn visit_name(&mut self, name: &str) {
        self.output.push_str(name);
    }

    fn visit_file(&mut self, file: &CFile) {
        self.output.push_str(&format!("{}\n", file.pragma));
        walk_file(self, file);
    }

    fn visit_global_item(&mut self, item: &GlobalItem) {
        self.emit_decl(&item.decl);
    }

    fn visit_function(&mut self, function: &Function) {
        let params = function
            .params
            .iter()
            .map(|param| format!("{} {}", param.ty, param.name))
            .collect::<Vec<String>>()
            .join(", ");
        self.start_line();
        self.output.push_str(&format!(
            "{}{} {}({}) {{\n",
            if function.is_static { "static " } else { "" },
            function.return_ty,
            function.name,
            params
        ));
        self.visit_block(&function.block);
        self.start_line();
        self.output.push_str("}\n");
    }

    fn visit_decl_stmt(&mut self, stmt: &DeclStmt) {
        self.emit_decl(stmt);
    }

    fn visit_assign_stmt(&mut self, stmt: &AssignStmt) {
        self.start_line();
        self.output.push_str(&format!("{}=", stmt.name));
        self.visit_expr(&stmt.rhs);
        self.output.push_str(";\n");
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) {
        self.start_line();
        self.output.push_str("if(");
        self.visit_expr(&stmt.condition);
        self.output.push_str(") {\n");
        self.visit_block(&stmt.then);
        self.start_line();
        self.output.push_str("} else {\n");
        self.visit_block(&stmt.otherwise);
        self.start_line();
        self.output.push_str("}\n");
    }

    fn visit_call_stmt(&mut self, stmt: &CallStmt) {
        self.start_line();
        self.output.push_str(&format!("{}(", stmt.name));
        for (i, arg) in stmt.args.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.visit_expr(arg);
        }
        self.output.push_str(");\n");
    }

    fn visit_assert_stmt(&mut self, stmt: &AssertStmt) {
        let fn_name = stmt.fn_name();
        self.start_line();
        self.output
            .push_str(&format!("{} {}({});\n", Ty::Void, fn_name, Ty::Bool));
        self.start_line();
        self.output.push_str(&format!("{}(", fn_name));
        self.visit_expr(&stmt.expr);
        self.output.push_str(");\n");
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) {
        self.start_line();
        self.output.push_str("return ");
        self.visit_expr(&stmt.expr);
        self.output.push_str(";\n");
    }

    fn visit_literal_expr(&mut self, expr: &LitExpr) {
        match expr {
            LitExpr::Int(i) => self.output.push_str(&i.to_string()),
            LitExpr::Bool(b) => self.output.push_str(&b.to_string()),
        }
    }

    fn visit_binary_op(&mut self, op: &BinaryOp) {
        self.output.push_str(&op.to_string());
    }
}
