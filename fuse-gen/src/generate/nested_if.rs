//! Nested branch generator.
//!
//! Builds a tree of `if`/`else` statements, `branches_per_function` levels per
//! function, and continues the tree in a new function at every leaf until
//! `function_depth` functions are nested. Every final leaf gets an oracle
//! assertion over the path condition reaching it.
//!
//! The recursion returns the body of the current function separately from the
//! functions created below it and from the hoisted global declarations, so the
//! emitted functions are all top level items.

use crate::ast::expr::Expr;
use crate::ast::file::{CFile, Pragma};
use crate::ast::function::{Function, Param};
use crate::ast::item::{FunctionItem, GlobalItem, Item};
use crate::ast::stmt::{AssertStmt, CallStmt, DeclStmt, IfStmt, Stmt};
use crate::ast::ty::Ty;
use crate::context::Context;
use crate::params::NestedIfParams;
use rpds::Vector;
use std::iter;
use tracing::debug;

/// Name of the parameter carrying the caller's path condition.
pub const PATH_TEST_PARAM: &str = "pathTest";

/// Conjunction of the equality tests met since the start of the current function.
/// Extending it yields a new condition, so sibling arms never share one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCondition {
    tests: Vector<Expr>,
}

impl PathCondition {
    pub fn and(&self, test: Expr) -> PathCondition {
        PathCondition {
            tests: self.tests.push_back(test),
        }
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// The conjunction, `true` when no test was met.
    pub fn to_expr(&self) -> Expr {
        Expr::conjunction(self.tests.iter().cloned())
    }

    /// `pathTest && <tests>`, the condition asserted at a leaf.
    pub fn to_assert_expr(&self) -> Expr {
        Expr::conjunction(
            iter::once(Expr::ident(PATH_TEST_PARAM)).chain(self.tests.iter().cloned()),
        )
    }
}

/// Result of building one level of the branch tree.
#[derive(Debug, Default)]
pub struct BranchOutput {
    /// Statements belonging to the function being built.
    pub curr_function: Vec<Stmt>,
    /// Functions created below this level, in emission order.
    pub deeper_functions: Vec<Function>,
    /// Condition variables hoisted to global scope.
    pub global_decls: Vec<DeclStmt>,
}

impl BranchOutput {
    pub fn generate(
        ctx: &mut Context,
        params: &NestedIfParams,
        function_depth: usize,
        if_depth: usize,
        path: &PathCondition,
    ) -> BranchOutput {
        if if_depth == params.branches_per_function {
            BranchOutput::generate_leaf(ctx, params, function_depth, path)
        } else {
            BranchOutput::generate_branch(ctx, params, function_depth, if_depth, path)
        }
    }

    fn generate_leaf(
        ctx: &mut Context,
        params: &NestedIfParams,
        function_depth: usize,
        path: &PathCondition,
    ) -> BranchOutput {
        match FunctionOutput::generate(ctx, params, function_depth + 1) {
            Some(callee) => BranchOutput {
                curr_function: vec![CallStmt {
                    name: callee.name,
                    args: vec![path.to_expr()],
                }
                .into()],
                deeper_functions: callee.functions,
                global_decls: callee.global_decls,
            },
            None => BranchOutput {
                curr_function: vec![AssertStmt {
                    index: ctx.create_assert_index(),
                    expr: path.to_assert_expr(),
                }
                .into()],
                ..BranchOutput::default()
            },
        }
    }

    fn generate_branch(
        ctx: &mut Context,
        params: &NestedIfParams,
        function_depth: usize,
        if_depth: usize,
        path: &PathCondition,
    ) -> BranchOutput {
        let mut res = BranchOutput::default();
        let var = ctx.create_cond_var();
        let decl = DeclStmt {
            name: var.name(),
            ty: Ty::Int,
            init: params.const_init_vars.then(|| Expr::int(var.value())),
        };
        if params.global_vars {
            res.global_decls.push(decl);
        } else {
            res.curr_function.push(decl.into());
        }

        let test = Expr::equals(Expr::ident(var.name()), Expr::int(var.value()));
        // The else arm is extended with the same test as the then arm.
        let then = BranchOutput::generate(
            ctx,
            params,
            function_depth,
            if_depth + 1,
            &path.and(test.clone()),
        );
        let otherwise = BranchOutput::generate(
            ctx,
            params,
            function_depth,
            if_depth + 1,
            &path.and(test.clone()),
        );

        res.curr_function.push(
            IfStmt {
                condition: test,
                then: then.curr_function.into(),
                otherwise: otherwise.curr_function.into(),
            }
            .into(),
        );
        res.deeper_functions.extend(then.deeper_functions);
        res.deeper_functions.extend(otherwise.deeper_functions);
        res.global_decls.extend(then.global_decls);
        res.global_decls.extend(otherwise.global_decls);
        res
    }
}

/// A synthesized function together with everything created below it.
#[derive(Debug)]
pub struct FunctionOutput {
    pub name: String,
    /// Deeper functions first, the synthesized function last.
    pub functions: Vec<Function>,
    pub global_decls: Vec<DeclStmt>,
}

impl FunctionOutput {
    /// Returns `None` once `function_depth` functions are nested.
    pub fn generate(
        ctx: &mut Context,
        params: &NestedIfParams,
        function_depth: usize,
    ) -> Option<FunctionOutput> {
        if function_depth == params.function_depth {
            return None;
        }
        let name = ctx.create_function_name();
        let body =
            BranchOutput::generate(ctx, params, function_depth, 0, &PathCondition::default());
        debug!(
            function = %name,
            function_depth,
            deeper = body.deeper_functions.len(),
            "synthesized function"
        );

        let mut functions = body.deeper_functions;
        functions.push(Function {
            name: name.clone(),
            is_static: true,
            params: vec![Param {
                name: PATH_TEST_PARAM.to_string(),
                ty: Ty::Bool,
            }],
            return_ty: Ty::Void,
            block: body.curr_function.into(),
        });
        Some(FunctionOutput {
            name,
            functions,
            global_decls: body.global_decls,
        })
    }
}

/// Builds the whole file and returns it with the name of the entry function,
/// which is `None` when `function_depth` is zero.
pub fn generate_file(ctx: &mut Context, params: &NestedIfParams) -> (CFile, Option<String>) {
    let mut items: Vec<Item> = vec![];
    let mut main_stmts: Vec<Stmt> = vec![];
    let entry_function = FunctionOutput::generate(ctx, params, 0).map(|entry| {
        items.extend(
            entry
                .global_decls
                .into_iter()
                .map(|decl| GlobalItem { decl }.into()),
        );
        items.extend(
            entry
                .functions
                .into_iter()
                .map(|function| FunctionItem { function }.into()),
        );
        main_stmts.push(
            CallStmt {
                name: entry.name.clone(),
                args: vec![Expr::bool(true)],
            }
            .into(),
        );
        entry.name
    });
    items.push(
        FunctionItem {
            function: Function::main_fn(main_stmts),
        }
        .into(),
    );
    (
        CFile {
            pragma: Pragma::DeadPathConstProp,
            items,
        },
        entry_function,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(function_depth: usize, branches_per_function: usize) -> NestedIfParams {
        NestedIfParams {
            function_depth,
            branches_per_function,
            ..NestedIfParams::default()
        }
    }

    #[test]
    fn path_condition_arms_are_independent() {
        let root = PathCondition::default().and(Expr::ident("a"));
        let left = root.and(Expr::ident("b"));
        let right = root.and(Expr::ident("c"));
        assert_eq!(root.len(), 1);
        assert_eq!(left.len(), 2);
        assert_ne!(left, right);
    }

    #[test]
    fn empty_path_renders_true() {
        let path = PathCondition::default();
        assert!(path.is_empty());
        assert_eq!(path.to_expr(), Expr::bool(true));
        assert_eq!(path.to_assert_expr(), Expr::ident(PATH_TEST_PARAM));
    }

    #[test]
    fn terminal_function_depth_yields_no_function() {
        let mut ctx = Context::new(Some(0));
        assert!(FunctionOutput::generate(&mut ctx, &params(2, 1), 2).is_none());
        assert_eq!(ctx.statistics.functions, 0);
    }

    #[test]
    fn one_function_two_levels_has_four_leaves() {
        let mut ctx = Context::new(Some(0));
        let entry = FunctionOutput::generate(&mut ctx, &params(1, 2), 0).unwrap();
        assert_eq!(entry.name, "func0");
        assert_eq!(entry.functions.len(), 1);
        assert!(entry.global_decls.is_empty());
        assert_eq!(ctx.statistics.assertions, 4);
        assert_eq!(ctx.statistics.condition_vars, 3);
    }

    #[test]
    fn every_leaf_opens_a_deeper_function() {
        let mut ctx = Context::new(Some(0));
        let entry = FunctionOutput::generate(&mut ctx, &params(2, 1), 0).unwrap();
        // func0 has two leaves, each calling its own function.
        assert_eq!(entry.functions.len(), 3);
        assert_eq!(entry.functions.last().unwrap().name, "func0");
        assert_eq!(ctx.statistics.assertions, 4);
    }

    #[test]
    fn global_vars_are_hoisted() {
        let mut ctx = Context::new(Some(0));
        let params = NestedIfParams {
            global_vars: true,
            ..params(2, 1)
        };
        let entry = FunctionOutput::generate(&mut ctx, &params, 0).unwrap();
        let names: Vec<String> = entry.global_decls.iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["var0", "var1", "var2"]);
        assert!(entry
            .functions
            .iter()
            .flat_map(|f| f.block.stmts.iter())
            .all(|stmt| !matches!(stmt, Stmt::Decl(_))));
    }

    #[test]
    fn zero_function_depth_leaves_main_empty() {
        let mut ctx = Context::new(Some(0));
        let (file, entry) = generate_file(&mut ctx, &params(0, 3));
        assert!(entry.is_none());
        assert_eq!(file.items.len(), 1);
        assert_eq!(ctx.statistics.assertions, 0);
    }
}
