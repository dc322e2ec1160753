#![allow(dead_code)]

use fuse_gen::ast::expr::{Expr, LitExpr};
use fuse_gen::ast::file::CFile;
use fuse_gen::ast::function::Function;
use fuse_gen::ast::item::Item;
use fuse_gen::ast::op::BinaryOp;
use fuse_gen::ast::stmt::{Block, Stmt};
use std::collections::{BTreeSet, HashMap};

/// Walks a generated file the way it would execute, recording every assertion
/// it meets. With `explore_all` both arms of every branch are entered, so every
/// leaf is reached while the variables keep their actual values.
pub struct Walker<'a> {
    functions: HashMap<&'a str, &'a Function>,
    env: HashMap<String, Option<i64>>,
    explore_all: bool,
    pub asserts: Vec<(usize, Option<bool>)>,
}

impl<'a> Walker<'a> {
    pub fn run(file: &'a CFile, explore_all: bool) -> Walker<'a> {
        let mut walker = Walker {
            functions: HashMap::new(),
            env: HashMap::new(),
            explore_all,
            asserts: vec![],
        };
        for item in &file.items {
            match item {
                // Globals are zero initialized.
                Item::Global(global) => {
                    let value = match &global.decl.init {
                        Some(init) => walker.eval(init),
                        None => Some(0),
                    };
                    walker.env.insert(global.decl.name.clone(), value);
                }
                Item::Function(item) => {
                    walker
                        .functions
                        .insert(item.function.name.as_str(), &item.function);
                }
                _ => unreachable!(),
            }
        }
        let main = walker.functions["main"];
        walker.exec_block(&main.block);
        walker
    }

    fn call(&mut self, name: &str, args: Vec<Option<i64>>) {
        let function = self.functions[name];
        let saved: Vec<_> = function
            .params
            .iter()
            .zip(args)
            .map(|(param, arg)| (param.name.clone(), self.env.insert(param.name.clone(), arg)))
            .collect();
        self.exec_block(&function.block);
        for (name, value) in saved {
            match value {
                Some(value) => self.env.insert(name, value),
                None => self.env.remove(&name),
            };
        }
    }

    fn exec_block(&mut self, block: &Block) {
        for stmt in &block.stmts {
            match stmt {
                Stmt::Decl(decl) => {
                    let value = decl.init.as_ref().and_then(|init| self.eval(init));
                    self.env.insert(decl.name.clone(), value);
                }
                Stmt::Assign(assign) => {
                    assert!(self.env.contains_key(&assign.name), "{} undeclared", assign.name);
                    let value = self.eval(&assign.rhs);
                    self.env.insert(assign.name.clone(), value);
                }
                Stmt::If(stmt) => {
                    let cond = self.eval(&stmt.condition);
                    if self.explore_all {
                        self.exec_block(&stmt.then);
                        self.exec_block(&stmt.otherwise);
                    } else if cond != Some(0) {
                        self.exec_block(&stmt.then);
                    } else {
                        self.exec_block(&stmt.otherwise);
                    }
                }
                Stmt::Call(call) => {
                    let args = call.args.iter().map(|arg| self.eval(arg)).collect();
                    self.call(&call.name, args);
                }
                Stmt::Assert(assert) => {
                    let value = self.eval(&assert.expr).map(|v| v != 0);
                    self.asserts.push((assert.index, value));
                }
                Stmt::Return(_) => return,
                _ => unreachable!(),
            }
        }
    }

    /// `None` when an uninitialized local is read.
    fn eval(&self, expr: &Expr) -> Option<i64> {
        match expr {
            Expr::Literal(LitExpr::Int(i)) => Some(*i),
            Expr::Literal(LitExpr::Bool(b)) => Some(*b as i64),
            Expr::Ident(ident) => *self
                .env
                .get(&ident.name)
                .unwrap_or_else(|| panic!("{} undeclared", ident.name)),
            Expr::Binary(binary) => {
                let lhs = self.eval(&binary.lhs)?;
                let rhs = self.eval(&binary.rhs)?;
                Some(match binary.op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Eq => (lhs == rhs) as i64,
                    BinaryOp::And => (lhs != 0 && rhs != 0) as i64,
                })
            }
            _ => unreachable!(),
        }
    }
}

/// Indices of the `CompDebugAssert<n>(...)` calls, prototypes excluded.
pub fn assert_indices(program: &str) -> Vec<usize> {
    program
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("void "))
        .filter_map(|line| line.strip_prefix("CompDebugAssert"))
        .map(|rest| rest[..rest.find('(').unwrap()].parse().unwrap())
        .collect()
}

/// Names of the functions defined in `program`, with the brace depth at their definition.
pub fn function_definitions(program: &str) -> Vec<(String, usize)> {
    let mut depth = 0usize;
    let mut res = vec![];
    for line in program.lines() {
        let trimmed = line.trim();
        if trimmed.ends_with(") {") && !trimmed.starts_with("if(") {
            let header = trimmed.trim_start_matches("static ");
            let name = header
                .split_whitespace()
                .nth(1)
                .and_then(|s| s.split('(').next())
                .unwrap()
                .to_string();
            res.push((name, depth));
        }
        depth += trimmed.matches('{').count();
        depth -= trimmed.matches('}').count();
    }
    res
}

pub fn unique<T: Ord + Clone>(items: &[T]) -> bool {
    items.iter().cloned().collect::<BTreeSet<T>>().len() == items.len()
}
