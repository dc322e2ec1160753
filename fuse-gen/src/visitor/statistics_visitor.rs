use crate::ast::item::Item;
use crate::ast::stmt::{IfStmt, Stmt};
use crate::statistics::program::ProgramStatistics;
use crate::visitor::base_visitor::{walk_if_stmt, walk_item, walk_stmt, Visitor};
use std::cmp::max;

#[derive(Default)]
pub struct StatisticsVisitor {
    pub statistics: ProgramStatistics,
    if_depth: usize,
}

impl Visitor for StatisticsVisitor {
    fn visit_item(&mut self, item: &Item) {
        *self
            .statistics
            .item_counter
            .entry(item.kind())
            .or_insert(0) += 1;
        walk_item(self, item);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        *self
            .statistics
            .stmt_counter
            .entry(stmt.kind())
            .or_insert(0) += 1;
        walk_stmt(self, stmt);
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) {
        self.if_depth += 1;
        self.statistics.max_if_depth = max(self.statistics.max_if_depth, self.if_depth);
        walk_if_stmt(self, stmt);
        self.if_depth -= 1;
    }
}
