use crate::ast::op::BinaryOp;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
/// Expression of the generated program.
pub enum Expr {
    /// Literal such as `5` or `true`.
    Literal(LitExpr),
    /// A variable or parameter access such as `var0`.
    Ident(IdentExpr),
    /// Binary operation such as `a+b` or `var0==0`.
    Binary(BinaryExpr),
}

impl Expr {
    pub fn bool(b: bool) -> Expr {
        Expr::Literal(LitExpr::Bool(b))
    }

    pub fn int(i: i64) -> Expr {
        Expr::Literal(LitExpr::Int(i))
    }

    pub fn ident<S: Into<String>>(name: S) -> Expr {
        Expr::Ident(IdentExpr { name: name.into() })
    }

    pub fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    /// Equality test `lhs==rhs`.
    pub fn equals(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(lhs, BinaryOp::Eq, rhs)
    }

    /// Left associated chain of `op` over `exprs`, or `empty` when there are no operands.
    pub fn fold(exprs: impl IntoIterator<Item = Expr>, op: BinaryOp, empty: Expr) -> Expr {
        exprs
            .into_iter()
            .reduce(|lhs, rhs| Expr::binary(lhs, op, rhs))
            .unwrap_or(empty)
    }

    /// Sum of the operands, `0` for an empty sum.
    pub fn sum(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::fold(exprs, BinaryOp::Add, Expr::int(0))
    }

    /// Conjunction of the operands, `true` for an empty conjunction.
    pub fn conjunction(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::fold(exprs, BinaryOp::And, Expr::bool(true))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitExpr {
    /// Integer literal.
    Int(i64),
    /// Boolean literal.
    Bool(bool),
}

impl From<LitExpr> for Expr {
    fn from(expr: LitExpr) -> Expr {
        Expr::Literal(expr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentExpr {
    pub name: String,
}

impl From<IdentExpr> for Expr {
    fn from(expr: IdentExpr) -> Expr {
        Expr::Ident(expr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Expr {
        Expr::Binary(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_folds_use_identity() {
        assert_eq!(Expr::sum(vec![]), Expr::int(0));
        assert_eq!(Expr::conjunction(vec![]), Expr::bool(true));
    }

    #[test]
    fn fold_is_left_associated() {
        let sum = Expr::sum(vec![Expr::ident("a"), Expr::ident("b"), Expr::ident("c")]);
        let expected = Expr::binary(
            Expr::binary(Expr::ident("a"), BinaryOp::Add, Expr::ident("b")),
            BinaryOp::Add,
            Expr::ident("c"),
        );
        assert_eq!(sum, expected);
    }
}
